use libisa::Word;

pub mod capture;
pub mod stdout;

/// Where PRN and PRA send what the program prints.
pub trait Output {
    fn print_number(&mut self, value: Word);

    fn print_alpha(&mut self, value: Word);
}
