use std::io::{self, Write};

use libisa::Word;

use super::Output;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn print_number(&mut self, value: Word) {
        println!("{}", value);
    }

    fn print_alpha(&mut self, value: Word) {
        print!("{}", value as char);

        // Characters usually come without a newline, so they'd otherwise sit in the line buffer.
        if let Err(e) = io::stdout().flush() {
            log::warn!("Couldn't flush stdout: {}", e);
        }
    }
}
