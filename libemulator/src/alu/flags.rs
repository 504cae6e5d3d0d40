use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ALUFlags: u8 {
        const EQUAL = 0b1;
    }
}
