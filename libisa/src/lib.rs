pub mod instruction;
pub mod program;

pub type Word = u8;
pub type Register = usize;
pub type Immediate = Word;
pub type Address = usize;

pub const REGISTER_COUNT: usize = 8;

/// Declared for completeness, no instruction touches it yet.
pub const INTERRUPT_STATUS_REGISTER: Register = 6;
pub const STACK_POINTER_REGISTER: Register = 7;

/// Value of the stack pointer at power on, leaving the top of memory free.
pub const STACK_POINTER_INIT: Word = 0xF4;

pub const MEMORY_SIZE: usize = 256;
pub const SIMPLE_MEMORY_SIZE: usize = 32;

/// Number of bytes fetched after every opcode, whether the instruction reads them or not.
pub const FETCHED_OPERAND_COUNT: usize = 2;
