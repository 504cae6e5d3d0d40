use flags::ALUFlags;
use libisa::{instruction::kind::InstructionKind, Word};
use thiserror::Error;

pub mod flags;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ALUError {
    #[error("Unsupported ALU operation {0}")]
    UnsupportedOperation(InstructionKind),
}

/// Arithmetic is modulo 2^8, overflow wraps silently.
#[derive(Debug, Default)]
pub struct ALU {
    pub flags: ALUFlags,
}

impl ALU {
    pub fn new() -> Self {
        Self {
            flags: ALUFlags::empty(),
        }
    }

    /// Runs `op` on the destination and source register values.
    /// Returns the new destination value, or `None` for operations that only touch flags.
    pub fn apply(
        &mut self,
        op: InstructionKind,
        a: Word,
        b: Word,
    ) -> Result<Option<Word>, ALUError> {
        match op {
            InstructionKind::Add => Ok(Some(self.add(a, b))),
            InstructionKind::Mul => Ok(Some(self.mul(a, b))),
            InstructionKind::Cmp => {
                self.cmp(a, b);
                Ok(None)
            }
            _ => Err(ALUError::UnsupportedOperation(op)),
        }
    }

    pub fn add(&mut self, a: Word, b: Word) -> Word {
        a.wrapping_add(b)
    }

    pub fn mul(&mut self, a: Word, b: Word) -> Word {
        a.wrapping_mul(b)
    }

    pub fn cmp(&mut self, a: Word, b: Word) {
        self.flags.set(ALUFlags::EQUAL, a == b);
    }

    pub fn equal(&self) -> bool {
        self.flags.contains(ALUFlags::EQUAL)
    }
}
