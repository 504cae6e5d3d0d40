use std::fmt::Display;

use kind::{InstructionKind, OperandLayout};
use thiserror::Error;

use crate::{Immediate, Register, Word};

pub mod assembler;
pub mod kind;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Missing register operand for {0}")]
    MissingRegister(InstructionKind),

    #[error("Missing immediate for {0}")]
    MissingImmediate(InstructionKind),

    #[error("Register {0} doesn't fit into an operand byte")]
    RegisterOverflow(Register),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InstructionDecodeError {
    #[error("Unrecognized opcode {0:#010b}")]
    UnrecognizedOpcode(Word),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub reg_a: Option<Register>,
    pub reg_b: Option<Register>,
    pub immediate: Option<Immediate>,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            reg_a: None,
            reg_b: None,
            immediate: None,
        }
    }

    pub const fn with_reg_a(mut self, reg_a: Register) -> Self {
        self.reg_a = Some(reg_a);
        self
    }

    pub const fn with_reg_b(mut self, reg_b: Register) -> Self {
        self.reg_b = Some(reg_b);
        self
    }

    pub const fn with_immediate(mut self, immediate: Immediate) -> Self {
        self.immediate = Some(immediate);
        self
    }

    pub fn len(&self) -> usize {
        self.kind.len()
    }

    pub fn assemble(self) -> Result<Vec<u8>, AssemblyError> {
        let mut output = Vec::with_capacity(self.len());
        output.push(self.kind.opcode());

        let layout = self.kind.layout();

        if layout != OperandLayout::None {
            let reg_a = self.reg_a.ok_or(AssemblyError::MissingRegister(self.kind))?;
            output.push(Self::register_byte(reg_a)?);
        }

        match layout {
            OperandLayout::RegReg => {
                let reg_b = self.reg_b.ok_or(AssemblyError::MissingRegister(self.kind))?;
                output.push(Self::register_byte(reg_b)?);
            }
            OperandLayout::RegImm => {
                let immediate = self
                    .immediate
                    .ok_or(AssemblyError::MissingImmediate(self.kind))?;
                output.push(immediate);
            }
            OperandLayout::None | OperandLayout::Reg => {}
        }

        Ok(output)
    }

    /// Builds an instruction from an already looked up kind and the two bytes following its opcode.
    /// Bytes the kind doesn't read are ignored.
    pub fn from_operands(
        kind: InstructionKind,
        [a, b]: [Word; crate::FETCHED_OPERAND_COUNT],
    ) -> Self {
        let instruction = Self::new(kind);

        match kind.layout() {
            OperandLayout::None => instruction,
            OperandLayout::Reg => instruction.with_reg_a(a as Register),
            OperandLayout::RegReg => instruction
                .with_reg_a(a as Register)
                .with_reg_b(b as Register),
            OperandLayout::RegImm => instruction.with_reg_a(a as Register).with_immediate(b),
        }
    }

    pub fn decode(
        opcode: Word,
        operands: [Word; crate::FETCHED_OPERAND_COUNT],
    ) -> Result<Self, InstructionDecodeError> {
        let kind = InstructionKind::from_opcode(opcode)
            .ok_or(InstructionDecodeError::UnrecognizedOpcode(opcode))?;

        Ok(Self::from_operands(kind, operands))
    }

    fn register_byte(register: Register) -> Result<Word, AssemblyError> {
        Word::try_from(register).map_err(|_| AssemblyError::RegisterOverflow(register))
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))?;

        if let Some(reg_a) = self.reg_a {
            f.write_fmt(format_args!(" R{}", reg_a))?;
        }

        if let Some(reg_b) = self.reg_b {
            f.write_fmt(format_args!(", R{}", reg_b))?;
        }

        if let Some(immediate) = self.immediate {
            f.write_fmt(format_args!(", {}", immediate))?;
        }

        Ok(())
    }
}
