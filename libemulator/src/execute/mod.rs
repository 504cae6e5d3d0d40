use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Address, Register, Word,
};
use log::{debug, trace, warn};
use thiserror::Error;

use crate::{alu::ALUError, output::Output, Emulator};

mod parsed;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A HLT instruction ran.
    Halt,
    /// The program counter moved past the last word of memory.
    EndOfMemory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted(HaltReason),
}

/// Every variant is fatal to the run; the machine state is left as it was when the fault happened.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("Unknown instruction: {opcode} (at address {pc})")]
    UnknownOpcode { opcode: Word, pc: Address },

    #[error("Address {0} out of range")]
    AddressOutOfRange(Address),

    #[error("Register {0} out of range")]
    RegisterOutOfRange(Register),

    #[error(transparent)]
    Alu(#[from] ALUError),
}

impl<O> Emulator<O>
where
    O: Output,
{
    /// Runs until the machine halts or faults. There's no step limit, a program looping forever never returns.
    pub fn run(&mut self) -> Result<HaltReason, ExecuteErr> {
        loop {
            if let ExecuteOk::Halted(reason) = self.execute_instruction()? {
                return Ok(reason);
            }
        }
    }

    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        if let Some(reason) = self.halted {
            return Ok(ExecuteOk::Halted(reason));
        }

        if self.pc >= self.memory.len() {
            warn!("Program counter {} ran off the end of memory", self.pc);

            self.halted = Some(HaltReason::EndOfMemory);
            return Ok(ExecuteOk::Halted(HaltReason::EndOfMemory));
        }

        trace!("{}", self.state_trace());

        let (kind, operands) = self.fetch_instruction()?;

        debug!(
            "{:#04x}: {} encountered... {}",
            self.pc,
            Instruction::from_operands(kind, operands),
            kind.description()
        );

        let result = self.execute_parsed_instruction(kind, operands)?;

        if !kind.sets_pc() {
            self.pc += kind.len();
        }

        if let ExecuteOk::Halted(reason) = result {
            self.halted = Some(reason);
        }

        Ok(result)
    }

    /// Reads the opcode and both following words, then looks the opcode up in the dispatch table.
    /// Both operand words must be in memory even if the instruction doesn't use them.
    fn fetch_instruction(
        &self,
    ) -> Result<(InstructionKind, [Word; libisa::FETCHED_OPERAND_COUNT]), ExecuteErr> {
        let opcode = self.mem_read(self.pc)?;
        let operands = [self.mem_read(self.pc + 1)?, self.mem_read(self.pc + 2)?];

        let kind = self
            .dispatch
            .lookup(opcode)
            .ok_or(ExecuteErr::UnknownOpcode {
                opcode,
                pc: self.pc,
            })?;

        Ok((kind, operands))
    }
}
