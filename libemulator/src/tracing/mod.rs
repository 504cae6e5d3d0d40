use std::fmt::Display;

use libisa::{Address, Word};

use crate::{alu::flags::ALUFlags, output::Output, Emulator};

#[cfg(test)]
mod tests;

/// Machine state right before an instruction is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTrace {
    pub pc: Address,
    pub flags: ALUFlags,
    /// Words at `pc`, `pc + 1` and `pc + 2`; `None` past the end of memory.
    pub fetched: [Option<Word>; 1 + libisa::FETCHED_OPERAND_COUNT],
    pub registers: [Word; libisa::REGISTER_COUNT],
}

impl<O> Emulator<O>
where
    O: Output,
{
    pub fn state_trace(&self) -> StateTrace {
        StateTrace {
            pc: self.pc,
            flags: self.alu.flags,
            fetched: [0, 1, 2].map(|offset| self.memory.read(self.pc + offset)),
            registers: self.reg_file.array_clone(),
        }
    }
}

impl Display for StateTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TRACE: {:02X} {:02X} |", self.pc, self.flags.bits())?;

        for word in self.fetched {
            match word {
                Some(word) => write!(f, " {:02X}", word)?,
                None => f.write_str(" --")?,
            }
        }

        f.write_str(" |")?;

        for register in self.registers {
            write!(f, " {:02X}", register)?;
        }

        Ok(())
    }
}
