use libisa::{instruction::kind::InstructionKind, Address, Register, Word};

use crate::{output::Output, Emulator};

use super::{ExecuteErr, ExecuteOk, HaltReason};

impl<O> Emulator<O>
where
    O: Output,
{
    /// Runs one already fetched instruction. Control flow instructions set `pc` here,
    /// every other instruction leaves it for the caller to advance.
    pub fn execute_parsed_instruction(
        &mut self,
        kind: InstructionKind,
        [a, b]: [Word; libisa::FETCHED_OPERAND_COUNT],
    ) -> Result<ExecuteOk, ExecuteErr> {
        let reg_a = a as Register;
        let reg_b = b as Register;

        match kind {
            InstructionKind::Hlt => return Ok(ExecuteOk::Halted(HaltReason::Halt)),

            InstructionKind::Ldi => {
                *self.reg_mut(reg_a)? = b;
            }

            InstructionKind::St => {
                let dest_addr = self.reg(reg_a)?;
                let src = self.reg(reg_b)?;

                self.mem_write(dest_addr as Address, src)?;
            }

            InstructionKind::Prn => {
                let value = self.reg(reg_a)?;
                self.output.print_number(value);
            }

            InstructionKind::Pra => {
                let value = self.reg(reg_a)?;
                self.output.print_alpha(value);
            }

            InstructionKind::Add | InstructionKind::Mul | InstructionKind::Cmp => {
                let a = self.reg(reg_a)?;
                let b = self.reg(reg_b)?;

                if let Some(result) = self.alu.apply(kind, a, b)? {
                    *self.reg_mut(reg_a)? = result;
                }
            }

            InstructionKind::Push => {
                let value = self.reg(reg_a)?;
                self.push(value)?;
            }

            InstructionKind::Pop => {
                self.reg(reg_a)?;
                let value = self.pop()?;
                *self.reg_mut(reg_a)? = value;
            }

            InstructionKind::Call => {
                let target = self.reg(reg_a)? as Address;

                // The return address is the word after CALL's register operand.
                let return_addr = self.pc + kind.len();
                let return_word = Word::try_from(return_addr)
                    .map_err(|_| ExecuteErr::AddressOutOfRange(return_addr))?;

                self.push(return_word)?;
                self.pc = target;
            }

            InstructionKind::Ret => {
                self.pc = self.pop()? as Address;
            }

            InstructionKind::Jmp => {
                self.pc = self.reg(reg_a)? as Address;
            }

            InstructionKind::Jeq => self.jump_if(kind, self.alu.equal(), reg_a)?,

            InstructionKind::Jne => self.jump_if(kind, !self.alu.equal(), reg_a)?,
        }

        Ok(ExecuteOk::Normal)
    }

    /// A conditional jump that isn't taken steps over itself.
    fn jump_if(
        &mut self,
        kind: InstructionKind,
        condition: bool,
        reg_a: Register,
    ) -> Result<(), ExecuteErr> {
        if condition {
            self.pc = self.reg(reg_a)? as Address;
        } else {
            self.pc += kind.len();
        }

        Ok(())
    }
}
