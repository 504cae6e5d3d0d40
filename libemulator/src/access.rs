use libisa::{Address, Register, Word};

use crate::{output::Output, Emulator, ExecuteErr};

impl<O> Emulator<O>
where
    O: Output,
{
    pub(crate) fn reg(&self, index: Register) -> Result<Word, ExecuteErr> {
        self.reg_file
            .register(index)
            .ok_or(ExecuteErr::RegisterOutOfRange(index))
    }

    pub(crate) fn reg_mut(&mut self, index: Register) -> Result<&mut Word, ExecuteErr> {
        self.reg_file
            .register_mut(index)
            .ok_or(ExecuteErr::RegisterOutOfRange(index))
    }

    pub(crate) fn mem_read(&self, addr: Address) -> Result<Word, ExecuteErr> {
        self.memory
            .read(addr)
            .ok_or(ExecuteErr::AddressOutOfRange(addr))
    }

    pub(crate) fn mem_write(&mut self, addr: Address, value: Word) -> Result<(), ExecuteErr> {
        self.memory
            .write(addr, value)
            .ok_or(ExecuteErr::AddressOutOfRange(addr))
    }

    /// Decrements the stack pointer, then stores `value` where it points.
    /// The stack pointer only moves once the write succeeded.
    pub(crate) fn push(&mut self, value: Word) -> Result<(), ExecuteErr> {
        let sp = self.reg_file.stack_pointer().wrapping_sub(1);
        self.mem_write(sp as Address, value)?;

        *self.reg_file.stack_pointer_mut() = sp;
        Ok(())
    }

    /// Reads the word the stack pointer points at, then increments the stack pointer.
    pub(crate) fn pop(&mut self) -> Result<Word, ExecuteErr> {
        let sp = self.reg_file.stack_pointer();
        let value = self.mem_read(sp as Address)?;

        *self.reg_file.stack_pointer_mut() = sp.wrapping_add(1);

        Ok(value)
    }
}
