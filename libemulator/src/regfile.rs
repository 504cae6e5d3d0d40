use libisa::{Register, Word};

/// General purpose registers. The stack pointer lives in `STACK_POINTER_REGISTER` like any other register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFile([Word; libisa::REGISTER_COUNT]);

impl RegFile {
    pub fn new(stack_pointer_init: Word) -> Self {
        let mut registers = [0; libisa::REGISTER_COUNT];
        registers[libisa::STACK_POINTER_REGISTER] = stack_pointer_init;

        Self(registers)
    }

    pub fn register(&self, index: Register) -> Option<Word> {
        self.0.get(index).copied()
    }

    pub fn register_mut(&mut self, index: Register) -> Option<&mut Word> {
        self.0.get_mut(index)
    }

    pub fn stack_pointer(&self) -> Word {
        self.0[libisa::STACK_POINTER_REGISTER]
    }

    pub fn stack_pointer_mut(&mut self) -> &mut Word {
        &mut self.0[libisa::STACK_POINTER_REGISTER]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }

    pub fn array_clone(&self) -> [Word; libisa::REGISTER_COUNT] {
        self.0
    }
}
