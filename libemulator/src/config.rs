use libisa::Word;

use crate::dispatch::DispatchTable;

/// Everything that differs between machine variants. Both run on the same engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub memory_size: usize,
    pub dispatch: DispatchTable,
    pub stack_pointer_init: Word,
}

impl MachineConfig {
    /// 256 words of memory and the whole instruction set.
    pub fn full() -> Self {
        Self {
            memory_size: libisa::MEMORY_SIZE,
            dispatch: DispatchTable::full(),
            stack_pointer_init: libisa::STACK_POINTER_INIT,
        }
    }

    /// 32 words of memory, no stack.
    pub fn simple() -> Self {
        Self {
            memory_size: libisa::SIMPLE_MEMORY_SIZE,
            dispatch: DispatchTable::simple(),
            stack_pointer_init: 0,
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Full,
    Simple,
}

impl Variant {
    pub fn config(&self) -> MachineConfig {
        match self {
            Self::Full => MachineConfig::full(),
            Self::Simple => MachineConfig::simple(),
        }
    }
}
