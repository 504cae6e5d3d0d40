use std::collections::HashMap;

use libisa::{instruction::kind::InstructionKind, Word};

/// Opcodes a machine accepts. Anything missing here is an unknown instruction to the engine,
/// even if the ISA defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable(HashMap<Word, InstructionKind>);

impl DispatchTable {
    pub fn new<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = InstructionKind>,
    {
        Self(
            kinds
                .into_iter()
                .map(|kind| (kind.opcode(), kind))
                .collect(),
        )
    }

    pub fn full() -> Self {
        Self::new(InstructionKind::ALL)
    }

    /// HLT, LDI, PRN and MUL only. No stack, no flags.
    pub fn simple() -> Self {
        Self::new([
            InstructionKind::Hlt,
            InstructionKind::Ldi,
            InstructionKind::Prn,
            InstructionKind::Mul,
        ])
    }

    pub fn lookup(&self, opcode: Word) -> Option<InstructionKind> {
        self.0.get(&opcode).copied()
    }

    pub fn contains(&self, kind: InstructionKind) -> bool {
        self.0.contains_key(&kind.opcode())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
