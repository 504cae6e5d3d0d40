use std::ops::Range;

use libisa::{Address, Word};

#[cfg(test)]
mod tests;

/// Flat word-addressed memory. Its size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory(Vec<Word>);

impl Memory {
    pub fn new(size: usize) -> Self {
        Self(vec![0; size])
    }

    /// Copies `program` to address 0 and zero-fills the rest. `None` if `program` is longer than `size`.
    pub fn with_program(program: Vec<Word>, size: usize) -> Option<Self> {
        if program.len() > size {
            return None;
        }

        let mut data = program;
        data.resize(size, 0);

        Some(Self(data))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn read(&self, addr: Address) -> Option<Word> {
        self.0.get(addr).copied()
    }

    pub fn read_mut(&mut self, addr: Address) -> Option<&mut Word> {
        self.0.get_mut(addr)
    }

    /// Returns `None` without touching memory if `addr` is out of range.
    pub fn write(&mut self, addr: Address, value: Word) -> Option<()> {
        *self.read_mut(addr)? = value;
        Some(())
    }

    /// Words in `range`, clamped to the end of memory.
    pub fn slice(&self, range: Range<Address>) -> &[Word] {
        let end = range.end.min(self.0.len());
        let start = range.start.min(end);

        &self.0[start..end]
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }
}
