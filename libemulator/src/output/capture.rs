use libisa::Word;

use super::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Printed {
    Number(Word),
    Alpha(char),
}

/// Keeps printed values in memory instead of writing them anywhere.
#[derive(Debug, Clone, Default)]
pub struct CaptureOutput {
    pub printed: Vec<Printed>,
}

impl CaptureOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numbers(&self) -> Vec<Word> {
        self.printed
            .iter()
            .filter_map(|printed| match printed {
                Printed::Number(value) => Some(*value),
                Printed::Alpha(_) => None,
            })
            .collect()
    }

    /// What the program would have written to a terminal.
    pub fn text(&self) -> String {
        self.printed
            .iter()
            .map(|printed| match printed {
                Printed::Number(value) => format!("{}\n", value),
                Printed::Alpha(c) => c.to_string(),
            })
            .collect()
    }
}

impl Output for CaptureOutput {
    fn print_number(&mut self, value: Word) {
        self.printed.push(Printed::Number(value));
    }

    fn print_alpha(&mut self, value: Word) {
        self.printed.push(Printed::Alpha(value as char));
    }
}
