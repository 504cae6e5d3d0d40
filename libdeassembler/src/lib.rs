use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Address, Word,
};

#[cfg(test)]
mod tests;

/// Walks a memory image from a start address, turning opcodes back into instructions.
/// Unrecognized words are reported and skipped one word at a time, since images mix code with data.
pub struct Deassembler<'a> {
    code: &'a [Word],
    addr: Address,
    enabled: Option<&'a dyn Fn(InstructionKind) -> bool>,
}

impl<'a> Deassembler<'a> {
    pub fn new(code: &'a [Word]) -> Self {
        Self::starting_at(code, 0)
    }

    pub fn starting_at(code: &'a [Word], addr: Address) -> Self {
        Self {
            code,
            addr,
            enabled: None,
        }
    }

    /// Treats kinds rejected by `enabled` like unrecognized words, for machines with a reduced set.
    pub fn with_enabled(mut self, enabled: &'a dyn Fn(InstructionKind) -> bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn addr(&self) -> Address {
        self.addr
    }

    pub fn is_done(&self) -> bool {
        self.addr >= self.code.len()
    }

    pub fn deassemble(mut self) -> Vec<(Address, Result<Instruction, String>)> {
        let mut output = Vec::new();

        while !self.is_done() {
            let addr = self.addr;
            output.push((addr, self.deassemble_instruction()));
        }

        output
    }

    pub fn deassemble_text(self) -> String {
        self.deassemble()
            .into_iter()
            .map(|(addr, instruction)| format_line(addr, instruction))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn deassemble_instruction(&mut self) -> Result<Instruction, String> {
        let opcode = *self
            .code
            .get(self.addr)
            .ok_or("<out of deassembler bounds>".to_string())?;

        let instruction = match Instruction::decode(opcode, self.operands()) {
            Ok(instruction) => instruction,
            Err(e) => {
                self.addr += 1;
                return Err(format!("<{}>", e));
            }
        };

        if self.enabled.is_some_and(|enabled| !enabled(instruction.kind)) {
            self.addr += 1;
            return Err(format!("<{} not enabled>", instruction.kind));
        }

        if self.addr + instruction.len() > self.code.len() {
            self.addr = self.code.len();
            return Err("<incomplete instruction>".to_string());
        }

        self.addr += instruction.len();
        Ok(instruction)
    }

    pub fn deassemble_instruction_text(&mut self) -> String {
        let addr = self.addr;
        format_line(addr, self.deassemble_instruction())
    }

    // Missing trailing words read as zero here; the length check above catches instructions that need them.
    fn operands(&self) -> [Word; libisa::FETCHED_OPERAND_COUNT] {
        [1, 2].map(|offset| self.code.get(self.addr + offset).copied().unwrap_or(0))
    }
}

fn format_line(addr: Address, instruction: Result<Instruction, String>) -> String {
    match instruction {
        Ok(instruction) => format!("{:02X}: {}", addr, instruction),
        Err(e) => format!("{:02X}: {}", addr, e),
    }
}
