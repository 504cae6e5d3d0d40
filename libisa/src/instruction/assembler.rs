use bimap::BiMap;

use crate::Address;

use super::{AssemblyError, Instruction};

#[derive(Debug, Default)]
pub struct AssemblyOutput {
    pub machine_code: Vec<u8>,

    /// Instruction index (left) to the address of its opcode byte (right) or vice versa mapping.
    pub address_map: BiMap<usize, Address>,
}

impl AssemblyOutput {
    pub fn address_of(&self, instruction_index: usize) -> Option<Address> {
        self.address_map.get_by_left(&instruction_index).copied()
    }

    pub fn instruction_at(&self, address: Address) -> Option<usize> {
        self.address_map.get_by_right(&address).copied()
    }
}

pub fn assemble<I>(instructions: I) -> Result<AssemblyOutput, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    instructions.into_iter().enumerate().try_fold(
        AssemblyOutput::default(),
        |mut output, (index, instruction)| {
            let instruction_machine_code = instruction.assemble()?;

            output.address_map.insert(index, output.machine_code.len());
            output.machine_code.extend(instruction_machine_code);

            Ok(output)
        },
    )
}
