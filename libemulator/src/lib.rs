use alu::ALU;
use anyhow::bail;
use config::MachineConfig;
use dispatch::DispatchTable;
use libisa::{Address, Word};
use memory::Memory;
use output::Output;
use regfile::RegFile;

pub mod alu;
pub mod config;
pub mod dispatch;
pub mod execute;
pub mod memory;
pub mod output;
pub mod regfile;
pub mod tracing;

mod access;


pub use execute::{ExecuteErr, ExecuteOk, HaltReason};

/// A single LS-8 machine. Owns its memory, registers and dispatch table, so independent
/// instances never share state.
pub struct Emulator<O>
where
    O: Output,
{
    pub memory: Memory,
    pub reg_file: RegFile,
    pub alu: ALU,
    pub pc: Address,
    pub dispatch: DispatchTable,
    pub output: O,

    halted: Option<HaltReason>,
}

impl<O> Emulator<O>
where
    O: Output,
{
    pub fn new(config: MachineConfig, program: Vec<Word>, output: O) -> anyhow::Result<Self> {
        let program_len = program.len();
        let Some(memory) = Memory::with_program(program, config.memory_size) else {
            bail!(
                "Program ({} words) doesn't fit into memory of {} words",
                program_len,
                config.memory_size
            );
        };

        Ok(Self {
            memory,
            reg_file: RegFile::new(config.stack_pointer_init),
            alu: ALU::new(),
            pc: 0,
            dispatch: config.dispatch,
            output,
            halted: None,
        })
    }

    /// Why the machine stopped, if it has.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halted
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }
}
