use libisa::instruction::{assembler::assemble, kind::InstructionKind, Instruction};

use crate::{config::MachineConfig, output::capture::CaptureOutput, Emulator};

#[test]
fn trace_shows_fetch_window_and_registers() -> anyhow::Result<()> {
    let program = assemble([
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(0x2A),
        Instruction::new(InstructionKind::Hlt),
    ])?
    .machine_code;

    let mut emulator = Emulator::new(MachineConfig::full(), program, CaptureOutput::new())?;

    assert_eq!(
        emulator.state_trace().to_string(),
        "TRACE: 00 00 | 82 00 2A | 00 00 00 00 00 00 00 F4"
    );

    emulator.execute_instruction()?;

    assert_eq!(
        emulator.state_trace().to_string(),
        "TRACE: 03 00 | 01 00 00 | 2A 00 00 00 00 00 00 F4"
    );

    Ok(())
}

#[test]
fn trace_marks_words_past_end_of_memory() -> anyhow::Result<()> {
    let mut emulator = Emulator::new(MachineConfig::simple(), vec![], CaptureOutput::new())?;
    emulator.pc = 31;

    let trace = emulator.state_trace();

    assert_eq!(trace.fetched, [Some(0), None, None]);
    assert!(trace.to_string().starts_with("TRACE: 1F 00 | 00 -- -- |"));

    Ok(())
}
