use libisa::instruction::{assembler::assemble, kind::InstructionKind, Instruction};

use crate::Deassembler;

#[test]
fn deassembles_program() {
    let program = assemble([
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(8),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Hlt),
    ])
    .unwrap()
    .machine_code;

    assert_eq!(
        Deassembler::new(&program).deassemble_text(),
        "00: LDI R0, 8\n03: PRN R0\n05: HLT"
    );
}

#[test]
fn skips_unrecognized_words() {
    let program = [0x00, 0b0001_0001];

    let lines = Deassembler::new(&program).deassemble();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, 0);
    assert!(lines[0].1.is_err());
    assert_eq!(lines[1], (1, Ok(Instruction::new(InstructionKind::Ret))));
}

#[test]
fn truncated_instruction() {
    let program = [0b1010_0000, 1];
    let mut deassembler = Deassembler::new(&program);

    assert_eq!(
        deassembler.deassemble_instruction(),
        Err("<incomplete instruction>".to_string())
    );
    assert!(deassembler.is_done());
}

#[test]
fn starts_mid_image() {
    let program = [0b1000_0010, 0, 8, 0b0100_0111, 0];
    let mut deassembler = Deassembler::starting_at(&program, 3);

    assert_eq!(deassembler.deassemble_instruction_text(), "03: PRN R0");
    assert_eq!(deassembler.addr(), 5);
}

#[test]
fn disabled_kinds_are_skipped() {
    let program = assemble([
        Instruction::new(InstructionKind::Add)
            .with_reg_a(0)
            .with_reg_b(1),
        Instruction::new(InstructionKind::Hlt),
    ])
    .unwrap()
    .machine_code;
    let enabled = |kind: InstructionKind| kind != InstructionKind::Add;

    let lines = Deassembler::new(&program).with_enabled(&enabled).deassemble();

    assert_eq!(lines[0], (0, Err("<ADD not enabled>".to_string())));
    assert_eq!(lines.last(), Some(&(3, Ok(Instruction::new(InstructionKind::Hlt)))));
}
