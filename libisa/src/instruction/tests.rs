use std::collections::HashSet;

use super::{
    assembler::assemble,
    kind::{self, InstructionKind},
    AssemblyError, Instruction, InstructionDecodeError,
};

#[test]
fn declared_layouts_match_opcode_bits() {
    for kind in InstructionKind::ALL {
        assert_eq!(
            kind.layout().len(),
            kind::operand_count(kind.opcode()),
            "operand layout of {kind} disagrees with its opcode {:#010b}",
            kind.opcode()
        );
    }
}

#[test]
fn only_control_flow_sets_pc() {
    let sets_pc: HashSet<_> = InstructionKind::ALL
        .into_iter()
        .filter(|kind| kind.sets_pc())
        .collect();

    assert_eq!(
        sets_pc,
        HashSet::from([
            InstructionKind::Call,
            InstructionKind::Ret,
            InstructionKind::Jmp,
            InstructionKind::Jeq,
            InstructionKind::Jne,
        ])
    );
}

#[test]
fn alu_bit_marks_alu_instructions() {
    let alu: HashSet<_> = InstructionKind::ALL
        .into_iter()
        .filter(|kind| kind.is_alu())
        .collect();

    assert_eq!(
        alu,
        HashSet::from([
            InstructionKind::Add,
            InstructionKind::Mul,
            InstructionKind::Cmp
        ])
    );
}

#[test]
fn every_kind_has_a_unique_opcode() {
    let opcodes: HashSet<_> = InstructionKind::ALL.iter().map(|kind| kind.opcode()).collect();
    assert_eq!(opcodes.len(), InstructionKind::ALL.len());

    for kind in InstructionKind::ALL {
        assert_eq!(InstructionKind::from_opcode(kind.opcode()), Some(kind));
    }
}

#[test]
fn assembles_operands_by_layout() {
    assert_eq!(
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(2)
            .with_immediate(42)
            .assemble(),
        Ok(vec![0b1000_0010, 2, 42])
    );
    assert_eq!(
        Instruction::new(InstructionKind::Push).with_reg_a(1).assemble(),
        Ok(vec![0b0100_0101, 1])
    );
    assert_eq!(
        Instruction::new(InstructionKind::Ret).assemble(),
        Ok(vec![0b0001_0001])
    );
}

#[test]
fn assembly_reports_missing_operands() {
    assert_eq!(
        Instruction::new(InstructionKind::Add).with_reg_a(0).assemble(),
        Err(AssemblyError::MissingRegister(InstructionKind::Add))
    );
    assert_eq!(
        Instruction::new(InstructionKind::Ldi).with_reg_a(0).assemble(),
        Err(AssemblyError::MissingImmediate(InstructionKind::Ldi))
    );
    assert_eq!(
        Instruction::new(InstructionKind::Prn).with_reg_a(300).assemble(),
        Err(AssemblyError::RegisterOverflow(300))
    );
}

#[test]
fn decode_ignores_unused_operand_bytes() {
    let instruction = Instruction::decode(0b0100_0111, [3, 99]).unwrap();

    assert_eq!(instruction, Instruction::new(InstructionKind::Prn).with_reg_a(3));
    assert_eq!(instruction.to_string(), "PRN R3");
}

#[test]
fn decode_rejects_unknown_opcode() {
    assert_eq!(
        Instruction::decode(0, [0, 0]),
        Err(InstructionDecodeError::UnrecognizedOpcode(0))
    );
}

#[test]
fn assembler_maps_instructions_to_addresses() {
    let output = assemble([
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(8),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Hlt),
    ])
    .unwrap();

    assert_eq!(output.machine_code, [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
    assert_eq!(output.address_of(2), Some(5));
    assert_eq!(output.instruction_at(3), Some(1));
    assert_eq!(output.instruction_at(4), None);
}
