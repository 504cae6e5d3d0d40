use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::Word;

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, Word> = BiMap::from_iter([
        (InstructionKind::Hlt, 0b0000_0001),
        (InstructionKind::Ldi, 0b1000_0010),
        (InstructionKind::Prn, 0b0100_0111),
        (InstructionKind::Pra, 0b0100_1000),
        (InstructionKind::Add, 0b1010_0000),
        (InstructionKind::Mul, 0b1010_0010),
        (InstructionKind::Push, 0b0100_0101),
        (InstructionKind::Pop, 0b0100_0110),
        (InstructionKind::Call, 0b0101_0000),
        (InstructionKind::Ret, 0b0001_0001),
        (InstructionKind::Cmp, 0b1010_0111),
        (InstructionKind::Jmp, 0b0101_0100),
        (InstructionKind::Jeq, 0b0101_0101),
        (InstructionKind::Jne, 0b0101_0110),
        (InstructionKind::St, 0b1000_0100),
    ]);
}

// Opcode layout is AABCDDDD: operand count, ALU flag, sets-PC flag, identifier.
const OPERAND_COUNT_SHIFT: u32 = 6;
const OPERAND_COUNT_MASK: Word = 0b11;
const ALU_BIT: Word = 0b0010_0000;
const SETS_PC_BIT: Word = 0b0001_0000;

/// Number of operand bytes an opcode declares in its two high bits.
pub fn operand_count(opcode: Word) -> usize {
    ((opcode >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
}

/// Whether an opcode updates the program counter itself instead of relying on auto-advance.
pub fn sets_pc(opcode: Word) -> bool {
    opcode & SETS_PC_BIT != 0
}

pub fn is_alu(opcode: Word) -> bool {
    opcode & ALU_BIT != 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Hlt,

    Ldi,
    St,

    Prn,
    Pra,

    Add,
    Mul,
    Cmp,

    Push,
    Pop,
    Call,
    Ret,

    Jmp,
    Jeq,
    Jne,
}

/// How the operand bytes following an opcode are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandLayout {
    None,
    Reg,
    RegReg,
    RegImm,
}

impl OperandLayout {
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Reg => 1,
            Self::RegReg | Self::RegImm => 2,
        }
    }
}

impl InstructionKind {
    pub const ALL: [Self; 15] = [
        Self::Hlt,
        Self::Ldi,
        Self::St,
        Self::Prn,
        Self::Pra,
        Self::Add,
        Self::Mul,
        Self::Cmp,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    pub fn from_opcode(opcode: Word) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> Word {
        *KIND_OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for instruction kind")
    }

    pub fn operand_count(&self) -> usize {
        operand_count(self.opcode())
    }

    /// Opcode plus operand bytes, i.e. how far the program counter auto-advances.
    pub fn len(&self) -> usize {
        self.operand_count() + 1
    }

    pub fn sets_pc(&self) -> bool {
        sets_pc(self.opcode())
    }

    pub fn is_alu(&self) -> bool {
        is_alu(self.opcode())
    }

    pub fn layout(&self) -> OperandLayout {
        match self {
            Self::Hlt | Self::Ret => OperandLayout::None,
            Self::Ldi => OperandLayout::RegImm,
            Self::St | Self::Add | Self::Mul | Self::Cmp => OperandLayout::RegReg,
            Self::Prn
            | Self::Pra
            | Self::Push
            | Self::Pop
            | Self::Call
            | Self::Jmp
            | Self::Jeq
            | Self::Jne => OperandLayout::Reg,
        }
    }

    /// Short human description of what the instruction does, for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hlt => "halting",
            Self::Ldi => "loading immediate into register",
            Self::St => "storing register to memory",
            Self::Prn => "printing number",
            Self::Pra => "printing character",
            Self::Add => "adding",
            Self::Mul => "multiplying",
            Self::Cmp => "comparing register values",
            Self::Push => "pushing to stack",
            Self::Pop => "popping from stack",
            Self::Call => "calling subroutine",
            Self::Ret => "returning from subroutine",
            Self::Jmp => "jumping",
            Self::Jeq => "jumping if equal",
            Self::Jne => "jumping if not equal",
        }
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::St => "ST",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        })
    }
}
