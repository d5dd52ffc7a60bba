use crate::error::TestgenError;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Operand shape of an instruction under test, fixed per mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionFormat {
    /// rd, rs1, rs2
    RegReg,
    /// rd, rs1, imm12
    RegImm,
}

/// Integer ALU instructions covered by the generated test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Instruction {
    Add,
    And,
    Or,
    Sub,
    Slt,
    Sltu,
    Xor,
    Addi,
    Addiw,
}

impl Instruction {
    pub fn format(&self) -> InstructionFormat {
        match self {
            Instruction::Addi | Instruction::Addiw => InstructionFormat::RegImm,
            _ => InstructionFormat::RegReg,
        }
    }

    /// Mnemonic as it appears in the emitted assembly.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Add => "ADD",
            Instruction::And => "AND",
            Instruction::Or => "OR",
            Instruction::Sub => "SUB",
            Instruction::Slt => "SLT",
            Instruction::Sltu => "SLTU",
            Instruction::Xor => "XOR",
            Instruction::Addi => "ADDI",
            Instruction::Addiw => "ADDIW",
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl FromStr for Instruction {
    type Err = TestgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADD" => Ok(Instruction::Add),
            "AND" => Ok(Instruction::And),
            "OR" => Ok(Instruction::Or),
            "SUB" => Ok(Instruction::Sub),
            "SLT" => Ok(Instruction::Slt),
            "SLTU" => Ok(Instruction::Sltu),
            "XOR" => Ok(Instruction::Xor),
            "ADDI" => Ok(Instruction::Addi),
            "ADDIW" => Ok(Instruction::Addiw),
            _ => Err(TestgenError::unsupported_instruction(s)),
        }
    }
}

impl TryFrom<String> for Instruction {
    type Error = TestgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Instruction> for String {
    fn from(instruction: Instruction) -> Self {
        instruction.mnemonic().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_mnemonic_round_trip() {
        for instruction in all::<Instruction>() {
            let parsed: Instruction = instruction.mnemonic().parse().unwrap();
            assert_eq!(parsed, instruction);
        }
    }

    #[test]
    fn test_lowercase_mnemonics_accepted() {
        assert_eq!("sltu".parse::<Instruction>().unwrap(), Instruction::Sltu);
    }

    #[test]
    fn test_unknown_mnemonic_is_fatal() {
        let err = "MULH".parse::<Instruction>().unwrap_err();
        assert!(matches!(
            err,
            TestgenError::UnsupportedInstruction { ref mnemonic } if mnemonic == "MULH"
        ));
    }

    #[test]
    fn test_format_classification() {
        assert_eq!(Instruction::Add.format(), InstructionFormat::RegReg);
        assert_eq!(Instruction::Sltu.format(), InstructionFormat::RegReg);
        assert_eq!(Instruction::Addi.format(), InstructionFormat::RegImm);
        assert_eq!(Instruction::Addiw.format(), InstructionFormat::RegImm);
    }

    #[test]
    fn test_covers_all_nine_instructions() {
        assert_eq!(all::<Instruction>().count(), 9);
    }
}
