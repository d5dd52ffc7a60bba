use crate::error::TestgenError;
use crate::testgen::instruction::Instruction;
use serde::{Deserialize, Serialize};

/// Register width the vectors are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Xlen {
    Rv32,
    Rv64,
}

impl Xlen {
    pub fn bits(&self) -> u32 {
        match self {
            Xlen::Rv32 => 32,
            Xlen::Rv64 => 64,
        }
    }

    /// All-ones mask for the register width, i.e. 2^XLEN - 1.
    pub fn mask(&self) -> u64 {
        match self {
            Xlen::Rv32 => 0xFFFF_FFFF,
            Xlen::Rv64 => u64::MAX,
        }
    }

    /// Hex digits needed to print a full register value.
    pub fn hex_digits(&self) -> usize {
        (self.bits() / 4) as usize
    }

    /// Store instruction used to write results into the signature area.
    pub fn store_mnemonic(&self) -> &'static str {
        match self {
            Xlen::Rv32 => "sw",
            Xlen::Rv64 => "sd",
        }
    }

    /// Bytes per stored result, used to space the signature offsets.
    pub fn word_size(&self) -> usize {
        match self {
            Xlen::Rv32 => 4,
            Xlen::Rv64 => 8,
        }
    }
}

impl TryFrom<u32> for Xlen {
    type Error = TestgenError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Xlen::Rv32),
            64 => Ok(Xlen::Rv64),
            other => Err(TestgenError::config(format!(
                "Unsupported XLEN: {} (expected 32 or 64)",
                other
            ))),
        }
    }
}

impl From<Xlen> for u32 {
    fn from(xlen: Xlen) -> Self {
        xlen.bits()
    }
}

/// Signed interpretation of an XLEN-bit unsigned value under standard
/// two's-complement rules. Total over all width-bit inputs.
pub fn twos_complement(value: u64, xlen: Xlen) -> i64 {
    match xlen {
        Xlen::Rv32 => (value as u32) as i32 as i64,
        Xlen::Rv64 => value as i64,
    }
}

/// Inverse of [`twos_complement`]: unsigned XLEN-bit representation of a
/// signed value.
pub fn from_signed(value: i64, xlen: Xlen) -> u64 {
    (value as u64) & xlen.mask()
}

/// Architecturally defined result for one instruction over two unsigned
/// operands. May be negative or exceed the register range; callers reduce it
/// with [`canonicalize`] before serialization.
pub fn expected_value(instruction: Instruction, a: u64, b: u64, xlen: Xlen) -> i128 {
    let a_signed = twos_complement(a, xlen);
    let b_signed = twos_complement(b, xlen);

    match instruction {
        Instruction::Add | Instruction::Addi | Instruction::Addiw => a as i128 + b as i128,
        Instruction::Sub => a as i128 - b as i128,
        Instruction::Slt => (a_signed < b_signed) as i128,
        Instruction::Sltu => (a < b) as i128,
        Instruction::Xor => (a ^ b) as i128,
        Instruction::Or => (a | b) as i128,
        Instruction::And => (a & b) as i128,
    }
}

/// Reduce a raw result modulo 2^XLEN, re-biasing negative values into the
/// unsigned range. Every expected value passes through here before it is
/// serialized.
pub fn canonicalize(raw: i128, xlen: Xlen) -> u64 {
    let modulus = 1i128 << xlen.bits();
    let mut reduced = raw % modulus;
    if reduced < 0 {
        reduced += modulus;
    }
    reduced as u64
}

/// Clamp an operand into the range representable by a 12-bit immediate field.
pub fn clamp_imm12(value: u64) -> u64 {
    value.min(0x7FF)
}
