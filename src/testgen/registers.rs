use crate::error::{Result, TestgenError};
use rand::Rng;
use serde::Serialize;

/// Base register holding the signature area pointer; never handed out as an
/// operand or destination.
pub const RESERVED_REGISTER: u32 = 6;

/// Cap on rejected draws before allocation fails deterministically.
const MAX_DRAW_ATTEMPTS: usize = 256;

/// Operand registers for one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterSet {
    pub rs1: u32,
    pub rs2: u32,
    pub rd: u32,
}

/// Draw three register indices from x1..x31, rejecting any draw that touches
/// the reserved base register or where the two source registers coincide.
pub fn draw_registers<R: Rng>(rng: &mut R) -> Result<RegisterSet> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let rs1 = rng.random_range(1..=31);
        let rs2 = rng.random_range(1..=31);
        let rd = rng.random_range(1..=31);

        if rs1 == RESERVED_REGISTER
            || rs2 == RESERVED_REGISTER
            || rd == RESERVED_REGISTER
            || rs1 == rs2
        {
            continue;
        }

        return Ok(RegisterSet { rs1, rs2, rd });
    }

    Err(TestgenError::register_allocation(format!(
        "no acceptable register set after {} attempts",
        MAX_DRAW_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reserved_register_never_returned() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let regs = draw_registers(&mut rng).unwrap();
            assert_ne!(regs.rs1, RESERVED_REGISTER);
            assert_ne!(regs.rs2, RESERVED_REGISTER);
            assert_ne!(regs.rd, RESERVED_REGISTER);
        }
    }

    #[test]
    fn test_source_registers_distinct() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let regs = draw_registers(&mut rng).unwrap();
            assert_ne!(regs.rs1, regs.rs2);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let regs = draw_registers(&mut rng).unwrap();
            for reg in [regs.rs1, regs.rs2, regs.rd] {
                assert!((1..=31).contains(&reg));
            }
        }
    }
}
