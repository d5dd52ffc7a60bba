pub mod arith;
pub mod emit;
pub mod instruction;
pub mod registers;
pub mod suite;
pub mod vectors;
