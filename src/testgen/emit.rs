use crate::error::Result;
use crate::testgen::arith::{Xlen, clamp_imm12};
use crate::testgen::instruction::{Instruction, InstructionFormat};
use crate::testgen::registers::RESERVED_REGISTER;
use crate::testgen::vectors::TestVector;
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Opaque header/footer boilerplate pair concatenated around the generated
/// test cases.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    pub header: String,
    pub footer: String,
}

impl FileTemplate {
    /// Read the template pair from disk. Missing files are fatal.
    pub fn load<P: AsRef<Path>>(header_file: P, footer_file: P) -> Result<Self> {
        Ok(Self {
            header: fs::read_to_string(header_file.as_ref())?,
            footer: fs::read_to_string(footer_file.as_ref())?,
        })
    }
}

/// Serializes test vectors for one output file.
///
/// Owns the running test counter that numbers the cases and spaces the
/// signature stores, and the buffer the file is assembled in.
#[derive(Debug)]
pub struct AsmEmitter {
    instruction: Instruction,
    xlen: Xlen,
    counter: usize,
    buf: String,
}

impl AsmEmitter {
    pub fn new(instruction: Instruction, xlen: Xlen) -> Self {
        Self {
            instruction,
            xlen,
            counter: 0,
            buf: String::new(),
        }
    }

    /// Number of test cases pushed so far.
    pub fn test_count(&self) -> usize {
        self.counter
    }

    /// Write the file banner and the opaque header boilerplate.
    pub fn begin(&mut self, file_name: &str, author: &str, header: &str) {
        let _ = writeln!(self.buf, "///////////////////////////////////////////");
        let _ = writeln!(self.buf, "// {}", file_name);
        let _ = writeln!(self.buf, "// {}", author);
        let _ = writeln!(
            self.buf,
            "// Created {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        self.buf.push_str(header);
    }

    /// Serialize one vector and advance the test counter.
    pub fn push_vector(&mut self, vector: &TestVector) {
        match self.instruction.format() {
            InstructionFormat::RegReg => self.push_reg_reg(vector),
            InstructionFormat::RegImm => self.push_reg_imm(vector),
        }
        self.counter += 1;
    }

    /// Append the test count, the opaque footer boilerplate and the trailing
    /// attribution, yielding the complete file contents.
    pub fn finish(mut self, file_name: &str, author: &str, footer: &str) -> String {
        let _ = writeln!(self.buf, "\n.EQU NUMTESTS,{}\n", self.counter);
        self.buf.push_str(footer);
        let _ = writeln!(self.buf, "// {}", file_name);
        let _ = writeln!(self.buf, "// {}", author);
        self.buf
    }

    fn hex(&self, value: u64) -> String {
        format!("0x{:0width$x}", value, width = self.xlen.hex_digits())
    }

    fn push_reg_reg(&mut self, vector: &TestVector) {
        let regs = vector.registers;
        let offset = self.xlen.word_size() * self.counter;

        let _ = writeln!(self.buf);
        let _ = writeln!(
            self.buf,
            "# Testcase {}:  rs1:x{}({}), rs2:x{}({}), result rd:x{}({})",
            self.counter,
            regs.rs1,
            self.hex(vector.a),
            regs.rs2,
            self.hex(vector.b),
            regs.rd,
            self.hex(vector.expected)
        );
        let _ = writeln!(self.buf, "li x{}, MASK_XLEN({})", regs.rs1, self.hex(vector.a));
        let _ = writeln!(self.buf, "li x{}, MASK_XLEN({})", regs.rs2, self.hex(vector.b));
        let _ = writeln!(
            self.buf,
            "{} x{}, x{}, x{}",
            self.instruction, regs.rd, regs.rs1, regs.rs2
        );
        let _ = writeln!(
            self.buf,
            "{} x{}, {}(x{})",
            self.xlen.store_mnemonic(),
            regs.rd,
            offset,
            RESERVED_REGISTER
        );
    }

    fn push_reg_imm(&mut self, vector: &TestVector) {
        let regs = vector.registers;
        let offset = self.xlen.word_size() * self.counter;
        // 12-bit immediate field
        let imm = clamp_imm12(vector.b);

        let _ = writeln!(self.buf);
        let _ = writeln!(
            self.buf,
            "# Testcase {}:  rs1:x{}({}), Imm({}), result rd:x{}({})",
            self.counter,
            regs.rs1,
            self.hex(vector.a),
            self.hex(imm),
            regs.rd,
            self.hex(vector.expected)
        );
        let _ = writeln!(self.buf, "li x{}, MASK_XLEN({})", regs.rs1, self.hex(vector.a));
        let _ = writeln!(
            self.buf,
            "{} x{}, x{}, {}",
            self.instruction,
            regs.rd,
            regs.rs1,
            self.hex(imm)
        );
        let _ = writeln!(
            self.buf,
            "{} x{}, {}(x{})",
            self.xlen.store_mnemonic(),
            regs.rd,
            offset,
            RESERVED_REGISTER
        );
    }
}
