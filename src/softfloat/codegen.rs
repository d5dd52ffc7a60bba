use crate::error::Result;
use chrono::Local;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Floating-point widths the conversion library covers.
pub const CONVERSION_WIDTHS: &[u32] = &[16, 32, 64];

/// Emits one C driver program per softfloat conversion function.
#[derive(Debug, Clone)]
pub struct DriverGenerator {
    author: String,
    output_dir: PathBuf,
}

impl DriverGenerator {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(author: S, output_dir: P) -> Self {
        Self {
            author: author.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Write a driver for every ordered pair of distinct widths.
    pub fn write_conversion_drivers(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;
        let mut written = Vec::new();

        for &in_bits in CONVERSION_WIDTHS {
            for &out_bits in CONVERSION_WIDTHS {
                if in_bits == out_bits {
                    continue;
                }
                let function = conversion_function(in_bits, out_bits);
                let source = self.driver_source(&function, in_bits, out_bits);
                let path = self.output_dir.join(format!("{}.c", function));
                fs::write(&path, source)?;
                info!("✅ Wrote conversion driver {}", path.display());
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Fill the driver template for one conversion function.
    ///
    /// The generated program reads the input value (and an optional rounding
    /// mode) from argv, runs the conversion, and prints input, output and the
    /// accumulated exception flags.
    pub fn driver_source(&self, function: &str, in_bits: u32, out_bits: u32) -> String {
        let date = Local::now().format("%-d %B %Y");
        // One placeholder hex digit per input nibble in the usage line.
        let example_input = "x".repeat((in_bits / 4) as usize);

        format!(
            r#"// {function}.c
// {author} {date}

#include "fpcalc_util.h"

int opSize = 0;

// Example usage:
// ./{function} {example_input} [RNE/RZ/RM/RP]
int main(int argc, char *argv[]) {{
  softfloatInit();

  if (argc == 3) softfloat_roundingMode = parseRound(argv[2]);

  uint{in_bits}_t input_binary = parseNum(argv[1]);
  float{in_bits}_t input_float;
  input_float.v = input_binary;

  float{out_bits}_t output_float = {function}(input_float);

  printf("Input:  ");
  printF{in_bits}(input_float);
  printf("Output: ");
  printF{out_bits}(output_float);
  printFlags();
}}
"#,
            function = function,
            author = self.author,
            date = date,
            example_input = example_input,
            in_bits = in_bits,
            out_bits = out_bits,
        )
    }
}

/// Name of the library conversion function between two widths.
pub fn conversion_function(in_bits: u32, out_bits: u32) -> String {
    format!("f{}_to_f{}", in_bits, out_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_conversion_function_names() {
        assert_eq!(conversion_function(16, 32), "f16_to_f32");
        assert_eq!(conversion_function(64, 16), "f64_to_f16");
    }

    #[test]
    fn test_driver_source_fills_template() {
        let generator = DriverGenerator::new("testgen", "drivers");
        let source = generator.driver_source("f16_to_f32", 16, 32);

        assert!(source.starts_with("// f16_to_f32.c\n// testgen "));
        assert!(source.contains("uint16_t input_binary = parseNum(argv[1]);"));
        assert!(source.contains("float16_t input_float;"));
        assert!(source.contains("float32_t output_float = f16_to_f32(input_float);"));
        assert!(source.contains("printF16(input_float);"));
        assert!(source.contains("printF32(output_float);"));
        // Four placeholder digits for a 16-bit input.
        assert!(source.contains("// ./f16_to_f32 xxxx [RNE/RZ/RM/RP]"));
    }

    #[test]
    fn test_example_input_width_tracks_nibbles() {
        let generator = DriverGenerator::new("testgen", "drivers");
        let source = generator.driver_source("f64_to_f32", 64, 32);
        assert!(source.contains("// ./f64_to_f32 xxxxxxxxxxxxxxxx [RNE/RZ/RM/RP]"));
    }

    #[test]
    fn test_writes_one_driver_per_distinct_pair() {
        let dir = env::temp_dir().join(format!("riscv_testgen_drivers_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let generator = DriverGenerator::new("testgen", &dir);
        let written = generator.write_conversion_drivers().unwrap();

        assert_eq!(written.len(), 6);
        assert!(dir.join("f16_to_f32.c").exists());
        assert!(dir.join("f64_to_f16.c").exists());
        assert!(!dir.join("f32_to_f32.c").exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
