use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parsed C declaration: ordered input types and the return type. Built once
/// from a header scan, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub inputs: Vec<String>,
    pub output: String,
}

/// Scan header text for `<return-type> <name>(<args>);` declarations at line
/// start. Lines that do not match are not function declarations and are
/// skipped without comment.
pub fn parse_signatures(content: &str) -> BTreeMap<String, FunctionSignature> {
    let pattern = Regex::new(r"^(\w+)\s+(\w+)\(([^)]*)\);").expect("declaration pattern is valid");
    let mut functions = BTreeMap::new();

    for line in content.lines() {
        let Some(captures) = pattern.captures(line.trim()) else {
            continue;
        };

        let name = captures[2].to_string();
        let output = captures[1].to_string();
        let args = captures[3].trim();
        let inputs = if args.is_empty() {
            Vec::new()
        } else {
            args.split(',').map(|arg| arg.trim().to_string()).collect()
        };

        functions.insert(name, FunctionSignature { inputs, output });
    }

    functions
}

/// Read a header file and extract its function signatures. A missing or
/// unreadable file is fatal.
pub fn load_signatures<P: AsRef<Path>>(header: P) -> Result<BTreeMap<String, FunctionSignature>> {
    let content = fs::read_to_string(header.as_ref())?;
    Ok(parse_signatures(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HEADER: &str = r#"
/*----------------------------------------------------------------------------
| Conversion declarations.
*----------------------------------------------------------------------------*/
#ifndef softfloat_h
#define softfloat_h 1

float32_t f16_to_f32( float16_t );
float64_t f16_to_f64( float16_t );
uint_fast32_t f32_to_ui32( float32_t, uint_fast8_t, bool );
float16_t f32_to_f16( float32_t );
void softfloat_init(void);

#endif
"#;

    #[test]
    fn test_parses_matching_declarations() {
        let functions = parse_signatures(SAMPLE_HEADER);

        let sig = &functions["f16_to_f32"];
        assert_eq!(sig.output, "float32_t");
        assert_eq!(sig.inputs, vec!["float16_t"]);

        let sig = &functions["f32_to_ui32"];
        assert_eq!(sig.output, "uint_fast32_t");
        assert_eq!(sig.inputs, vec!["float32_t", "uint_fast8_t", "bool"]);
    }

    #[test]
    fn test_non_matching_lines_skipped_silently() {
        let functions = parse_signatures(SAMPLE_HEADER);

        // Comments, preprocessor lines and blanks never produce entries.
        assert_eq!(functions.len(), 5);
        assert!(!functions.contains_key("softfloat_h"));
    }

    #[test]
    fn test_empty_argument_list() {
        let functions = parse_signatures("void softfloatInit();\n");
        assert!(functions["softfloatInit"].inputs.is_empty());
    }

    #[test]
    fn test_indented_declarations_accepted() {
        let functions = parse_signatures("    float32_t f64_to_f32( float64_t );\n");
        assert!(functions.contains_key("f64_to_f32"));
    }

    #[test]
    fn test_multiline_declarations_ignored() {
        // The scanner is line-oriented; declarations split across lines do
        // not match and are skipped.
        let functions = parse_signatures("float128_t\n f64_to_f128( float64_t );\n");
        assert!(functions.is_empty());
    }
}
