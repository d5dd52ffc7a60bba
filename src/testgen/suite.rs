use crate::config::VectorConfig;
use crate::error::Result;
use crate::testgen::emit::{AsmEmitter, FileTemplate};
use crate::testgen::vectors::VectorGenerator;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, create_dir_all};
use std::path::PathBuf;

/// Drive vector generation for every configured (XLEN, instruction) pair,
/// writing one test file per pair.
///
/// Fully sequential: each file is assembled in memory and written before the
/// next begins. The RNG is seeded once per run, so a fixed configuration
/// reproduces the same suite byte for byte (banner timestamps aside).
pub fn generate_suite(config: &VectorConfig) -> Result<Vec<PathBuf>> {
    let template = FileTemplate::load(&config.header_file, &config.footer_file)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut written = Vec::new();

    for &xlen in &config.xlens {
        for &instruction in &config.instructions {
            let path = config.test_file_path(xlen, instruction);
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let generator = VectorGenerator::new(instruction, xlen);
            let mut emitter = AsmEmitter::new(instruction, xlen);

            emitter.begin(&file_name, &config.author, &template.header);
            for vector in generator.directed_vectors(&mut rng)? {
                emitter.push_vector(&vector);
            }
            for vector in generator.random_vectors(config.num_random, &mut rng)? {
                emitter.push_vector(&vector);
            }

            let test_count = emitter.test_count();
            let rendered = emitter.finish(&file_name, &config.author, &template.footer);
            fs::write(&path, rendered)?;

            info!(
                "✅ Wrote {} test cases for {} (rv{}) to {}",
                test_count,
                instruction,
                xlen.bits(),
                path.display()
            );
            written.push(path);
        }
    }

    Ok(written)
}
