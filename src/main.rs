use clap::{Parser, Subcommand};
use log::info;
use riscv_testgen::config::VectorConfig;
use riscv_testgen::error::{Result, TestgenError};
use riscv_testgen::softfloat::codegen::DriverGenerator;
use riscv_testgen::softfloat::functions::load_signatures;
use riscv_testgen::testgen::suite::generate_suite;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "riscv-testgen")]
#[command(about = "Generators for RISC-V ALU test vectors and softfloat conversion drivers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate directed and random test vectors for integer ALU instructions
    Vectors {
        /// TOML configuration file; built-in defaults are used when absent
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the configured test-suite output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Override the configured random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Override the configured number of random cases per file
        #[arg(long)]
        num_random: Option<usize>,
    },
    /// Emit C driver programs for softfloat conversion functions
    Drivers {
        /// Directory the driver sources are written to
        #[arg(short, long, default_value = "src")]
        output_dir: PathBuf,
        /// Attribution line for the generated file banner
        #[arg(long, default_value = "riscv_testgen")]
        author: String,
    },
    /// Parse a softfloat header and print the extracted function signatures
    Signatures {
        /// Header file to scan
        #[arg(long)]
        header: PathBuf,
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Vectors {
            config,
            output_dir,
            seed,
            num_random,
        } => {
            let mut config = match config {
                Some(path) => {
                    if !path.exists() {
                        return Err(TestgenError::file(format!(
                            "Configuration file does not exist: {:?}",
                            path
                        )));
                    }
                    VectorConfig::from_toml_file(&path)?
                }
                None => VectorConfig::default(),
            };
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(num_random) = num_random {
                config.num_random = num_random;
            }

            info!(
                "🎲 Generating vectors for {} instructions at {} register widths (seed {})",
                config.instructions.len(),
                config.xlens.len(),
                config.seed
            );

            let written = generate_suite(&config)?;
            info!("✅ Generated {} test files", written.len());
        }
        Commands::Drivers { output_dir, author } => {
            info!("🛠️ Emitting softfloat conversion drivers to {:?}", output_dir);

            let generator = DriverGenerator::new(author, output_dir);
            let written = generator.write_conversion_drivers()?;
            info!("✅ Emitted {} driver programs", written.len());
        }
        Commands::Signatures { header, json } => {
            if !header.exists() {
                return Err(TestgenError::file(format!(
                    "Header file does not exist: {:?}",
                    header
                )));
            }

            let signatures = load_signatures(&header)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&signatures)?);
            } else {
                for (name, signature) in &signatures {
                    println!("{}", name);
                    println!("  inputs: {}", signature.inputs.join(", "));
                    println!("  output: {}", signature.output);
                }
            }
        }
    }

    Ok(())
}

fn setup_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();
}
