use thiserror::Error;

/// Unified error type covering all possible error scenarios
#[derive(Error, Debug)]
pub enum TestgenError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("File operation error: {message}")]
    File { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported instruction: {mnemonic}")]
    UnsupportedInstruction { mnemonic: String },

    #[error("Register allocation failed: {message}")]
    RegisterAllocation { message: String },

    #[error("Header parsing failed: {message}")]
    HeaderParsing { message: String },

    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl TestgenError {
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::File {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unsupported_instruction<S: Into<String>>(mnemonic: S) -> Self {
        Self::UnsupportedInstruction {
            mnemonic: mnemonic.into(),
        }
    }

    pub fn register_allocation<S: Into<String>>(message: S) -> Self {
        Self::RegisterAllocation {
            message: message.into(),
        }
    }

    pub fn header_parsing<S: Into<String>>(message: S) -> Self {
        Self::HeaderParsing {
            message: message.into(),
        }
    }
}

/// Simplified Result type alias
pub type Result<T> = std::result::Result<T, TestgenError>;
