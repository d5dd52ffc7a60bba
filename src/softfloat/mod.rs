pub mod codegen;
pub mod functions;
