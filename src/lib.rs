pub mod cli;
pub mod disassemble;
pub mod environment;
pub mod error;
pub mod logger;
pub mod parameters;
pub mod target;
