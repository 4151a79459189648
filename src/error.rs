use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("build variable `{0}` is not set")]
    MissingVariable(String),

    #[error("cannot derive objdump from `{path}`: it does not contain `objcopy`")]
    ToolNameMismatch { path: String },

    #[error("{context} `{}`: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed with {}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("unknown target `{0}`")]
    UnknownTarget(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (killed by signal)".to_string(),
    }
}

impl Error {
    /// Process exit code `main` should use for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}
