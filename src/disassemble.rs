use crate::{
    environment::Environment,
    error::{Error, Result},
    parameters::{derivation::Derivation, Parameters},
    target::Targets,
};
use std::{
    fs::File,
    path::PathBuf,
    process::{Command, Stdio},
};

pub const TARGET_NAME: &str = "disasm";
pub const TARGET_DEPENDENCY: &str = "${BUILD_DIR}/${PROGNAME}.elf";
pub const TARGET_TITLE: &str = "Disasm";
pub const TARGET_DESCRIPTION: &str = "Generate a disassembly file on demand";

/// One objdump invocation, with stdout going to `destination`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    pub objdump: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Disassembly {
    pub fn new(parameters: &Parameters) -> Result<Self> {
        Ok(Disassembly {
            objdump: parameters.objdump()?,
            source: parameters.elf_path(),
            destination: parameters.output_path(),
        })
    }

    pub fn flags() -> Vec<String> {
        vec![
            //
            // Interleave source code with the disassembly
            "-S".to_string(),
            //
            // Demangle C++ symbols
            "-C".to_string(),
            //
            // Print the whole file head on the first source line of a file
            "--file-start-context".to_string(),
            //
            // Don't wrap long lines
            "-w".to_string(),
        ]
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = Self::flags();
        args.push(self.source.to_string_lossy().into_owned());
        args
    }

    /// Shell form of the invocation, for display only
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.objdump.clone()];
        parts.extend(self.args());
        parts.push(">".to_string());
        parts.push(self.destination.to_string_lossy().into_owned());
        parts.join(" ")
    }

    /// Runs objdump and blocks until it exits.
    ///
    /// The destination is truncated before objdump starts, so a failed run
    /// leaves a partial or empty file behind.
    pub fn run(&self) -> Result<()> {
        log::info!("{}", self.command_line());
        log::debug!("source: {}", self.source.display());
        log::debug!("destination: {}", self.destination.display());

        if let Some(parent) = self.destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                    context: "cannot create output directory",
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let output =
            File::create(&self.destination).map_err(|source| Error::Io {
                context: "cannot create",
                path: self.destination.clone(),
                source,
            })?;

        let status = Command::new(&self.objdump)
            .args(self.args())
            .stdout(Stdio::from(output))
            .status()
            .map_err(|source| Error::Spawn {
                program: self.objdump.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: self.command_line(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

pub fn generate_disassembly(
    environment: &Environment,
    derivation: Derivation,
) -> Result<()> {
    let parameters = Parameters::from_environment(environment, derivation)?;
    Disassembly::new(&parameters)?.run()
}

pub fn register(targets: &mut Targets, derivation: Derivation) {
    targets.add_custom_target(
        TARGET_NAME,
        TARGET_DEPENDENCY,
        move |environment: &Environment| {
            generate_disassembly(environment, derivation)
        },
        TARGET_TITLE,
        TARGET_DESCRIPTION,
        true,
    );
}
