pub mod derivation;

use crate::{
    environment::Environment,
    error::Result,
    parameters::derivation::Derivation,
};
use std::path::{Path, PathBuf};

pub const ELF_EXTENSION: &str = "elf";
pub const DISASSEMBLY_EXTENSION: &str = "disasm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub objcopy: String,
    /// Takes precedence over deriving from `objcopy`
    pub objdump: Option<String>,

    pub build_directory: PathBuf,
    pub program_name: String,

    /// Where the disassembly is written
    pub output_directory: PathBuf,

    pub derivation: Derivation,
}

impl Parameters {
    pub fn new<O, B, P>(objcopy: O, build_directory: B, program_name: P) -> Self
    where
        O: Into<String>,
        B: Into<PathBuf>,
        P: Into<String>,
    {
        Parameters {
            objcopy: objcopy.into(),
            objdump: None,
            build_directory: build_directory.into(),
            program_name: program_name.into(),
            output_directory: PathBuf::from("."),
            derivation: Default::default(),
        }
    }

    pub fn from_environment(
        environment: &Environment,
        derivation: Derivation,
    ) -> Result<Self> {
        let mut parameters = Parameters::new(
            environment.require("OBJCOPY")?,
            environment.require("BUILD_DIR")?,
            environment.require("PROGNAME")?,
        );

        parameters.objdump = environment.get("OBJDUMP").map(str::to_string);
        if let Some(project_directory) = environment.get("PROJECT_DIR") {
            parameters.output_directory = project_directory.into();
        }
        parameters.derivation = derivation;

        Ok(parameters)
    }

    pub fn objdump(&self) -> Result<String> {
        match &self.objdump {
            Some(objdump) => Ok(objdump.clone()),
            None => self.derivation.derive(&self.objcopy),
        }
    }

    pub fn elf_path(&self) -> PathBuf {
        self.build_directory
            .join(format!("{}.{}", self.program_name, ELF_EXTENSION))
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.program_name, DISASSEMBLY_EXTENSION)
    }

    /// Relative to the working directory unless an output directory is set
    pub fn output_path(&self) -> PathBuf {
        if self.output_directory == Path::new(".") {
            return PathBuf::from(self.output_file_name());
        }

        self.output_directory.join(self.output_file_name())
    }
}
