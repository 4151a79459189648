use crate::{environment::Environment, parameters::derivation::Derivation};
use structopt::*;

#[derive(Debug, StructOpt)]
pub struct EnvironmentArgs {
    #[structopt(long, env = "OBJCOPY", help = "Path to the objcopy tool")]
    pub objcopy: Option<String>,

    #[structopt(
        long,
        env = "OBJDUMP",
        help = "Path to objdump, instead of deriving it from objcopy"
    )]
    pub objdump: Option<String>,

    #[structopt(long, env = "BUILD_DIR")]
    pub build_dir: Option<String>,

    #[structopt(long, env = "PROGNAME")]
    pub progname: Option<String>,

    #[structopt(
        long,
        env = "PROJECT_DIR",
        help = "Directory the disassembly is written to"
    )]
    pub project_dir: Option<String>,

    #[structopt(
        long,
        help = "Use the objcopy path unchanged if it does not contain `objcopy`"
    )]
    pub lenient: bool,
}

impl EnvironmentArgs {
    pub fn derivation(&self) -> Derivation {
        if self.lenient {
            Derivation::Lenient
        } else {
            Derivation::Strict
        }
    }

    /// Options override whatever `environment` already holds
    pub fn apply(&self, environment: &mut Environment) {
        let options = [
            ("OBJCOPY", &self.objcopy),
            ("OBJDUMP", &self.objdump),
            ("BUILD_DIR", &self.build_dir),
            ("PROGNAME", &self.progname),
            ("PROJECT_DIR", &self.project_dir),
        ];

        for (name, value) in options.iter() {
            if let Some(value) = value {
                environment.set(*name, value.clone());
            }
        }
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Run an on-demand target")]
    Run {
        #[structopt(default_value = "disasm")]
        target: String,
    },

    #[structopt(about = "List the on-demand targets")]
    List,

    #[structopt(about = "Print the disassembler command line without running it")]
    Print,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "disasm", about = "Disassemble a linked firmware image")]
pub struct Args {
    #[structopt(flatten)]
    pub environment: EnvironmentArgs,

    #[structopt(short, long, parse(from_occurrences), global = true)]
    pub verbose: u8,

    #[structopt(short, long, global = true)]
    pub quiet: bool,

    #[structopt(subcommand)]
    pub command: Command,
}
