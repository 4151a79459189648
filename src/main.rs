use disasm::{
    cli::{Args, Command},
    disassemble::{self, Disassembly},
    environment::Environment,
    logger,
    parameters::Parameters,
    target::Targets,
};
use std::error::Error;
use structopt::StructOpt;

pub fn main() -> Result<(), Box<dyn Error>> {
    let args: Args = StructOpt::from_args();

    logger::init(logger::level_from_verbosity(args.verbose, args.quiet));

    let mut environment = Environment::new();
    args.environment.apply(&mut environment);
    let derivation = args.environment.derivation();
    log::debug!("objdump derivation: {}", derivation.to_str());

    let mut targets = Targets::new();
    disassemble::register(&mut targets, derivation);

    let result = match args.command {
        Command::Run { target } => targets.run(&target, &environment),
        Command::List => {
            for target in targets.iter() {
                println!(
                    "{:<12}{:<16}{}",
                    target.name, target.title, target.description
                );
            }
            Ok(())
        }
        Command::Print => Parameters::from_environment(&environment, derivation)
            .and_then(|parameters| Disassembly::new(&parameters))
            .map(|disassembly| println!("{}", disassembly.command_line())),
    };

    if let Err(error) = result {
        log::error!("{}", error);
        std::process::exit(error.exit_code());
    }

    Ok(())
}
