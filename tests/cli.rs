use disasm::{
    cli::{Args, Command},
    environment::Environment,
    parameters::derivation::Derivation,
};
use structopt::StructOpt;

fn parse(args: &[&str]) -> Args {
    Args::from_iter_safe(args).unwrap()
}

#[test]
pub fn test_options_override_environment() {
    let args = parse(&["disasm", "--objcopy", "x-objcopy", "--lenient", "print"]);

    let mut environment = Environment::new();
    environment
        .set("OBJCOPY", "/usr/bin/arm-none-eabi-objcopy")
        .set("PROGNAME", "firmware");
    args.environment.apply(&mut environment);

    assert_eq!(environment.get("OBJCOPY"), Some("x-objcopy"));
    assert_eq!(environment.get("PROGNAME"), Some("firmware"));
}

#[test]
pub fn test_lenient_selects_lenient_derivation() {
    let args = parse(&["disasm", "--objcopy", "x-objcopy", "--lenient", "print"]);

    assert_eq!(args.environment.derivation(), Derivation::Lenient);
    match args.command {
        Command::Print => {}
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
pub fn test_strict_without_flag() {
    let args = parse(&["disasm", "--objcopy", "x-objcopy", "list"]);

    assert_eq!(args.environment.derivation(), Derivation::Strict);
}

#[test]
pub fn test_run_defaults_to_disasm() {
    let args = parse(&["disasm", "run"]);

    match args.command {
        Command::Run { target } => assert_eq!(target, "disasm"),
        other => panic!("unexpected command: {:?}", other),
    }
}
