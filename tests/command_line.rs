use disasm::{
    disassemble::Disassembly,
    error::Error,
    parameters::{derivation::Derivation, Parameters},
};

fn disassembly() -> Disassembly {
    let parameters = Parameters::new(
        "/usr/bin/arm-none-eabi-objcopy",
        "/tmp/build",
        "firmware",
    );
    Disassembly::new(&parameters).unwrap()
}

#[test]
pub fn test_command_line_order() {
    let tokens: Vec<String> = disassembly()
        .command_line()
        .split(' ')
        .map(str::to_string)
        .collect();

    assert_eq!(
        tokens,
        vec![
            "/usr/bin/arm-none-eabi-objdump",
            "-S",
            "-C",
            "--file-start-context",
            "-w",
            "/tmp/build/firmware.elf",
            ">",
            "firmware.disasm",
        ]
    );
}

#[test]
pub fn test_args_have_no_redirection() {
    let args = disassembly().args();

    assert_eq!(
        args,
        vec!["-S", "-C", "--file-start-context", "-w", "/tmp/build/firmware.elf"]
    );
    assert!(!args.iter().any(|arg| arg == ">"));
}

#[test]
pub fn test_lenient_keeps_underived_tool() {
    let mut parameters = Parameters::new("/usr/bin/strip", "/tmp/build", "firmware");
    parameters.derivation = Derivation::Lenient;

    let disassembly = Disassembly::new(&parameters).unwrap();

    assert_eq!(disassembly.objdump, "/usr/bin/strip");
    assert!(disassembly.command_line().starts_with("/usr/bin/strip -S"));
}

#[test]
pub fn test_strict_refuses_to_build() {
    let parameters = Parameters::new("/usr/bin/strip", "/tmp/build", "firmware");

    match Disassembly::new(&parameters) {
        Err(Error::ToolNameMismatch { .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
