use disasm::logger::{decorate, level_from_verbosity};
use log::{Level, LevelFilter};

#[test]
pub fn test_every_line_is_prefixed() {
    assert_eq!(
        decorate(Level::Warn, "first\nsecond"),
        "WARN: first\nWARN: second\n"
    );
}

#[test]
pub fn test_empty_message() {
    assert_eq!(decorate(Level::Info, ""), "INFO: \n");
}

#[test]
pub fn test_verbosity() {
    assert_eq!(level_from_verbosity(0, false), LevelFilter::Info);
    assert_eq!(level_from_verbosity(1, false), LevelFilter::Debug);
    assert_eq!(level_from_verbosity(4, false), LevelFilter::Trace);
    assert_eq!(level_from_verbosity(4, true), LevelFilter::Error);
}
