use crate::error::{Error, Result};

pub const OBJCOPY: &str = "objcopy";
pub const OBJDUMP: &str = "objdump";

/// How the objdump path is obtained when none is configured explicitly
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Derivation {
    /// The objcopy path must contain `objcopy`
    Strict,
    /// An objcopy path without `objcopy` is used unchanged
    Lenient,
}

impl Derivation {
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    pub fn derive(self, objcopy: &str) -> Result<String> {
        match self {
            Derivation::Strict if !objcopy.contains(OBJCOPY) => {
                Err(Error::ToolNameMismatch {
                    path: objcopy.to_string(),
                })
            }
            _ => Ok(sibling_tool(objcopy, OBJCOPY, OBJDUMP)),
        }
    }
}

impl Into<&'static str> for Derivation {
    fn into(self) -> &'static str {
        match self {
            Derivation::Strict => "strict",
            Derivation::Lenient => "lenient",
        }
    }
}

impl Default for Derivation {
    fn default() -> Self {
        Derivation::Strict
    }
}

/// Replaces the first occurrence of `from` in `path`.
///
/// Toolchains ship their binutils side by side with a shared prefix, e.g.
/// `arm-none-eabi-objcopy` and `arm-none-eabi-objdump`.
pub fn sibling_tool(path: &str, from: &str, to: &str) -> String {
    path.replacen(from, to, 1)
}
