use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Named build variables, as handed to target actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::MissingVariable(name.to_string()))
    }

    /// Expands `${NAME}` and `$NAME` references. `$$` is a literal `$`.
    pub fn subst(&self, pattern: &str) -> Result<String> {
        let mut result = String::with_capacity(pattern.len());
        let mut rest = pattern;

        while let Some(start) = rest.find('$') {
            result.push_str(&rest[..start]);
            rest = &rest[start + 1..];

            if let Some(stripped) = rest.strip_prefix('$') {
                result.push('$');
                rest = stripped;
                continue;
            }

            let (name, remainder) = if let Some(braced) = rest.strip_prefix('{')
            {
                match braced.find('}') {
                    Some(end) => (&braced[..end], &braced[end + 1..]),
                    // Unterminated, keep it as written
                    None => {
                        result.push('$');
                        continue;
                    }
                }
            } else {
                let end = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or_else(|| rest.len());
                (&rest[..end], &rest[end..])
            };

            if name.is_empty() {
                result.push('$');
                continue;
            }

            result.push_str(self.require(name)?);
            rest = remainder;
        }

        result.push_str(rest);
        Ok(result)
    }
}
