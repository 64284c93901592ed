use serde::Deserialize;

use crate::format::{Format, Indent};

/// Dump settings as loaded from TOML, e.g.
///
/// ```toml
/// indent = 4
/// end-of-line = "\r\n"
/// ```
///
/// `indent` accepts either a space count or a literal string. Missing keys
/// keep their defaults (two spaces, `"\n"`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DumpSettings {
    pub indent: Indent,
    pub end_of_line: String,
}

impl Default for DumpSettings {
    fn default() -> Self {
        Self {
            indent: Indent::Spaces(2),
            end_of_line: "\n".to_string(),
        }
    }
}

impl DumpSettings {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub(crate) fn to_format(&self) -> Format {
        Format {
            indent: self.indent.resolve(),
            end_of_line: self.end_of_line.clone(),
        }
    }
}
