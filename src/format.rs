use serde::Deserialize;

/// Indent unit: a literal string or a number of space characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Indent {
    Spaces(usize),
    Literal(String),
}

impl Indent {
    /// Resolve to the literal string repeated per depth level.
    pub fn resolve(&self) -> String {
        match self {
            Indent::Spaces(count) => " ".repeat(*count),
            Indent::Literal(literal) => literal.clone(),
        }
    }
}

impl From<usize> for Indent {
    fn from(count: usize) -> Self {
        Indent::Spaces(count)
    }
}

impl From<&str> for Indent {
    fn from(literal: &str) -> Self {
        Indent::Literal(literal.to_string())
    }
}

impl From<String> for Indent {
    fn from(literal: String) -> Self {
        Indent::Literal(literal)
    }
}

/// Formatting configuration read at render time: the indent unit repeated
/// per depth level and the line terminator appended to every line.
#[derive(Debug, Clone)]
pub struct Format {
    pub indent: String,
    pub end_of_line: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            end_of_line: "\n".to_string(),
        }
    }
}

impl Format {
    /// Materialize one line: indentation, content, terminator.
    pub fn line(&self, depth: usize, text: &str) -> String {
        format!("{}{}{}", self.indent.repeat(depth), text, self.end_of_line)
    }
}
