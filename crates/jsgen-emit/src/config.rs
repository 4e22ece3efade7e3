use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub indent_style: IndentStyle,
    /// End emitted programs with a newline.
    pub trailing_newline: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(4),
            trailing_newline: true,
        }
    }
}

impl EmitterConfig {
    pub fn with_indent(mut self, indent_style: IndentStyle) -> Self {
        self.indent_style = indent_style;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    /// Text for a single level of indentation.
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_spaces() {
        let config = EmitterConfig::default();
        assert_eq!(config.indent_style.unit(), "    ");
        assert!(config.trailing_newline);
    }

    #[test]
    fn test_indent_units() {
        assert_eq!(IndentStyle::Spaces(2).unit(), "  ");
        assert_eq!(IndentStyle::Spaces(0).unit(), "");
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
    }
}
