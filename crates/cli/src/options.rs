use clap::ValueEnum;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when the stream is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Colour for status lines on stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled_for(std::io::stdout().is_terminal())
    }

    /// Colour for log output on stderr.
    #[must_use]
    pub fn enabled_for_stderr(self) -> bool {
        self.enabled_for(std::io::stderr().is_terminal())
    }

    /// `is_terminal` describes the stream the output goes to.
    #[must_use]
    pub fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                let dumb = std::env::var("TERM").is_ok_and(|t| t == "dumb");
                !no_color && !dumb && is_terminal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choices_ignore_environment() {
        assert!(ColorChoice::Always.enabled());
        assert!(ColorChoice::Always.enabled_for(false));
        assert!(!ColorChoice::Never.enabled());
        assert!(!ColorChoice::Never.enabled_for_stderr());
        assert!(!ColorChoice::Never.enabled_for(true));
    }

    #[test]
    fn auto_is_off_for_pipes() {
        assert!(!ColorChoice::Auto.enabled_for(false));
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(ColorChoice::from_str("never", false), Ok(ColorChoice::Never));
        assert_eq!(ColorChoice::from_str("ALWAYS", true), Ok(ColorChoice::Always));
    }
}
