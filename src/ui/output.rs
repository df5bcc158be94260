//! Output mode.

use std::str::FromStr;

use crate::config::schema::OutputMode as ConfigOutputMode;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including merged parameters and loader results.
    Verbose,
    /// Show results and status.
    #[default]
    Normal,
    /// Show results only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<ConfigOutputMode> for OutputMode {
    fn from(config_mode: ConfigOutputMode) -> Self {
        match config_mode {
            ConfigOutputMode::Verbose => Self::Verbose,
            ConfigOutputMode::Normal => Self::Normal,
            ConfigOutputMode::Quiet => Self::Quiet,
            ConfigOutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows details (parameters, loader results).
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows command results.
    pub fn shows_results(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_from_config() {
        assert_eq!(OutputMode::from(ConfigOutputMode::Normal), OutputMode::Normal);
        assert_eq!(OutputMode::from(ConfigOutputMode::Silent), OutputMode::Silent);
    }

    #[test]
    fn output_mode_visibility() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());

        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());

        assert!(OutputMode::Quiet.shows_results());
        assert!(!OutputMode::Silent.shows_results());
    }
}
