//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Normal output plus each checker's command line, working directory
    /// and run time.
    Verbose,
    /// Show progress notices; checkers write straight to the terminal.
    #[default]
    Normal,
    /// Show notices; checker output is only shown when a stage fails.
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

impl From<crate::config::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::OutputMode) -> Self {
        match config_mode {
            crate::config::OutputMode::Verbose => Self::Verbose,
            crate::config::OutputMode::Quiet => Self::Quiet,
            crate::config::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Whether checkers write directly to the terminal.
    pub fn passes_through_checker_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Whether per-stage details (command line, timing) are shown.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
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
    fn output_mode_passes_through_checker_output() {
        assert!(OutputMode::Verbose.passes_through_checker_output());
        assert!(OutputMode::Normal.passes_through_checker_output());
        assert!(!OutputMode::Quiet.passes_through_checker_output());
        assert!(!OutputMode::Silent.passes_through_checker_output());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn only_verbose_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
        assert!(!OutputMode::Silent.shows_details());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn from_config_modes() {
        let quiet: OutputMode = crate::config::OutputMode::Quiet.into();
        assert_eq!(quiet, OutputMode::Quiet);
        let silent: OutputMode = crate::config::OutputMode::Silent.into();
        assert_eq!(silent, OutputMode::Silent);
        let verbose: OutputMode = crate::config::OutputMode::Verbose.into();
        assert_eq!(verbose, OutputMode::Verbose);
    }
}
