use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use pinger_common::config::{Config, INDICATOR_RESET_DELAY};
use pinger_common::target::Target;

#[derive(Parser)]
#[command(name = "pinger")]
#[command(about = "Checks whether a host accepts TCP connections.")]
#[command(version)]
pub struct CommandLine {
    /// Settings file to read and write instead of the default location
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Connection timeout in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 1500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Check this target for the current session without saving it
    #[arg(long, value_name = "HOST:PORT")]
    pub target: Option<Target>,

    /// Keep settings in memory only; edits are forgotten on exit
    #[arg(long)]
    pub ephemeral: bool,

    /// Hide the banner and key help
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log more detail (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            settings_path: self.settings,
            ephemeral: self.ephemeral,
            target_override: self.target,
            probe_timeout: Duration::from_millis(self.timeout),
            indicator_reset: INDICATOR_RESET_DELAY,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_probe_contract() {
        let cfg = CommandLine::try_parse_from(["pinger"]).unwrap().into_config();

        assert_eq!(cfg.probe_timeout, Duration::from_millis(1500));
        assert_eq!(cfg.indicator_reset, Duration::from_millis(1500));
        assert!(!cfg.ephemeral);
        assert!(cfg.settings_path.is_none());
        assert!(cfg.target_override.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cfg = CommandLine::try_parse_from([
            "pinger",
            "--settings",
            "/tmp/pinger.toml",
            "--timeout",
            "250",
            "--target",
            "[::1]:8080",
            "--ephemeral",
            "-qq",
            "-v",
        ])
        .unwrap()
        .into_config();

        assert_eq!(cfg.settings_path, Some(PathBuf::from("/tmp/pinger.toml")));
        assert_eq!(cfg.probe_timeout, Duration::from_millis(250));
        assert_eq!(cfg.target_override, Some(Target::new("::1", 8080)));
        assert!(cfg.ephemeral);
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.verbose, 1);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(CommandLine::try_parse_from(["pinger", "--timeout", "0"]).is_err());
        assert!(CommandLine::try_parse_from(["pinger", "--target", "example.com:70000"]).is_err());
        assert!(CommandLine::try_parse_from(["pinger", "check"]).is_err());
    }
}
