use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "numname")]
#[command(about = "Convert non-negative integers into English words", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/numname/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the English words for each number, one per line
    Convert {
        /// Numbers to convert (0 <= n < 10^15)
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
    /// Run the built-in sanity table plus the cases from the config file
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["numname", "convert", "5491", "0"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Convert { numbers } => assert_eq!(numbers, vec![5491, 0]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli =
            Cli::try_parse_from(["numname", "check", "--config", "/tmp/numname.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/numname.toml")));
    }

    #[test]
    fn test_rejects_negative_and_missing_numbers() {
        assert!(Cli::try_parse_from(["numname", "convert", "-5"]).is_err());
        assert!(Cli::try_parse_from(["numname", "convert"]).is_err());
    }
}
