use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Recipient name; skips the prompt
    #[arg(short, long, value_name = "NAME")]
    pub recipient: Option<String>,

    /// Sender name; skips the prompt
    #[arg(short, long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Custom message; skips the prompt
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Year shown in the title; skips the prompt
    #[arg(short, long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Number of snowflakes scattered over the scene
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub snowflakes: Option<usize>,

    /// Seed for the snow, for repeatable cards
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["christmas-card", "-r", "Alex", "--sender", "Sam", "-n", "10", "--seed", "4"]);
        assert_eq!(cli.recipient.as_deref(), Some("Alex"));
        assert_eq!(cli.sender.as_deref(), Some("Sam"));
        assert_eq!(cli.message, None);
        assert_eq!(cli.snowflakes, Some(10));
        assert_eq!(cli.seed, Some(4));
        assert!(!cli.print_config);
    }

    #[test]
    fn test_empty_values_are_kept() {
        let cli = Cli::parse_from(["christmas-card", "--year", ""]);
        assert_eq!(cli.year.as_deref(), Some(""));
    }
}
