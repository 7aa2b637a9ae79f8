//! CLI configuration

use clap::{Args, Parser, ValueEnum};
use morsel_client::config::ApiConfig;

use crate::commands::Command;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Morsel food-ordering client
#[derive(Debug, Parser)]
#[command(name = "morsel", about = "Order food from the terminal", long_about = None)]
pub struct Cli {
    /// API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use crate::commands::{CartCommand, RestaurantsCommand};

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_restaurant_listing_options() -> TestResult {
        let cli = Cli::try_parse_from([
            "morsel",
            "--api-url",
            "http://api.test",
            "restaurants",
            "list",
            "--filter",
            "fast",
            "--sort",
            "rating",
        ])?;

        assert_eq!(cli.api.api_url, "http://api.test");
        assert!(matches!(
            cli.command,
            Command::Restaurants {
                command: RestaurantsCommand::List(_)
            }
        ));

        Ok(())
    }

    #[test]
    fn negative_quantities_parse_for_cart_set() -> TestResult {
        let cli = Cli::try_parse_from(["morsel", "cart", "set", "7", "-1"])?;

        let Command::Cart {
            command: CartCommand::Set { item, quantity },
        } = cli.command
        else {
            return Err("expected cart set".into());
        };

        assert_eq!((item, quantity), (7, -1));

        Ok(())
    }

    #[test]
    fn rejects_unknown_filter() {
        let result = Cli::try_parse_from(["morsel", "restaurants", "list", "--filter", "cheap"]);

        assert!(result.is_err());
    }
}
