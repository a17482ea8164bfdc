use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar helpers.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Date naming, decade and machine-format helpers for calendar views"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the decade a date belongs to.
    Decade(DecadeArgs),
    /// Check whether two dates fall on the same calendar day.
    SameDay(SameDayArgs),
    /// Print a machine-readable date string.
    Format(FormatArgs),
    /// Print the English weekday name.
    Weekday(NameArgs),
    /// Print the English month name.
    Month(NameArgs),
    /// Issue component ids from a fresh counter.
    Ids(IdsArgs),
    /// Print every derived value for a date.
    Describe(DescribeArgs),
}

/// Arguments for the `decade` subcommand.
#[derive(clap::Args)]
pub struct DecadeArgs {
    /// Date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS). Defaults to now.
    pub date: Option<String>,

    /// List the ten years of the decade instead.
    #[arg(long)]
    pub years: bool,
}

/// Arguments for the `same-day` subcommand.
#[derive(clap::Args)]
pub struct SameDayArgs {
    /// First date. A missing date never matches.
    pub first: Option<String>,

    /// Second date. A missing date never matches.
    pub second: Option<String>,
}

/// Arguments for the `format` subcommand.
///
/// When none of the part flags is given, `[format]` from the config applies.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date to format. Defaults to now.
    pub date: Option<String>,

    /// Include the year.
    #[arg(long)]
    pub year: bool,

    /// Include the zero-padded month.
    #[arg(long)]
    pub month: bool,

    /// Include the zero-padded day of month.
    #[arg(long)]
    pub day: bool,
}

/// Arguments for the `weekday` and `month` subcommands.
#[derive(clap::Args)]
pub struct NameArgs {
    /// Date to name. Defaults to now.
    pub date: Option<String>,

    /// Abbreviated name (e.g. "Mon", "Jan").
    #[arg(long, conflicts_with = "long")]
    pub short: bool,

    /// Full name (e.g. "Monday", "January").
    #[arg(long)]
    pub long: bool,
}

/// Arguments for the `ids` subcommand.
#[derive(clap::Args)]
pub struct IdsArgs {
    /// Number of ids to issue. Overrides `[ids].count` from config.
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
}

/// Arguments for the `describe` subcommand.
#[derive(clap::Args)]
pub struct DescribeArgs {
    /// Date to describe. Defaults to now.
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn short_and_long_conflict() {
        let res = Cli::try_parse_from(["almanac", "weekday", "--short", "--long"]);
        assert!(res.is_err());
    }

    #[test]
    fn same_day_accepts_missing_dates() {
        let cli = Cli::try_parse_from(["almanac", "same-day", "2024-03-15"]).unwrap();
        match cli.command {
            Command::SameDay(args) => {
                assert_eq!(args.first.as_deref(), Some("2024-03-15"));
                assert!(args.second.is_none());
            }
            _ => panic!("expected same-day"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["almanac", "ids", "-n", "3", "-vv", "--config", "a.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
    }
}
