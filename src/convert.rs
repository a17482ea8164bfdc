//! Pure conversion functions: CLI arguments + config -> library inputs.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use almanac_calendar::{MachineFormat, parse_date};

use crate::cli::{FormatArgs, NameArgs};
use crate::config::AlmanacConfig;

/// Parses an optional date argument, falling back to the current local time.
pub fn resolve_date(arg: Option<&str>) -> Result<NaiveDateTime> {
    match arg {
        Some(s) => parse_date(s).with_context(|| format!("bad date argument {s:?}")),
        None => Ok(Local::now().naive_local()),
    }
}

/// Parses an optional date argument, keeping absence as `None`.
pub fn parse_optional_date(arg: Option<&str>) -> Result<Option<NaiveDateTime>> {
    arg.map(|s| parse_date(s).with_context(|| format!("bad date argument {s:?}")))
        .transpose()
}

/// Part flags win when any is set; otherwise the configured format applies.
pub fn resolve_format(args: &FormatArgs, config: &AlmanacConfig) -> MachineFormat {
    let flags = MachineFormat::new(args.year, args.month, args.day);
    if flags.is_empty() {
        config.format
    } else {
        flags
    }
}

/// `--short` / `--long` override `[names].short`.
pub fn resolve_short(args: &NameArgs, config: &AlmanacConfig) -> bool {
    match (args.short, args.long) {
        (true, _) => true,
        (_, true) => false,
        _ => config.names.short,
    }
}
