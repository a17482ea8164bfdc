//! Subcommand implementations. Results go to the given writer, one per line.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info_span};

use almanac_calendar::{
    CompIdCounter, MachineFormat, decade, decade_years, is_same_day, machine_format, month_name,
    weekday_name,
};

use crate::cli::{Command, DecadeArgs, DescribeArgs, FormatArgs, IdsArgs, NameArgs, SameDayArgs};
use crate::config::AlmanacConfig;
use crate::convert;

/// Dispatch a parsed subcommand.
pub fn run(command: &Command, config: &AlmanacConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Decade(args) => run_decade(args, out),
        Command::SameDay(args) => run_same_day(args, out),
        Command::Format(args) => run_format(args, config, out),
        Command::Weekday(args) => run_weekday(args, config, out),
        Command::Month(args) => run_month(args, config, out),
        Command::Ids(args) => run_ids(args, config, out),
        Command::Describe(args) => run_describe(args, out),
    }
}

fn run_decade(args: &DecadeArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("decade").entered();
    let date = convert::resolve_date(args.date.as_deref())?;
    if args.years {
        for year in decade_years(&date) {
            writeln!(out, "{year}")?;
        }
    } else {
        writeln!(out, "{}", decade(&date))?;
    }
    Ok(())
}

fn run_same_day(args: &SameDayArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("same_day").entered();
    let first = convert::parse_optional_date(args.first.as_deref())?;
    let second = convert::parse_optional_date(args.second.as_deref())?;
    writeln!(out, "{}", is_same_day(first.as_ref(), second.as_ref()))?;
    Ok(())
}

fn run_format(args: &FormatArgs, config: &AlmanacConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let date = convert::resolve_date(args.date.as_deref())?;
    let format = convert::resolve_format(args, config);
    debug!(?format, "resolved machine format");
    writeln!(out, "{}", machine_format(&date, format))?;
    Ok(())
}

fn run_weekday(args: &NameArgs, config: &AlmanacConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("weekday").entered();
    let date = convert::resolve_date(args.date.as_deref())?;
    let short = convert::resolve_short(args, config);
    writeln!(out, "{}", weekday_name(&date, short))?;
    Ok(())
}

fn run_month(args: &NameArgs, config: &AlmanacConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let date = convert::resolve_date(args.date.as_deref())?;
    let short = convert::resolve_short(args, config);
    writeln!(out, "{}", month_name(&date, short))?;
    Ok(())
}

fn run_ids(args: &IdsArgs, config: &AlmanacConfig, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("ids").entered();
    let count = args.count.unwrap_or(config.ids.count);
    debug!(count, "issuing component ids");
    let counter = CompIdCounter::new();
    for _ in 0..count {
        writeln!(out, "{}", counter.next_id())?;
    }
    Ok(())
}

fn run_describe(args: &DescribeArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("describe").entered();
    let date = convert::resolve_date(args.date.as_deref())?;
    writeln!(out, "date:    {}", machine_format(&date, MachineFormat::FULL))?;
    writeln!(
        out,
        "weekday: {} ({})",
        weekday_name(&date, false),
        weekday_name(&date, true)
    )?;
    writeln!(
        out,
        "month:   {} ({})",
        month_name(&date, false),
        month_name(&date, true)
    )?;
    writeln!(out, "decade:  {}", decade(&date))?;
    Ok(())
}
