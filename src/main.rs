//! Decimal Equivalent Calculator
//!
//! Command-line front end for the inch/millimeter conversion tools.

use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use decimal_converter::build_info;
use decimal_converter::convert::reference_table;
use decimal_converter::settings::{settings_path, Settings};
use decimal_converter::tools::{
    self, reference_rows, select_row, ConversionError, ConversionResponse, RowSelected, Tab,
};

const USAGE: &str = "\
Usage: decimal-converter [--json] <command> [args]

Commands:
  fraction <text>        Fraction to decimal inches (e.g. 7/16, 1 3/8)
  in2mm <text>           Inches to millimeters (e.g. 3/8, 1 3/8, 0.375)
  mm2in <text>           Millimeters to inches and nearest fraction (e.g. 9.525)
  table [tab]            Common fractions reference (fraction, in2mm, mm2in)
  row <tab> <index>      Convert a reference table row, as if clicked
  settings               Show the settings in effect
  version                Show version and build information
";

fn usage_error(message: &str) -> ExitCode {
    eprintln!("{}\n\n{}", message, USAGE);
    ExitCode::from(2)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_response(response: &ConversionResponse, json: bool) -> Result<(), serde_json::Error> {
    if json {
        return print_json(response);
    }

    println!("{}", response.tab().display_name());
    for (label, value) in response.result_lines() {
        println!("  {}: {}", label, value);
    }
    Ok(())
}

fn report_error(tab: Tab, error: &ConversionError) -> ExitCode {
    eprintln!("Error: {}", error);
    if matches!(error, ConversionError::Parse(_)) {
        eprintln!("{}", tab.hint());
    }
    ExitCode::from(1)
}

fn print_table(tab: Tab, json: bool) -> Result<(), serde_json::Error> {
    let rows = reference_rows(tab, reference_table());
    if json {
        return print_json(&rows);
    }

    let header: Vec<String> = tab.columns().iter().map(|c| format!("{:>14}", c)).collect();
    println!("{}", header.join(""));
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| format!("{:>14}", c)).collect();
        println!("{}  [{}]", cells.join(""), index);
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("decimal_converter=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = settings_path();
    let settings = Settings::load_or_default(&path);
    tracing::debug!("Settings from {}: {:?}", path.display(), settings);

    let mut json = settings.json_output;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                print!("{}", USAGE);
                return Ok(ExitCode::SUCCESS);
            }
            _ => args.push(arg),
        }
    }

    let Some((command, rest)) = args.split_first() else {
        return Ok(usage_error("Missing command"));
    };

    match command.as_str() {
        "fraction" | "in2mm" | "mm2in" => {
            let tab = Tab::from_str(command).ok_or("unknown tab")?;
            // Mixed numbers arrive as separate shell words
            let text = rest.join(" ");
            if text.trim().is_empty() {
                return Ok(usage_error(tab.hint()));
            }
            match tools::convert(tab, &text, settings.max_denominator) {
                Ok(response) => print_response(&response, json)?,
                Err(e) => return Ok(report_error(tab, &e)),
            }
        }
        "table" => {
            let tab = match rest.first() {
                Some(name) => match Tab::from_str(name) {
                    Some(tab) => tab,
                    None => return Ok(usage_error(&format!("Unknown tab '{}'", name))),
                },
                None => Tab::Fraction,
            };
            if settings.minimal_ui {
                eprintln!("Reference tables are hidden (minimal_ui is set in {})", path.display());
                return Ok(ExitCode::SUCCESS);
            }
            print_table(tab, json)?;
        }
        "row" => {
            let (Some(name), Some(index)) = (rest.first(), rest.get(1)) else {
                return Ok(usage_error("row needs a tab and an index"));
            };
            let Some(tab) = Tab::from_str(name) else {
                return Ok(usage_error(&format!("Unknown tab '{}'", name)));
            };
            let Ok(index) = index.parse::<usize>() else {
                return Ok(usage_error(&format!("Invalid row index '{}'", index)));
            };

            let selection = RowSelected { tab, index };
            match select_row(selection, reference_table(), settings.max_denominator) {
                Ok(response) => print_response(&response, json)?,
                Err(e) => return Ok(report_error(tab, &e)),
            }
        }
        "settings" => {
            if json {
                print_json(&settings)?;
            } else {
                println!("Settings file: {}", path.display());
                println!("  minimal_ui: {}", settings.minimal_ui);
                println!("  max_denominator: {}", settings.max_denominator);
                println!("  json_output: {}", settings.json_output);
            }
        }
        "version" | "about" => {
            let about = tools::about(&path);
            if json {
                print_json(&about)?;
            } else {
                build_info::print_startup_banner();
                println!("{}", about.title);
                println!("{}", about.credit);
            }
        }
        other => return Ok(usage_error(&format!("Unknown command '{}'", other))),
    }

    Ok(ExitCode::SUCCESS)
}
