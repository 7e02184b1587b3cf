//! Liuyao CLI library
//!
//! This module contains the core CLI logic for the Liuyao chart reader.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use liuyao::{ChartReader, LiuyaoError, format_errors};

const STDIN_INPUT: &str = "-";

/// Run the Liuyao CLI application
///
/// Reads the casting sheet, and on success writes the record JSON to the
/// output file or stdout. An invalid chart prints the user-facing error
/// report to stdout (followed by the record JSON in debug mode) and is then
/// returned as the error.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LiuyaoError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Empty or invalid charts
/// - JSON serialization errors
pub fn run(args: &Args) -> Result<(), LiuyaoError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing chart"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let debug = args.debug || app_config.debug();

    let source = read_input(&args.input)?;

    let reader = ChartReader::new(app_config);
    let record = match reader.read(&source) {
        Ok(record) => record,
        Err(err) => {
            if let LiuyaoError::Invalid { err: chart_err, record, .. } = &err {
                println!("{}", format_errors(chart_err.diagnostics()));
                if debug {
                    println!("解析 JSON（debug）:\n{}", reader.to_json(record)?);
                }
            }
            return Err(err);
        }
    };

    let json = reader.to_json(&record)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Record exported successfully");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN_INPUT {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}
