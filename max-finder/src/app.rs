use crate::cli::{Cli, OutputFormat};
use anyhow::Context;
use clap::Parser;
use max_finder_lib::input::read_line;
use max_finder_lib::report::{rejected_summary, Report, PROMPT};
use max_finder_lib::{analyze, compute_max};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        file,
        format,
        show_rejected,
    } = Cli::parse();

    if file.is_none() && format == OutputFormat::Text {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{PROMPT}")?;
        stdout.flush()?;
    }

    let line = read_input(file.as_ref())?;
    log::debug!("Read input line of {} byte(s)", line.len());

    match (format, show_rejected) {
        (OutputFormat::Text, false) => {
            println!("{}", compute_max(&line));
        }
        (OutputFormat::Text, true) => {
            let analysis = analyze(&line);
            eprintln!("{}", rejected_summary(analysis.rejected()));
            println!("{}", analysis.outcome());
        }
        (OutputFormat::Json, false) => {
            println!("{}", Report::new(compute_max(&line)).to_json()?);
        }
        (OutputFormat::Json, true) => {
            println!("{}", Report::with_rejected(&analyze(&line)).to_json()?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    if let Some(file_path) = path {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to read input file: {}", file_path.display()))?;
        read_line(BufReader::new(file))
            .with_context(|| format!("Failed to read input file: {}", file_path.display()))
    } else {
        read_line(io::stdin().lock()).context("Failed to read from stdin")
    }
}
