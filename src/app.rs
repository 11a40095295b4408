use std::io::{BufRead, Write};

use anyhow::Result;
use double_vector::DoubleVector;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::input;
use crate::stats::{self, Summary};

/// Fills a vector from the sources selected on the command line, sorts it
/// and prints the report.
#[derive(Debug)]
pub struct App {
    cli: Cli,
    values: DoubleVector,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            values: DoubleVector::new(),
        }
    }

    pub fn values(&self) -> &DoubleVector {
        &self.values
    }

    /// Applies the sources in order: file, interactive prompt, command line.
    ///
    /// `reader` feeds the interactive prompt, which is written to `out`.
    pub fn populate<R: BufRead, W: Write>(&mut self, reader: R, out: W) -> Result<()> {
        if let Some(path) = &self.cli.file {
            input::read_file(path, &mut self.values)?;
        }
        if self.cli.interactive {
            input::read_interactive(reader, out, &mut self.values)?;
        }
        if self.cli.command_line {
            input::read_args(&self.cli.numbers, &mut self.values)?;
        } else if !self.cli.numbers.is_empty() {
            warn!(
                count = self.cli.numbers.len(),
                "ignoring positional numbers without -c"
            );
        }
        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut out: W) -> Result<Summary> {
        self.populate(reader, &mut out)?;
        stats::bubble_sort(&mut self.values);
        let summary = Summary::of_sorted(&self.values);
        info!(len = self.values.len(), average = summary.average, "sorted values");
        render(&self.values, &summary, &mut out)?;
        Ok(summary)
    }
}

/// Writes the report. Missing extremes of an empty vector print as `NaN`.
pub fn render<W: Write>(values: &DoubleVector, summary: &Summary, out: &mut W) -> Result<()> {
    writeln!(out)?;
    write!(out, "Data: ")?;
    let mut it = values.begin();
    while it != values.end() {
        write!(out, "{} ", values.get(it)?)?;
        it.inc();
    }
    writeln!(out)?;
    writeln!(out, "\tAverage: {}", summary.average)?;
    writeln!(out, "\tMaximum: {}", summary.maximum.unwrap_or(f64::NAN))?;
    writeln!(out, "\tMinimum: {}", summary.minimum.unwrap_or(f64::NAN))?;
    out.flush()?;
    Ok(())
}
