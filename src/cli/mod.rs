use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dvstats")]
#[command(version, about = "Sort a list of numbers and report their average, maximum and minimum", long_about = None)]
pub struct Cli {
    /// Start the vector from a file of comma-separated numbers
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Prompt for numbers to add to the vector, 'q' to stop
    #[arg(short, long)]
    pub interactive: bool,

    /// Add the remaining command-line arguments to the vector
    #[arg(short = 'c', long = "command-line")]
    pub command_line: bool,

    /// Numbers read when -c is given
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
