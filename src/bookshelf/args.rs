use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Personal library catalog with an interactive menu", long_about = None)]
pub struct Cli {
    /// JSON snapshot to load and save (default: books.json)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// CSV file written on exit (default: books.csv)
    #[arg(long, value_name = "PATH")]
    pub export_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
