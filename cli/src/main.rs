//! centerline CLI - center a text document in the terminal

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use centerline::{Centerline, Columns, Input, JsonFormat};

#[derive(Parser)]
#[command(name = "centerline")]
#[command(version)]
#[command(about = "Center each line of a text document in the terminal", long_about = None)]
#[command(after_help = "Reads from FILE, or from standard input if no file is given.")]
struct Cli {
    /// Input text file (standard input if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output width in columns, or "auto" to query the terminal
    #[arg(
        short,
        long,
        value_name = "COLUMNS",
        default_value = "auto",
        value_parser = Columns::parse
    )]
    width: Columns,

    /// Print the parsed paragraphs and lines as JSON instead of centering
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every usage error
            // exits with status 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            if let Err(print_err) = e.print() {
                eprintln!("{}: {}", "Error".red().bold(), print_err);
                std::process::exit(1);
            }
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> centerline::Result<()> {
    let input = Input::from_path(cli.input);
    let result = Centerline::new()
        .with_column_source(cli.width)
        .parse_input(&input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.json {
        let format = if cli.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        writeln!(out, "{}", result.to_json(format)?)?;
    } else {
        let stats = result.render_to(&mut out)?;
        if !stats.all_lines_fit() {
            log::info!(
                "{} of {} lines are wider than {} columns",
                stats.overflowing_lines,
                stats.lines,
                stats.columns
            );
        }
    }

    out.flush()?;
    Ok(())
}
