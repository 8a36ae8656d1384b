//! The Dude formatter CLI.
//!
//! Loads a JSON-serialized syntax tree, formats it, and then:
//!
//! - `--print` - writes the formatted program to stdout
//! - `--export` - writes it next to the input as `<input>.pretty.<ext>`
//! - `--time` - reports how long formatting took

use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;

use dude_fmt::FormatConfig;

#[derive(Parser)]
#[command(name = "dudefmt", version, about = "Pretty-print a serialized Dude syntax tree")]
struct Cli {
    /// Path to the JSON-serialized syntax tree
    #[arg(short, long)]
    file: PathBuf,

    /// Write the formatted program to `<file>.pretty.<ext>`
    #[arg(short, long)]
    export: bool,

    /// Print the formatted program to stdout
    #[arg(short, long)]
    print: bool,

    /// Report the time spent formatting
    #[arg(short, long)]
    time: bool,

    /// Extension of the exported file
    #[arg(long, default_value = "dude")]
    ext: String,

    /// Number of spaces per indentation level
    #[arg(long = "indent-size", default_value = "2")]
    indent_size: usize,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let program = dude_ast::load(&cli.file).map_err(|e| e.to_string())?;
    let config = FormatConfig {
        indent_size: cli.indent_size,
    };

    let started = Instant::now();
    let formatted = dude_fmt::format_program(&program, &config)
        .map_err(|e| format!("cannot format '{}': {}", cli.file.display(), e))?;
    let elapsed = started.elapsed();

    if cli.time {
        println!("{}", timing_line(elapsed));
    }

    if cli.print {
        print!("{}", formatted);
    }

    if cli.export {
        let out_path = export_path(&cli.file, &cli.ext);
        std::fs::write(&out_path, &formatted)
            .map_err(|e| format!("Failed to write '{}': {}", out_path.display(), e))?;
        eprintln!("  Exported: {}", out_path.display());
    }

    Ok(())
}

/// `<input>.pretty.<ext>`, keeping the input's own extension.
fn export_path(input: &Path, ext: &str) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(format!(".pretty.{ext}"));
    PathBuf::from(name)
}

fn timing_line(elapsed: Duration) -> String {
    format!(
        "Formatting took {}s {}ms",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_appends_suffix() {
        assert_eq!(
            export_path(Path::new("out/prog.json"), "dude"),
            PathBuf::from("out/prog.json.pretty.dude")
        );
        assert_eq!(
            export_path(Path::new("tree"), "txt"),
            PathBuf::from("tree.pretty.txt")
        );
    }

    #[test]
    fn timing_line_splits_seconds_and_millis() {
        assert_eq!(
            timing_line(Duration::from_millis(2_345)),
            "Formatting took 2s 345ms"
        );
        assert_eq!(timing_line(Duration::from_micros(900)), "Formatting took 0s 0ms");
    }
}
