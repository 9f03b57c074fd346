use clap::Parser;
use common::windows::{PrefetchRecord, PrefetchRow};
use log::{error, info, LevelFilter};
use pfcore::{
    core::parse_toml_file,
    prefetch::{csv_rows, execution_timeline, read_directory, read_prefetch},
};
use serde::Serialize;
use simplelog::{Config, SimpleLogger};
use std::io::stdout;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML collector
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Parse a single Prefetch file
    #[clap(short, long, value_parser)]
    file: Option<String>,

    /// Parse every Prefetch file in a directory
    #[clap(short, long, value_parser)]
    directory: Option<String>,

    /// Show every execution found in a directory of Prefetch files, most recent first
    #[clap(short, long, value_parser)]
    executed: Option<String>,

    /// Output csv rows instead of json
    #[clap(long)]
    csv: bool,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::init(level, Config::default());

    if let Some(toml) = args.toml {
        match parse_toml_file(&toml) {
            Ok(_) => info!("[pfparse] Collection success"),
            Err(err) => println!("[pfparse] Failed to collect prefetch: {err:?}"),
        }
    } else if let Some(path) = args.file {
        match read_prefetch(&path) {
            Ok(record) => render(&[record], args.csv),
            Err(err) => println!("[pfparse] Failed to parse {path}: {err}"),
        }
    } else if let Some(path) = args.directory {
        match read_directory(&path) {
            Ok(records) => render(&records, args.csv),
            Err(err) => println!("[pfparse] Failed to parse directory {path}: {err}"),
        }
    } else if let Some(path) = args.executed {
        match read_directory(&path) {
            Ok(records) => print_json(&execution_timeline(&records)),
            Err(err) => println!("[pfparse] Failed to parse directory {path}: {err}"),
        }
    } else {
        println!("[pfparse] No Prefetch file, directory or TOML provided!");
    }
}

/// Print records as pretty json or as csv rows
fn render(records: &[PrefetchRecord], csv: bool) {
    if !csv {
        print_json(records);
        return;
    }

    let rows: Vec<PrefetchRow> = records.iter().flat_map(csv_rows).collect();
    if let Err(err) = print_csv(&rows) {
        error!("[pfparse] Could not write csv: {err:?}");
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(result) => println!("{result}"),
        Err(err) => error!("[pfparse] Could not serialize output: {err:?}"),
    }
}

fn print_csv(rows: &[PrefetchRow]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout());
    writer.write_record(["last_run_time", "executable_name", "path_hash", "run_count"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["pfparse", "--directory", "C:\\Windows\\Prefetch", "--csv"]);
        assert_eq!(args.directory.unwrap(), "C:\\Windows\\Prefetch");
        assert!(args.csv);
        assert!(!args.verbose);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_args_executed() {
        let args = Args::parse_from(["pfparse", "-e", "./tmp", "-v"]);
        assert_eq!(args.executed.unwrap(), "./tmp");
        assert!(args.verbose);
    }
}
