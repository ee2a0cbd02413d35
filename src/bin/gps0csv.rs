//! Command-line tool: extract `gps0` telemetry from dashcam
//! MP4/MOV files and print it as CSV to stdout.
//!
//! One line per GPS fix:
//! `latitude,longitude,altitude,speed,timestamp,track`

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ::clap::Parser;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

use ::gps0iter::{Gps0Error, Mp4, RowSink, TimeZone};

#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "gps0csv",
    version,
)]
struct CliArgs {
    /// Path(s) of MP4/MOV files. Processed in order.
    /// Nothing is done if no paths are given.
    paths: Vec<PathBuf>,

    /// Print timestamps in UTC instead of the local time zone.
    #[clap(long)]
    utc: bool,

    /// Continue with remaining files after a file fails.
    /// Exit status is still non-zero.
    #[clap(short = 'k', long)]
    keep_going: bool,

    /// Do not print each file path to stderr before processing it.
    #[clap(short = 'q', long)]
    quiet: bool,
}

/// Decode all `gps0` atoms in the file at `path` into `sink`.
fn process_path<S: RowSink>(
    path: &Path,
    tz: TimeZone,
    sink: &mut S,
) -> Result<usize, Gps0Error> {
    let mut mp4 = Mp4::new(path)?.with_timezone(tz);
    mp4.gps0(sink)
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CliArgs::parse();

    let tz = match args.utc {
        true => TimeZone::Utc,
        false => TimeZone::Local,
    };

    let stdout = io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout.lock());

    let mut failed = false;
    for path in args.paths.iter() {
        if !args.quiet {
            eprintln!("{}", path.display());
        }
        match process_path(path, tz, &mut writer) {
            Ok(rows) => {
                defo!("{} rows from {:?}", rows, path);
            },
            Err(err) => {
                eprintln!("{err}");
                failed = true;
                if !args.keep_going {
                    break;
                }
            }
        }
    }

    defx!("failed: {}", failed);

    match failed {
        true => ExitCode::FAILURE,
        false => ExitCode::SUCCESS,
    }
}
