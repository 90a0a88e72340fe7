// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::Params;
use crate::progress::Progress;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress::default();
    let summary = crate::runner::run(&params, Some(&mut progress))?;
    for path in summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "--country" => {
                let v = args.next().ok_or("Missing country code")?;
                params.url = Some(Params::country_url(&v));
            }
            "--club" => {
                let v = args.next().ok_or("Missing club id")?;
                params.url = Some(Params::club_url(&v));
            }
            "--player" => {
                let v = args.next().ok_or("Missing player id")?;
                params.url = Some(Params::player_url(&v));
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--basic-only" => params.basic_only = true,
            "--keep-internal" => params.keep_internal = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Prints progress lines to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} player profiles...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, seq: usize, label: &str) {
        eprintln!("  Player {seq} of {}: {label}", self.total);
    }
    fn item_failed(&mut self, seq: usize, label: &str) {
        eprintln!("  Player {seq} of {}: {label} (profile fetch failed, kept squad data)", self.total);
    }
}
