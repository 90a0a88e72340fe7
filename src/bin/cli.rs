// src/bin/cli.rs

fn main() {
    if let Err(e) = sw_scrape::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
