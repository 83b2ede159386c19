// src/bin/cli.rs
use jar_scrape::cli;

fn main() {
    if let Err(e) = cli::run() {
        jar_scrape::loge!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
