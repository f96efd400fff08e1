// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments and hand them to the driver loop.
// - URLs are printed only after every file succeeded; on the first failure
//   the error message is printed instead and the process exits non-zero.

use clap::Parser;
use picbed_cli::cli::{run, Cli};

fn main() {
    // Verbosity is controlled through RUST_LOG, e.g. RUST_LOG=debug.
    pretty_env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(urls) => {
            for url in urls {
                println!("{}", url);
            }
        }
        Err(err) => {
            println!("upload failed: {}", err);
            std::process::exit(1);
        }
    }
}
