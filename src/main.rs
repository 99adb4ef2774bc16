use clap::Parser;
use srtmatch::cli::Args;
use srtmatch::progress::{should_use_colors, Progress};
use srtmatch::prompt::{Prompter, StdinPrompter};
use srtmatch::{app, logging, Config};
use tracing::{debug, error};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    debug!("Environment loaded, building configuration");

    let mut prompter = StdinPrompter;
    let pause = args.pause;

    let result = match Config::from_args(&args) {
        Ok(config) => {
            let mut progress = Progress::new_with_ui(config.verbose >= 2, should_use_colors());
            app::run(&config, &mut prompter, &mut progress, &mut std::io::stdout()).map(|_| ())
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            if pause {
                prompter.pause("Finished. Press Enter to exit.");
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("\nError: {}", e.detailed_message());
            if pause {
                prompter.pause("Press Enter to exit.");
            }
            std::process::exit(e.exit_code().into());
        }
    }
}
