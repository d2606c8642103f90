use clap::Parser;
use std::process::ExitCode;

use postman_tools::cli::{init_logging, run_merger, MergerArgs, MergerConfig};

fn main() -> ExitCode {
    let args = MergerArgs::parse();
    init_logging(args.verbose);

    let config = MergerConfig::from_args(&args);
    match run_merger(&config) {
        Ok(output_path) => {
            println!(
                "Successfully merged collections into: {}",
                output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
