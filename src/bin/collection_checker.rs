use anyhow::Result;
use clap::Parser;

use postman_tools::cli::{init_logging, run_checker, CheckerArgs, CheckerConfig};

fn main() -> Result<()> {
    let args = CheckerArgs::parse();
    init_logging(args.verbose);

    let config = CheckerConfig::from_args(&args);
    let stdout = std::io::stdout();
    run_checker(&config, &mut stdout.lock())?;
    Ok(())
}
