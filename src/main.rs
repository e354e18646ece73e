use anyhow::Result;
use clap::Parser;
use soapbox::cli::{self, Cli};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging before config load so config problems are recorded.
    // CLI --log-level takes precedence, then RUST_LOG, then config (applied below).
    soapbox::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));

    let config = cli::load_config(cli.config.as_deref())?;
    soapbox::debug::apply_config_level(config.log_level);
    soapbox::debug_info!("MAIN", "soapbox {} running {:?}", soapbox::VERSION, cli.command);

    let parser = cli::build_parser(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let code = match cli::run_command(&cli.command, &parser, stdin.lock(), &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            soapbox::debug_error!("MAIN", "command failed: {e:#}");
            eprintln!("soapbox: error: {e:#}");
            2
        }
    };
    log::logger().flush();

    if code != 0 {
        // Non-zero exit: use process::exit so the shell sees the correct exit code.
        drop(stdout);
        std::process::exit(code);
    }
    Ok(())
}
