use std::io;
use std::process::ExitCode;

use clap::Parser;
use rover_cli::{Args, EXIT_USAGE};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the result.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(
        args.log_level(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match rover_cli::run(&args, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
