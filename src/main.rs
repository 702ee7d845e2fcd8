use clap::Parser;
use tracing_subscriber::EnvFilter;

use filegroup::cli::args::CliArgs;
use filegroup::cli::handler;

fn main() {
    let args = CliArgs::parse();
    install_logging(args.verbose);

    if let Err(err) = handler::run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn install_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
