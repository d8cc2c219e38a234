use std::process::ExitCode;

use clap::Parser;
use log::error;

use sundir::cli::{execute, Args, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let result =
        Config::from_args(&args).and_then(|config| execute(&config, std::io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("sundir: {e}");
            ExitCode::FAILURE
        }
    }
}
