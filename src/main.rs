use std::process::ExitCode;

use clap::Parser;
use lhwsutil_dev::{cli::Args, config::Config, launcher};
use miette::Result;

fn main() -> Result<ExitCode> {
    let config = Config::load_config()?;

    let args = Args::parse();
    launcher::main(&config, &args)
}
