// Copyright (c) IoTeX Contributors
// SPDX-License-Identifier: Apache-2.0

mod commands;

use clap::Parser;
use colored::Colorize;
use commands::IotxCommand;
use tracing::debug;

macro_rules! exit_main {
    ($result:expr) => {
        match $result {
            Ok(_) => (),
            Err(err) => {
                let err = format!("{:?}", err);
                println!("{}", err.bold().red());
                std::process::exit(1);
            }
        }
    };
}

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Staking client for the IoTeX network",
    rename_all = "kebab-case",
    version,
    propagate_version = true,
)]
struct Args {
    #[clap(subcommand)]
    command: IotxCommand,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    debug!("iotx CLI version: {}", env!("CARGO_PKG_VERSION"));
    exit_main!(args.command.execute().await);
}
