// Copyright 2021-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chessvar::cli::{self, OutputFormat};
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;

/// Play a game of capture-all-of-a-kind chess on the command line.
#[derive(Debug, StructOpt)]
struct Options {
    /// Print a JSON status report after each command instead of text.
    #[structopt(long)]
    json: bool,

    /// Maximum level of log messages to print, unless overridden by CHESSVAR_LOG.
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Options::from_args();
    chessvar::log::init(args.log_level);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    cli::run(format)
}
