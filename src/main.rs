// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the command line front end of the packer. It reads the cases
//! from the given file and prints one line per case on the standard output.

use std::process::ExitCode;

use clap::Parser;
use log::error;
use packer::{Packer, PackerConfigBuilder, Strategy, DEFAULT_RECURSION_LIMIT};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the file listing the cases (one per line)
    fname: String,
    /// The number of concurrent threads (defaults to the number of hardware threads)
    #[clap(short, long)]
    threads: Option<usize>,
    /// Which solver implementation to use: auto, top-down, bottom-up or exhaustive
    #[clap(short, long, default_value_t = Strategy::Auto)]
    strategy: Strategy,
    /// The number of items above which the auto strategy stops recursing
    #[clap(short, long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = PackerConfigBuilder::default();
    config.strategy(args.strategy).recursion_limit(args.recursion_limit);
    if let Some(threads) = args.threads {
        config.threads(threads);
    }
    let config = match config.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match Packer::new(config).pack_file(&args.fname) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("could not pack {}: {:?}", args.fname, e.kind());
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
