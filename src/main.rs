use std::io::{self, Write};

use clap::Parser;
use lambda_capture::{Builder, Demo, Result};
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Closure capture demonstrations", long_about = None)]
struct Args {
    /// Demo to run; repeat to run several in order. Runs the default sequence when absent.
    #[arg(short, long = "demo")]
    demos: Vec<Demo>,

    /// List the demos and exit.
    #[arg(long)]
    list: bool,

    /// No blank line between demos.
    #[arg(long)]
    compact: bool,

    /// Log demo progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder().filter_level(log_level).init();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for demo in Demo::ALL {
            writeln!(out, "{:<18} {}", demo.name(), demo.description())?;
        }
        return Ok(());
    }

    let mut builder = Builder::new().separate(!args.compact);
    if !args.demos.is_empty() {
        builder = builder.demos(args.demos);
    }
    let runner = builder.build();
    runner.run(&mut out)?;
    info!("Done");

    Ok(())
}
