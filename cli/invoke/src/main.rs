//! bl-invoke CLI
//!
//! Runs the bucket listing function once and prints its response.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr, stdout only carries the response
    bl_cli_common::init_logging(args.log_level, args.log_format)?;

    match run::execute(&args).await {
        Ok(response) => {
            println!("{}", run::render(&response, args.pretty)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(run::exit_code(&e));
        }
    }
}
