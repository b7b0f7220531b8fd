//! Ledger registry CLI
//!
//! Looks up RPC endpoints, currency denominations and ledger helpers for the
//! supported chains.
//!
//! ```sh
//! ledger-registry init              # Generate ledger-registry.toml
//! ledger-registry rpc gnosis        # Default RPC for Gnosis
//! ledger-registry rpc base --public # Public RPC for Base
//! ledger-registry denom solana      # Lamp
//! ledger-registry list              # Everything, as JSON
//! ledger-registry list --tier public # Configured public endpoints only
//! ```

mod cmd;
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};
use ledger_registry::Error;
use telemetry::Telemetry;

#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<(), Error> {
    let registry = || cmd::registry(cli.config.as_deref());
    let output = match cli.command {
        Commands::Init { output, force } => return cmd::init::run(&output, force),
        Commands::Rpc { chain, public } => cmd::query::rpc(&registry()?, chain, public),
        Commands::Denom { chain } => cmd::query::denom(chain),
        Commands::Helper { chain, ledger, rpc } => {
            cmd::query::helper(&registry()?, chain, ledger, rpc)
        }
        Commands::List { tier: None } => cmd::query::list(&registry()?),
        Commands::List { tier: Some(tier) } => cmd::query::table(&registry()?, tier),
    };
    println!("{output}");
    Ok(())
}

#[allow(clippy::print_stderr)]
fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    Telemetry::new().with_log_level(cli.log_level.clone()).register();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
