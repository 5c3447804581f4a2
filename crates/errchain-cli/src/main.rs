use clap::Parser;

use errchain_cli::{DemoOptions, OutputFormat, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "errchain-demo",
    about = "errchain-demo: render a failing transaction's error chain",
    version
)]
pub struct Cli {
    /// Output format: 'plain', 'detailed', 'json', or 'json-pretty'
    #[arg(long, value_name = "FORMAT", default_value = "detailed")]
    format: OutputFormat,

    /// Transaction id recorded in the outermost error's data
    #[arg(long, value_name = "ID", default_value = "tx_123456")]
    transaction: String,
}

fn main() -> errchain::Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = DemoOptions {
        format: args.format,
        transaction: args.transaction,
    };

    match run_main(&opts)? {
        Some(output) => println!("{output}"),
        None => tracing::info!("transaction succeeded"),
    }
    Ok(())
}
