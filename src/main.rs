use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontpage::cli::{self, Cli, Command};

#[tokio::main]
async fn main() {
    let opts = Cli::parse();
    init_tracing(opts.verbose);

    let result = match opts.command {
        Command::Serve(args) => cli::serve(args).await,
        Command::Render(args) => cli::render(args).map(|page| println!("{page}")),
    };

    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

// Logs go to stderr so `render` output stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FRONTPAGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
