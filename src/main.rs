// src/main.rs
use clap::Parser;
use starlus::cli::args::Args;
use starlus::ports::TextPresenter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("starlus={}", filter).parse().unwrap()),
        )
        .init();

    if let Err(err) = starlus::run(args).await {
        TextPresenter::new().report_failure(&err);
        std::process::exit(1);
    }
}
