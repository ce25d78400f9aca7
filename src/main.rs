mod cli;
mod error;
mod filter;
mod kubernetes;
mod output;
mod run;
mod types;
mod upload;
mod utils;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use kubernetes::{ClusterLogSource, build_client};
use types::{OutputDestination, RunConfig};
use upload::HttpUploader;

const AUTHOR: &str = "https://github.com/itspacchu";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("Version {}\nAuthor: {}", env!("CARGO_PKG_VERSION"), AUTHOR);
        return Ok(());
    }

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = build_client(cli.kubeconfig.as_deref())
        .await
        .context("cannot build cluster access configuration")?;
    let source = ClusterLogSource::new(client);

    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| source.default_namespace().to_string());
    let cfg = RunConfig {
        namespace,
        pattern: cli.fuzzy.unwrap_or_default(),
        destination: OutputDestination::from_flags(cli.output, cli.upload),
    };
    let uploader = HttpUploader::new(cli.server);

    run::execute(&source, &uploader, &cfg, &mut std::io::stdout()).await?;
    Ok(())
}
