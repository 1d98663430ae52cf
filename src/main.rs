mod aws;
mod cli;
mod error;
mod locator;
mod nodes;
mod reconcile;
mod resolver;
mod types;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use clap::Parser;
use tracing::{debug, error, info};

use aws::AwsClients;
use cli::{Cli, Command, OutputFormat};
use nodes::tagged_node_instance_ids;
use reconcile::reconcile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_sdk_config(&cli).await;
    let clients = AwsClients::new(&config);

    if let Err(e) = run(&clients, &cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn load_sdk_config(cli: &Cli) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &cli.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &cli.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;
    debug!("Loaded AWS config, region {:?}", config.region());
    config
}

async fn run(clients: &AwsClients, cli: &Cli) -> anyhow::Result<()> {
    match cli.command.clone().unwrap_or(Command::Reconcile) {
        Command::Reconcile => {
            info!("Reconciling {} in cluster {}", cli.service, cli.cluster);
            let report = reconcile(clients, &cli.cluster, &cli.service)
                .await
                .map_err(|e| e.context("unable to reconcile istio service ports"))?;
            match cli.output {
                OutputFormat::Text => println!("{}", report.target_group_arn),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
            }
        }
        Command::Nodes => {
            let ids = tagged_node_instance_ids(clients, &cli.cluster).await?;
            info!("[{}] Found {} tagged node instances", cli.cluster, ids.len());
            match cli.output {
                OutputFormat::Text => {
                    for id in &ids {
                        println!("{}", id);
                    }
                }
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&ids)?),
            }
        }
    }
    Ok(())
}
