use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "istio-nlb")]
#[command(about = "Resolve the NLB and target group fronting an Istio gateway service")]
pub struct Cli {
    /// Kubernetes cluster name, as used in kubernetes.io/cluster/<name> tags
    #[arg(long, env = "ISTIO_NLB_CLUSTER", default_value = "tkg-dev-shared")]
    pub cluster: String,

    /// Service identifier (<namespace>/<name>) in the kubernetes.io/service-name tag
    #[arg(
        long,
        env = "ISTIO_NLB_SERVICE",
        default_value = "istio-system/istio-eastwestgateway"
    )]
    pub service: String,

    /// AWS region (defaults to the SDK provider chain)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Find the service's NLB and print its target group ARN (default)
    Reconcile,
    /// List the EC2 instance IDs of the cluster's tagged worker nodes
    Nodes,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Yaml,
}
