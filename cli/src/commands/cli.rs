use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "llmmatch",
    version,
    about = "Recommend an LLM for a requirement profile"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.llmmatch/config.toml or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Recommend a model for one requirement and print the result as JSON.
    Recommend(RecommendArgs),
    /// Print the model catalog as JSON.
    Models(ModelsArgs),
    /// Train the confirmation model and write its artifact.
    Train(TrainArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Overrides `[http_server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Overrides `[http_server] port`.
    #[arg(long)]
    pub port: Option<u16>,
}

/// Values are checked by the recommender, so an unknown value exits with the
/// invalid-requirement code rather than a clap usage error.
#[derive(ClapArgs, Debug, Clone)]
pub struct RecommendArgs {
    /// code | chat | summarize | analysis | translation | rag
    #[arg(long = "task")]
    pub task_type: String,

    /// Maximum input cost in USD per 1M tokens.
    #[arg(long)]
    pub budget: f64,

    /// realtime | moderate | batch
    #[arg(long, default_value = "moderate")]
    pub latency: String,

    /// 4k | 32k | 128k | 200k
    #[arg(long = "context", default_value = "32k")]
    pub context_length: String,

    /// cloud | local | both
    #[arg(long, default_value = "cloud")]
    pub deployment: String,

    /// cost | speed | intelligence | balanced
    #[arg(long, default_value = "balanced")]
    pub priority: String,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ModelsArgs {
    #[arg(long)]
    pub pretty: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TrainArgs {
    /// Artifact path. Defaults to `[ml] artifact_path`.
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long)]
    pub samples: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,
}
