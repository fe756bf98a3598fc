use clap::Parser;
use dotenv::dotenv;
use geoint::ai::client::OpenAiClient;
use geoint::config::{self, GatewayConfig};
use geoint::render;
use geoint::session::LastResultFile;
use geoint::{GeoIntError, Orchestrator, QueryOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Turn a natural-language footfall or traffic question into a WFS request URL.
#[derive(Parser, Debug)]
#[command(name = "geoint", version)]
struct Cli {
    /// Question in plain language. Omit it together with --last to redisplay the stored result.
    query: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    #[arg(long, env = "OPENAI_API_BASE", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "GEOINT_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    #[arg(long, env = "GEOINT_TEMPERATURE", default_value_t = config::DEFAULT_TEMPERATURE)]
    temperature: f32,

    #[arg(long, env = "GEOINT_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write the OpenLayers map page for the result to this file.
    #[arg(long)]
    html: Option<PathBuf>,

    /// File holding the last successful result, for redisplay.
    #[arg(long)]
    last: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), GeoIntError> {
    let store = cli.last.as_ref().map(LastResultFile::new);
    let mut last = match &store {
        Some(store) => store.load()?,
        None => None,
    };

    let query = match cli.query.as_deref() {
        Some(query) => query,
        None => {
            return match &last {
                Some(outcome) => present(outcome, &cli),
                None => {
                    println!("Enter your query naturally to begin analysis, e.g.");
                    println!("  geoint \"show me data where the total visits to my mall only is greater than 500\"");
                    println!("  geoint \"find road segments where traffic density is greater on weekends\"");
                    Ok(())
                }
            };
        }
    };

    let config = GatewayConfig::new(cli.api_key.clone())
        .with_api_base(cli.api_base.clone())
        .with_model(cli.model.clone())
        .with_temperature(cli.temperature)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let orchestrator = Orchestrator::new(OpenAiClient::new(config)?);

    println!("🛰️  Analyzing query and generating map...");
    let outcome = orchestrator.run_and_remember(query, &mut last).await?;
    println!("✅ Query analyzed as {} data - generating visualization...", outcome.domain);

    if let Some(store) = &store {
        store.store(&outcome)?;
    }
    present(&outcome, &cli)
}

fn present(outcome: &QueryOutcome, cli: &Cli) -> Result<(), GeoIntError> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("Domain: {}", outcome.domain);
        println!("URL:    {}", outcome.url);
    }

    if let Some(path) = &cli.html {
        std::fs::write(path, render::render_map_html(&outcome.url))?;
        log::info!("🗺️  Map page written to '{}'", path.display());
    }
    Ok(())
}
