//! `fabula` -- terminal client for the AI-assisted story-writing
//! backend.
//!
//! Connects to the story API, keeps the directory of projects and one
//! open editing session in memory, and drives both from an interactive
//! shell.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default                 | Description              |
//! |------------------|----------|-------------------------|--------------------------|
//! | `FABULA_API_URL` | no       | `http://127.0.0.1:8000` | Story API base URL       |
//! | `RUST_LOG`       | no       | `fabula_shell=info`     | Tracing filter directive |

use fabula_client::StoryApi;
use fabula_session::Workbench;
use fabula_shell::config::ShellConfig;
use fabula_shell::repl;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fabula_shell=info,fabula_session=info,fabula_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ShellConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting fabula shell");

    let api = StoryApi::new(config.api_url.clone());
    let mut bench = Workbench::new(api);

    repl::run(&mut bench).await?;
    Ok(())
}
