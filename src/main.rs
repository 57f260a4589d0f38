use clap::Parser;
use notes_web::server::{self, ServeConfig};
use reqwest::Url;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Server-rendered frontend for a notes API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the Web Application
    Serve {
        /// Base URL of the notes API
        #[arg(short = 'a', long, env = "API_URL", default_value = "http://localhost:37240")]
        api_url: Url,

        /// Seconds to wait on the notes API before giving up
        #[arg(long, default_value_t = 10)]
        api_timeout: u64,

        /// Port for the Web App
        #[arg(short = 'p', long, default_value_t = 8080)]
        port: u16,

        /// Host for the Web App
        #[arg(short = 's', long, default_value_t = String::from("0.0.0.0"))]
        host: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("notes_web=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = if cfg!(debug_assertions) { "dev" } else { "prod" };
    tracing::info!("Running in {mode} mode");

    let command = Command::parse();

    match command {
        Command::Serve {
            api_url,
            api_timeout,
            host,
            port,
        } => server::serve(ServeConfig {
            api_url,
            api_timeout: Duration::from_secs(api_timeout),
            host,
            port,
        }),
    }
}
