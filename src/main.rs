use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington_activities::{api, config::ServerConfig, directory::Directory};

#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "Extracurricular activities signup API for Mergington High School")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the activities server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Directory served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// JSON file to seed activities from instead of the built-in set
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Print the activities the server would start with, as JSON
    Activities {
        /// JSON file to seed activities from instead of the built-in set
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "mergington_activities=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_directory(config: &ServerConfig) -> anyhow::Result<Directory> {
    match &config.seed_file {
        Some(path) => Directory::from_json_file(path),
        None => Ok(Directory::with_seed()),
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Mergington Activities server on {}", config.bind_addr());

    let directory = open_directory(&config)?;
    let app = api::create_router_with_config(directory, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "Mergington Activities listening on http://{}",
        config.bind_addr()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let env_config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            static_dir,
            seed,
        }) => {
            let config = ServerConfig {
                host,
                seed_file: seed.or(env_config.seed_file.clone()),
                ..env_config
            }
            .with_port(port)
            .with_static_dir(Some(static_dir));

            serve(config).await?;
        }
        Some(Commands::Activities { seed }) => {
            let config = ServerConfig {
                seed_file: seed.or(env_config.seed_file.clone()),
                ..env_config
            };
            let directory = open_directory(&config)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&directory.list_activities())?
            );
        }
        None => serve(env_config).await?,
    }

    Ok(())
}
