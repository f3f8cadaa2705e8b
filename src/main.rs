use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hah_admin::backend::{MemoryBackend, ProductBackend, RestBackend};
use hah_admin::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use hah_admin::models::AppState;
use hah_admin::routes::build_router;

fn build_rest_backend() -> RestBackend {
    let client = match reqwest::Client::builder()
        .user_agent(format!("hah-admin/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config::get_api_timeout_secs()))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    RestBackend::new(client, config::get_api_base_url(), config::get_api_token())
}

fn build_state_from_env(env_file: Option<&str>, in_memory: bool) -> AppState {
    config::load_env_file(env_file);
    let list_path = config::get_token_list_path();
    if in_memory {
        tracing::info!("Using in-memory backend");
        let backend = Arc::new(MemoryBackend::with_sample_products());
        AppState::new(backend.clone(), backend, list_path)
    } else {
        let backend = Arc::new(build_rest_backend());
        tracing::info!(api_base_url = %backend.api_base_url, "Using REST backend");
        AppState::new(backend.clone(), backend, list_path)
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting hah-admin server");
    println!(
        "{} {}",
        yansi::Paint::new("Token form available at").green(),
        yansi::Paint::new(format!("http://{}/token/new", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

async fn check_config(env_file: Option<&str>) {
    config::load_env_file(env_file);
    let api_base_url = config::get_api_base_url();
    println!("API_BASE_URL: {}", api_base_url);
    if config::get_api_token().is_empty() {
        println!("{}", yansi::Paint::yellow("API_TOKEN not set; requests are sent unauthenticated"));
    }
    println!("TOKEN_LIST_PATH: {}", config::get_token_list_path());

    let backend = build_rest_backend();
    match backend.fetch_products().await {
        Ok(products) => {
            println!(
                "{} ({} products available)",
                yansi::Paint::green("Backend reachable"),
                products.len()
            );
        }
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::red("Backend check failed"), e);
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "hah-admin",
    author,
    version,
    about = "Admin form for creating and editing tokens",
    after_help = "Use `hah-admin <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
        /// Keep tokens in memory instead of calling the REST backend
        #[arg(long, default_value_t = false)]
        in_memory: bool,
    },
    /// Validate configuration and backend connectivity
    #[command(long_about = "Print the effective configuration and fetch the product list from the configured backend to confirm it is reachable.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        yansi::disable();
    }

    match cli.command {
        Some(Commands::Serve { host, port, env_file, stylesheet, in_memory }) => {
            let state = build_state_from_env(env_file.as_deref(), in_memory);
            start_server(state, &host, port, stylesheet).await;
        }
        Some(Commands::CheckConfig { env_file }) => {
            check_config(env_file.as_deref()).await;
        }
        None => {
            let state = build_state_from_env(None, false);
            start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        }
    }
}
