//! CLI command implementations

use clap::Subcommand;
use websift_search::{SearchOptions, WebSearchService};
use websift_web::{GatewayConfig, run_server};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway server
    Serve {
        /// Bind address, e.g. 127.0.0.1:5000 (overrides WEBSIFT_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Use canned demo data instead of live search
        #[arg(long)]
        demo: bool,
    },
    /// Run a one-off search and print the raw provider hits as JSON
    Search {
        /// Query string
        query: String,
        /// Number of results to fetch
        #[arg(short = 'n', long, default_value = "10")]
        num_results: usize,
        /// Fetch titles and descriptions, not just URLs
        #[arg(long)]
        advanced: bool,
        /// Safe-search setting ("off" or "active")
        #[arg(long, default_value = "off")]
        safe: String,
        /// Use canned demo data instead of live search
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error if configuration is incomplete, the server fails, or
/// the one-off search fails.
pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { bind, demo } => serve(bind, demo).await,
        Commands::Search {
            query,
            num_results,
            advanced,
            safe,
            demo,
        } => search(query, num_results, advanced, safe, demo).await,
    }
}

async fn serve(bind: Option<String>, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env()?;
    if let Some(bind) = bind {
        config.bind_address = bind.parse()?;
    }

    println!("Websift gateway starting on http://{}", config.bind_address);
    if demo {
        println!("Mode: Demo (canned data, no network search)");
    }

    run_server(config, demo).await
}

async fn search(
    query: String,
    num_results: usize,
    advanced: bool,
    safe: String,
    demo: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = if demo {
        WebSearchService::new_demo()
    } else {
        WebSearchService::new()
    };

    let options = SearchOptions {
        num_results,
        safe,
        advanced,
    };

    let hits = service.search(&query, &options).await?;
    println!("{}", serde_json::to_string_pretty(&hits)?);

    Ok(())
}
