use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use agenthub::api::{self, AppState};
use agenthub::render::CatalogView;
use agenthub::{CatalogLoader, Config, Session};

#[derive(Parser)]
#[command(name = "agenthub")]
#[command(about = "Browse, search and export agent configurations", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory index holding the agent JSON files
    #[arg(long, global = true)]
    agents_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog over HTTP
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print agent cards
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show the details of the card at a position
    Show {
        position: usize,
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Save the agent at a position as a JSON file
    Export {
        position: usize,
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenthub=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(agents_url) = cli.agents_url {
        config.agents_url = agents_url;
    }

    let loader = CatalogLoader::new(&config)?;
    let mut session = Session::init(&loader).await;
    log::info!(
        "Catalog ready: {} agents ({})",
        session.records().len(),
        session.source().as_str()
    );

    match cli.command {
        Commands::Serve { port } => {
            let state = AppState::new(session.records().to_vec());
            api::serve(state, port.unwrap_or(config.port)).await?;
        }
        Commands::List { query } => {
            print_catalog(&session.search(&query));
        }
        Commands::Show { position, query } => {
            session.search(&query);
            let detail = session
                .select(position)
                .ok_or_else(|| anyhow!("No agent at position {}", position))?;
            print!("{}", detail.to_text());
        }
        Commands::Export {
            position,
            query,
            out,
        } => {
            session.search(&query);
            session
                .select(position)
                .ok_or_else(|| anyhow!("No agent at position {}", position))?;
            if let Some(artifact) = session.export() {
                let path = artifact.write_to(&out).await?;
                println!("Exported {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_catalog(view: &CatalogView) {
    println!("{}", view.count_label());
    if view.is_empty() {
        println!("No agents found");
        return;
    }

    for card in &view.cards {
        println!("\n[{}] {} ({})", card.position, card.name, card.model);
        println!("    {}", card.description);
        if !card.badges.is_empty() {
            println!("    {}", card.badges.join(" \u{2022} "));
        }
    }
}
