//! filmgraph CLI: command-line client for the filmgraph HTTP API

mod client;
mod render;

use clap::{Parser, Subcommand};
use client::{ApiClient, CliResult};
use render::Section;

#[derive(Parser)]
#[command(name = "filmgraph", version, about = "Query the filmgraph API")]
struct Cli {
    /// Server HTTP URL
    #[arg(long, default_value = "http://localhost:8000", global = true, env = "FILMGRAPH_URL")]
    url: String,

    /// API key for protected endpoints
    #[arg(long, global = true, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server and graph connectivity
    Health,
    /// Search films by title, director or genre
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Films related to a film (requires an API key)
    Related {
        /// Film wikidata id, e.g. Q19303
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Films and genres of a director
    Contributions {
        /// Director wikidata id
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Subgraph around a genre
    Topic {
        name: String,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        depth: Option<u8>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Ask a question, e.g. "top genres" or "films by director Q25191"
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let client = ApiClient::new(&cli.url, cli.api_key)?;

    let (response, sections) = match cli.command {
        Commands::Health => {
            let r = client.health().await?;
            let s = render::health(&r);
            (r, s)
        }
        Commands::Search { query, limit } => {
            let r = client.search(&query, limit).await?;
            let s = render::search(&r);
            (r, s)
        }
        Commands::Related { id, limit } => {
            let r = client.related(&id, limit).await?;
            let s = render::related(&r);
            (r, s)
        }
        Commands::Contributions { id, limit } => {
            let r = client.contributions(&id, limit).await?;
            let s = render::contributions(&r);
            (r, s)
        }
        Commands::Topic { name, depth, limit } => {
            let r = client.topic(&name, depth, limit).await?;
            let s = render::topic(&r);
            (r, s)
        }
        Commands::Ask { question, limit } => {
            let r = client.ask(&question.join(" "), limit).await?;
            let s = render::ask(&r);
            (r, s)
        }
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Table => sections.iter().for_each(Section::print),
    }
    Ok(())
}
