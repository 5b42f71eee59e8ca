use anyhow::Result;
use clap::{Parser, Subcommand};
use sdg_trends::{
    init_logging, load_sdg_table, serve, DatasetConfig, SdgTable, ServerConfig, ENTITY_COLUMN,
    SDG_DROP_COLUMNS,
};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "sdg-trends")]
#[command(about = "SDG gender-parliament trendline API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(short = 'b', long)]
        host: Option<String>,

        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Fit a trendline for one country and print it as JSON
    Trend {
        country: String,

        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Load the dataset and report its shape
    Inspect {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn load_table(data: Option<PathBuf>) -> Result<SdgTable> {
    let config = DatasetConfig::from_env()?;
    let path = data.unwrap_or(config.path);

    Ok(load_sdg_table(&path, &SDG_DROP_COLUMNS, ENTITY_COLUMN)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    match cli.command {
        Commands::Serve { port, host, data } => {
            let server = ServerConfig::from_env()?;
            let host = host.unwrap_or(server.host);
            let port = port.unwrap_or(server.port);

            let table = Arc::new(load_table(data)?);
            info!(
                "Serving {} countries over {} periods",
                table.entities().len(),
                table.periods().len()
            );

            serve(host, port, table).await?;
        }
        Commands::Trend { country, data } => {
            let table = load_table(data)?;
            let fit = table.trendline(&country)?;

            println!("{}", serde_json::to_string_pretty(&fit)?);
        }
        Commands::Inspect { data } => {
            let table = load_table(data)?;

            println!("Entities: {}", table.entities().len());
            if let (Some(first), Some(last)) = (table.periods().first(), table.periods().last()) {
                println!("Periods:  {} ({} to {})", table.periods().len(), first, last);
            }
            for entity in table.entities() {
                println!("{:>4}  {}", table.observation_count(entity)?, entity);
            }
        }
    }

    Ok(())
}
