use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use agentgraph_rs::graph::{sample_spec, StructureLoader, TreeBuilder};
use agentgraph_rs::render::draw_graph;
use agentgraph_rs::server;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a graph image from an agent structure file
    Generate {
        /// Path to the structure file (JSON or YAML)
        #[arg(short, long, default_value = "agent_structure.json")]
        file: String,

        /// Output file name, without extension
        #[arg(short, long, default_value = "agent_graph")]
        output: String,

        /// Output format: png, svg or dot
        #[arg(long, default_value = "png")]
        format: String,
    },
    /// Write a sample agent structure file
    Scaffold {
        /// Where to write the sample structure
        #[arg(short, long, default_value = "agent_structure.json")]
        output: String,
    },
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Generate {
            file,
            output,
            format,
        } => {
            let spec = StructureLoader::new()
                .load(&file)
                .with_context(|| format!("failed to load agent structure from {}", file))?;

            let tree = TreeBuilder::new().build(&spec)?;
            log::info!(
                "Built agent tree '{}' with {} nodes (depth {})",
                tree.name,
                tree.node_count(),
                tree.depth()
            );

            let path = draw_graph(&tree, &output, &format)
                .await
                .with_context(|| format!("failed to render {}", output))?;
            println!("Graph written to {}", path.display());
        }
        Commands::Scaffold { output } => {
            let content = serde_json::to_string_pretty(&sample_spec())?;
            tokio::fs::write(&output, content)
                .await
                .with_context(|| format!("failed to write {}", output))?;
            println!("Sample structure written to {}", output);
        }
        Commands::Serve { port } => {
            server::serve(port).await?;
        }
    }

    Ok(())
}
