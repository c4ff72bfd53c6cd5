use clap::{Parser, Subcommand};
use fundsub::service::{mock::generator, orchestrator::Orchestrator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fundsub", version, about = "A fund subscription processing CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the operations CSV file to process
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy test data to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "operations.csv", value_name = "FILE")]
        output: String,

        /// Number of operations to generate
        #[arg(short, long, default_value = "20", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a CSV file path or use the 'generate' command")?;

            let orchestrator = Orchestrator::new().await;
            let balances = orchestrator.process_file(&file).await?;
            Orchestrator::output_csv(&balances)?;
        }
    }

    Ok(())
}
