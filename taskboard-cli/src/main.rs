use clap::{Parser, Subcommand};

mod commands;
mod error;
mod render;

use commands::{ServeArgs, TaskArgs, print_schema, run_serve, run_tasks};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version)]
#[command(about = "Taskboard - in-memory task board served over GraphQL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the GraphQL server over the seeded in-memory store
    Serve(ServeArgs),
    /// Print the GraphQL schema in SDL form
    Schema,
    /// Read and toggle tasks on a running server
    Tasks(TaskArgs),
}

#[tokio::main]
async fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Schema => {
            print_schema();
            Ok(())
        }
        Commands::Tasks(args) => run_tasks(args).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
