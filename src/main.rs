use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
mod catalog;
mod error;
mod runner;
mod utils;

use catalog::{Category, DownloadPlan};

/// Fetch the site's event and location images into public/images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download every image of the built-in plan (default)
    Fetch {
        /// Directory that contains public/images
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Per-request timeout in seconds (transport default when unset)
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Print the built-in download plan
    Plan {
        /// Only list one category
        #[arg(value_enum)]
        category: Option<Category>,

        /// Print the plan as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn print_plan(plan: &DownloadPlan, only: Option<Category>, json: bool) -> error::Result<()> {
    if json {
        let rendered = match only {
            Some(category) => serde_json::to_string_pretty(plan.items(category))?,
            None => serde_json::to_string_pretty(plan)?,
        };
        println!("{}", rendered);
        return Ok(());
    }

    let selected = plan
        .entries()
        .filter(|(category, _)| only.map_or(true, |wanted| wanted == *category));
    for (category, item) in selected {
        let destination = category.directory(&PathBuf::new()).join(&item.file_name);
        println!("{:<9} {} -> {}", category, item.source, destination.display());
    }
    Ok(())
}

async fn fetch(root: PathBuf, timeout: Option<u64>) -> error::Result<()> {
    let client = utils::http::build_client(timeout.map(Duration::from_secs))?;
    let plan = DownloadPlan::builtin();
    let progress = runner::progress_bar(plan.len());

    runner::run(&client, &root, &plan, &progress).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let command = args.command.unwrap_or(Commands::Fetch {
        root: None,
        timeout: None,
    });

    let result = match command {
        Commands::Fetch { root, timeout } => fetch(root.unwrap_or_default(), timeout).await,
        Commands::Plan { category, json } => {
            print_plan(&DownloadPlan::builtin(), category, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
