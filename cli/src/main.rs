//! nodemeta: edit, push and format map node meta data.
//!
//! Usage:
//!   nodemeta set --record meta.json --type text --id a1 --value '"hello"' --write
//!   nodemeta push --target map-42 --record meta.json
//!   echo "Title" | nodemeta markup --action h1 --start 0 --end 5

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nodemeta_cli::{
    markup, push_record, read_record, render_payload, resolve_config, save_record, set_attribute,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "nodemeta")]
#[command(about = "Edit, push and format map node meta data")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set one attribute value in a record file
    Set {
        /// Record file (created on --write if missing)
        #[arg(short, long)]
        record: PathBuf,
        /// Attribute type, e.g. text
        #[arg(short = 't', long = "type")]
        meta_type: String,
        /// Attribute id within the type
        #[arg(short, long)]
        id: String,
        /// New value as JSON; anything that is not JSON is taken as a string
        #[arg(long)]
        value: String,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Push a record file to the meta webhook
    Push {
        /// Target map node id
        #[arg(short, long)]
        target: String,
        /// Record file
        #[arg(short, long)]
        record: PathBuf,
        /// Webhook URL
        #[arg(long, env = "NODEMETA_ENDPOINT")]
        endpoint: Option<String>,
        /// JSON sync config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply a markdown action to text read from stdin
    Markup {
        /// bold, h1, h2 or ul
        #[arg(short, long)]
        action: String,
        /// Selection start (characters)
        #[arg(long, default_value = "0")]
        start: usize,
        /// Selection end (characters)
        #[arg(long, default_value = "0")]
        end: usize,
        /// Use English placeholders
        #[arg(long)]
        english: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Set {
            record,
            meta_type,
            id,
            value,
            write,
        } => {
            let updated = set_attribute(&record, &meta_type, &id, &value).await?;
            if write {
                save_record(&record, &updated).await?;
                info!("Updated {} in {}", id, record.display());
            } else {
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
        }
        Command::Push {
            target,
            record,
            endpoint,
            config,
            dry_run,
        } => {
            if dry_run {
                let loaded = read_record(&record).await?;
                println!("{}", render_payload(&target, &loaded)?);
                return Ok(());
            }
            let config = resolve_config(config.as_deref(), endpoint.as_deref()).await?;
            let status = push_record(config, &target, &record).await?;
            info!("Remote accepted meta for {} (HTTP {})", target, status);
        }
        Command::Markup {
            action,
            start,
            end,
            english,
        } => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            let edit = markup(&buffer, &action, start, end, english)?;
            info!(
                "Selection is now {}..{}",
                edit.selection.start, edit.selection.end
            );
            print!("{}", edit.text);
        }
    }

    Ok(())
}
