//! Command-line entry points.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::{Config, RemoteMode};
use crate::feedback::{FeedbackDraft, FeedbackId, FeedbackPatch, FeedbackRecord, Rating};
use crate::logging;
use crate::remote;
use crate::server::FeedbackServer;
use crate::store::FeedbackStore;

#[derive(Parser, Debug)]
#[command(name = "feedback-board")]
#[command(about = "Collect, rate and curate feedback from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/feedback-board/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use an in-memory collection instead of the HTTP endpoint
    #[arg(long, global = true, conflicts_with = "base_url")]
    pub local: bool,

    /// Collection endpoint root, e.g. http://127.0.0.1:5000
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every review, newest first
    List,
    /// Print the review count and average rating
    Stats,
    /// Submit a review
    Add {
        #[arg(long)]
        text: String,
        /// 1 to 10
        #[arg(long)]
        rating: u8,
    },
    /// Change the text and/or rating of a review
    Update {
        id: FeedbackId,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        rating: Option<u8>,
    },
    /// Delete a review
    Delete {
        id: FeedbackId,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Serve the /feedback collection from memory
    Serve {
        /// Listen address (overrides server.bind_addr)
        #[arg(long)]
        bind: Option<String>,
        /// Start with an empty collection
        #[arg(long)]
        no_seed: bool,
    },
    /// Open the interactive board
    Tui,
}

impl Cli {
    /// Resolve the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if self.local {
            config.remote.mode = RemoteMode::Local;
        }
        if let Some(base_url) = &self.base_url {
            config.remote.mode = RemoteMode::Http;
            config.remote.base_url = base_url.clone();
        }
        if let Command::Serve { bind, no_seed } = &self.command {
            if let Some(bind) = bind {
                config.server.bind_addr = bind.clone();
            }
            if *no_seed {
                config.server.seed = false;
            }
        }

        config.validate()?;
        Ok(config)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Serve { .. } => logging::init_stderr("info"),
        Command::Tui => logging::init_file_from_env(),
        _ => logging::init_stderr("warn"),
    }

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "Configuration resolved");

    if let Command::Serve { .. } = cli.command {
        let server = FeedbackServer::from_config(&config.server)
            .await
            .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
        println!("Serving feedback at {}/feedback", server.base_url());
        server.run_until(shutdown_signal()).await?;
        return Ok(());
    }

    let client = remote::connect(&config.remote)?;
    let store = FeedbackStore::new(client);

    match cli.command {
        Command::Tui => {
            let runtime = tokio::runtime::Handle::current();
            let session = store.clone();
            tokio::task::spawn_blocking(move || crate::ui::run(session, runtime))
                .await
                .context("Terminal UI task panicked")??;
            store.detach();
        }
        Command::List => {
            store.load().await?;
            let state = store.snapshot();
            if state.is_empty() {
                println!("No Feedback Yet");
            }
            for record in &state.records {
                println!("{}", format_record(record));
            }
        }
        Command::Stats => {
            store.load().await?;
            let stats = store.snapshot().stats();
            println!("{}", stats.count_label());
            println!("Average Rating: {}", stats.average_label());
        }
        Command::Add { text, rating } => {
            store.load().await?;
            let record = store.add(FeedbackDraft::new(text, rating)).await?;
            println!("Added {}", format_record(&record));
        }
        Command::Update { id, text, rating } => {
            store.load().await?;
            let mut patch = FeedbackPatch::default();
            if let Some(text) = text {
                patch = patch.with_text(text);
            }
            if let Some(rating) = rating {
                patch = patch.with_rating(Rating::new(rating)?);
            }
            let record = store.update(&id, patch).await?;
            println!("Updated {}", format_record(&record));
        }
        Command::Delete { id, yes } => {
            store.load().await?;
            // Nothing to confirm; deleting an absent id is a no-op.
            let Some(record) = store.snapshot().find(&id).cloned() else {
                println!("No feedback #{}", id);
                return Ok(());
            };
            let confirmed = yes || confirm_delete(&record)?;
            if store.delete(&id, confirmed).await? {
                println!("Deleted #{}", id);
            } else {
                println!("Kept #{}", id);
            }
        }
        Command::Serve { .. } => {}
    }

    Ok(())
}

pub fn format_record(record: &FeedbackRecord) -> String {
    format!("#{} [{}/10] {}", record.id, record.rating.get(), record.text)
}

fn confirm_delete(record: &FeedbackRecord) -> anyhow::Result<bool> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", format_record(record))?;
    write!(stdout, "Are you sure you want to delete? [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown requested");
}
