//! Command-line front end over the extraction and consolidation core.
//!
//! Extraction commands work on saved page snapshots (HTML file plus the URL
//! it was captured from); list commands operate on one named list in the
//! JSON store. Status lines go to stdout, diagnostics to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tracklift_core::config::Config;
use tracklift_core::extract_tracks;
use tracklift_core::page;
use tracklift_core::protocol::SnapshotChannel;
use tracklift_core::session::ListSession;
use tracklift_core::store::JsonFileStore;
use tracklift_core::track::TrackRecord;

#[derive(Debug, Parser)]
#[command(
    name = "tracklift",
    version,
    about = "Extract tracks from music page snapshots and consolidate them into exportable lists"
)]
struct Cli {
    /// Override the list store file
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Named list to operate on
    #[arg(long, global = true, default_value = "queue", value_name = "NAME")]
    list: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a page URL and show the ids it carries
    Inspect { url: String },
    /// Extract tracks from a page snapshot and print them
    Extract {
        /// HTML snapshot file
        snapshot: PathBuf,
        /// URL the snapshot was captured from
        #[arg(long)]
        url: String,
    },
    /// Extract tracks from a snapshot and merge them into the list
    Import {
        /// HTML snapshot file
        snapshot: PathBuf,
        /// URL the snapshot was captured from
        #[arg(long)]
        url: String,
    },
    /// Print the list
    List,
    /// Move the entry at POSITION one step up
    Up { position: usize },
    /// Move the entry at POSITION one step down
    Down { position: usize },
    /// Remove the entry at POSITION
    Remove { position: usize },
    /// Remove every entry
    Clear,
    /// Print the list as versioned JSON
    Export {
        /// Copy the JSON to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },
}

#[derive(Debug, Clone)]
struct RunOptions {
    store: Option<PathBuf>,
    list: String,
}

impl RunOptions {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            store: cli.store.clone(),
            list: cli.list.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let opts = RunOptions::from_cli(&cli);
    let config = Config::load()?;

    match cli.command {
        Commands::Inspect { url } => run_inspect(&config, &url),
        Commands::Extract { snapshot, url } => run_extract(&config, &snapshot, &url),
        Commands::Import { snapshot, url } => run_import(&opts, &config, &snapshot, &url).await,
        Commands::List => run_list(&opts, &config).await,
        Commands::Up { position } => run_up(&opts, &config, position).await,
        Commands::Down { position } => run_down(&opts, &config, position).await,
        Commands::Remove { position } => run_remove(&opts, &config, position).await,
        Commands::Clear => run_clear(&opts, &config).await,
        Commands::Export { copy } => run_export(&opts, &config, copy).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run_inspect(config: &Config, url: &str) -> anyhow::Result<()> {
    let view = page::classify(url);
    println!("view: {}", view.label());
    if !page::host_matches(url, &config.page.expected_host) {
        println!("note: not a {} URL", config.page.expected_host);
    }
    let video_id = page::video_id_from_url(url);
    let playlist_id = page::playlist_id_from_url(url);
    if let Some(id) = &video_id {
        println!("videoId: {}", id);
    }
    if let Some(id) = &playlist_id {
        println!("playlistId: {}", id);
    }
    if video_id.is_none() && playlist_id.is_none() {
        println!("no video or playlist id in this URL");
    }
    Ok(())
}

fn run_extract(config: &Config, snapshot: &Path, url: &str) -> anyhow::Result<()> {
    ensure_expected_host(url, &config.page.expected_host)?;
    let html = read_snapshot(snapshot)?;
    let batch = extract_tracks(&html, url);
    if batch.is_empty() {
        println!("No tracks found.");
        return Ok(());
    }
    for (i, track) in batch.iter().enumerate() {
        println!("{}", entry_line(i, track));
    }
    Ok(())
}

async fn run_import(
    opts: &RunOptions,
    config: &Config,
    snapshot: &Path,
    url: &str,
) -> anyhow::Result<()> {
    ensure_expected_host(url, &config.page.expected_host)?;
    let html = read_snapshot(snapshot)?;
    let channel = SnapshotChannel::new(url, html);
    let mut session = open_session(opts, config).await?;
    let outcome = session
        .import_from(&channel, config.page.request_timeout())
        .await?;
    println!("Added {} tracks. Total: {}", outcome.added, outcome.total);
    Ok(())
}

async fn run_list(opts: &RunOptions, config: &Config) -> anyhow::Result<()> {
    let session = open_session(opts, config).await?;
    if session.list().is_empty() {
        println!("List is empty");
        return Ok(());
    }
    for (i, track) in session.list().iter().enumerate() {
        println!("{}", entry_line(i, track));
    }
    Ok(())
}

async fn run_up(opts: &RunOptions, config: &Config, position: usize) -> anyhow::Result<()> {
    let index = to_index(position)?;
    let mut session = open_session(opts, config).await?;
    if index >= session.list().len() {
        bail!("no entry at position {}", position);
    }
    if session.swap_up(index).await? {
        println!("Moved entry {} up.", position);
    } else {
        println!("Entry {} is already first.", position);
    }
    Ok(())
}

async fn run_down(opts: &RunOptions, config: &Config, position: usize) -> anyhow::Result<()> {
    let index = to_index(position)?;
    let mut session = open_session(opts, config).await?;
    if index >= session.list().len() {
        bail!("no entry at position {}", position);
    }
    if session.swap_down(index).await? {
        println!("Moved entry {} down.", position);
    } else {
        println!("Entry {} is already last.", position);
    }
    Ok(())
}

async fn run_remove(opts: &RunOptions, config: &Config, position: usize) -> anyhow::Result<()> {
    let index = to_index(position)?;
    let mut session = open_session(opts, config).await?;
    match session.remove(index).await? {
        Some(track) => println!("Removed: {}", entry_title(&track)),
        None => bail!("no entry at position {}", position),
    }
    Ok(())
}

async fn run_clear(opts: &RunOptions, config: &Config) -> anyhow::Result<()> {
    let mut session = open_session(opts, config).await?;
    session.clear().await?;
    println!("List cleared.");
    Ok(())
}

async fn run_export(opts: &RunOptions, config: &Config, copy: bool) -> anyhow::Result<()> {
    let session = open_session(opts, config).await?;
    let json = session.export_json()?;
    if copy {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(json.clone())) {
            Ok(()) => println!("JSON copied to clipboard!"),
            Err(e) => {
                warn!("clipboard unavailable: {}", e);
                println!("{}", json);
            }
        }
    } else {
        println!("{}", json);
    }
    Ok(())
}

async fn open_session(
    opts: &RunOptions,
    config: &Config,
) -> anyhow::Result<ListSession<JsonFileStore>> {
    let path = opts
        .store
        .clone()
        .unwrap_or_else(|| config.store.lists_file.clone());
    Ok(ListSession::open(JsonFileStore::new(path), opts.list.clone()).await?)
}

fn read_snapshot(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))
}

fn ensure_expected_host(url: &str, host: &str) -> anyhow::Result<()> {
    if !page::host_matches(url, host) {
        bail!("not a {} page: {}", host, url);
    }
    Ok(())
}

fn to_index(position: usize) -> anyhow::Result<usize> {
    if position == 0 {
        bail!("positions start at 1");
    }
    Ok(position - 1)
}

fn entry_line(index: usize, track: &TrackRecord) -> String {
    format!("{}. {}", index + 1, entry_title(track))
}

fn entry_title(track: &TrackRecord) -> String {
    format!("{} - {}", track.title, track.artist.as_deref().unwrap_or("?"))
}
