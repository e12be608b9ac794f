//! mazeview - terminal TVMaze show & episode browser.

/// Application configuration (TOML).
mod config;
/// Application-wide constants.
mod constants;
/// Debounce timing utility.
mod debounce;
/// Plain-text rendering of API HTML fragments.
mod text;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use crate::text::strip_html;
use crate::tui::browser::run_browser;
use mazeview_api::tvmaze::model::{Episode, Show};
use mazeview_api::tvmaze::{CachedTvMaze, LocalTvMazeApi, TvMazeClient, filter_episodes};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search for a show by name.
    Search(SearchArgs),
    /// Print details for a show.
    Show(ShowArgs),
    /// List a show's episodes.
    Episodes(EpisodesArgs),
    /// Print details for a single episode.
    Episode(EpisodeArgs),
    /// Browse a show and its episodes in the TUI.
    Browse(BrowseArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "Powerpuff Girls").
    #[arg(long, required = true)]
    query: String,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// TVMaze show ID.
    #[arg(long, required = true)]
    id: u32,
}

/// Arguments for the `episodes` subcommand.
#[derive(clap::Args)]
struct EpisodesArgs {
    /// TVMaze show ID.
    #[arg(long, required = true)]
    id: u32,

    /// Keep only episodes whose title or summary contains this text.
    #[arg(long)]
    filter: Option<String>,
}

/// Arguments for the `episode` subcommand.
#[derive(clap::Args)]
struct EpisodeArgs {
    /// TVMaze episode ID.
    #[arg(long, required = true)]
    id: u32,

    /// TVMaze ID of the show the episode belongs to.
    #[arg(long, required = true)]
    show_id: u32,
}

/// Arguments for the `browse` subcommand.
#[derive(clap::Args)]
struct BrowseArgs {
    /// Show to search for. Falls back to the configured default.
    #[arg(long)]
    query: Option<String>,
}

/// Builds the memoizing TVMaze client.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client fails to build.
#[instrument(skip_all)]
fn build_client() -> Result<CachedTvMaze<TvMazeClient>> {
    let client = TvMazeClient::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TVMaze client")?;
    Ok(CachedTvMaze::new(client))
}

/// Prints a show's fields.
fn print_show(show: &Show) {
    tracing::info!("ID: {}", show.id);
    tracing::info!("Title: {}", show.title);
    tracing::info!("Description: {}", strip_html(&show.description));
    tracing::info!("Image: {}", show.cover_image.as_deref().unwrap_or("-"));
}

/// Prints an episode's fields.
fn print_episode(episode: &Episode) {
    tracing::info!("ID: {}", episode.id);
    tracing::info!("Show ID: {}", episode.show_id);
    tracing::info!(
        "Season {}, Episode {}",
        episode.season,
        episode.episode_number
    );
    tracing::info!("Title: {}", episode.title);
    tracing::info!("Airdate: {}", episode.airdate);
    tracing::info!("Image: {}", episode.cover_image.as_deref().unwrap_or("-"));
    tracing::info!("Summary: {}", strip_html(&episode.summary));
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs) -> Result<()> {
    let client = build_client()?;

    let show = client
        .search_show(&args.query)
        .await
        .context("show search failed")?;

    match show {
        Some(show) => print_show(&show),
        None => tracing::info!("No shows found for \"{}\"", args.query),
    }

    Ok(())
}

/// Runs the `show` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_show(args: &ShowArgs) -> Result<()> {
    let client = build_client()?;

    let show = client
        .show_details(args.id)
        .await
        .context("failed to fetch show details")?;
    print_show(&show);

    Ok(())
}

/// Runs the `episodes` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_episodes(args: &EpisodesArgs) -> Result<()> {
    let client = build_client()?;

    let episodes = client
        .show_episodes(args.id)
        .await
        .context("failed to fetch episodes")?;

    let shown: Vec<&Episode> = match args.filter.as_deref() {
        Some(query) => filter_episodes(&episodes, query),
        None => episodes.iter().collect(),
    };

    tracing::info!("S\tE\tAirdate\t\tTitle");
    for episode in &shown {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            episode.season,
            episode.episode_number,
            episode.airdate,
            episode.title,
        );
    }
    tracing::info!("Total: {} episodes ({} shown)", episodes.len(), shown.len());

    Ok(())
}

/// Runs the `episode` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_episode(args: &EpisodeArgs) -> Result<()> {
    let client = build_client()?;

    let episode = client
        .episode_details(args.id, args.show_id)
        .await
        .context("failed to fetch episode details")?;

    match episode {
        Some(episode) => print_episode(&episode),
        None => tracing::info!("Episode {} not found", args.id),
    }

    Ok(())
}

/// Runs the `browse` subcommand.
///
/// Searches for the show, loads its episodes, and launches the TUI.
///
/// # Errors
///
/// Returns an error if config loading, API calls, or the TUI fails.
#[instrument(skip_all)]
async fn run_browse(args: &BrowseArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let query = args
        .query
        .clone()
        .unwrap_or(config.search.default_query);

    let client = build_client()?;

    tracing::info!("Searching for \"{query}\"...");
    let Some(show) = client
        .search_show(&query)
        .await
        .context("show search failed")?
    else {
        tracing::info!("No shows found for \"{query}\"");
        return Ok(());
    };

    tracing::info!("Fetching episodes for {} (ID {})...", show.title, show.id);
    let episodes = client
        .show_episodes(show.id)
        .await
        .context("failed to fetch episodes")?;
    tracing::info!("Loaded {} episodes. Launching TUI...", episodes.len());

    run_browser(
        show,
        episodes,
        Duration::from_millis(config.search.debounce_ms),
    )
    .context("browser TUI failed")
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => run_search(&args).await,
        Commands::Show(args) => run_show(&args).await,
        Commands::Episodes(args) => run_episodes(&args).await,
        Commands::Episode(args) => run_episode(&args).await,
        Commands::Browse(args) => run_browse(&args, cli.dir.as_ref()).await,
    }
}
