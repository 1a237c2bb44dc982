use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};

use moviefav::app::AppContext;
use moviefav::config::Config;
use moviefav::favorites::FavoritesRepository;
use moviefav::model::Movie;
use moviefav::nav::{Navigator, ScreenView, Tab};
use moviefav::viewmodel::{ListPhase, MovieDetailViewModel};

#[derive(Debug, Parser)]
#[command(name = "moviefav", version, about = "Browse movies and keep a list of favorites")]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Override the movie list endpoint
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Override the directory holding favorites and theme
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch and print the movie list
    List,
    /// Print saved favorites
    Favorites,
    /// Add a movie to favorites, or remove it if already saved
    Toggle {
        /// Movie id or title
        movie: String,
    },
    /// Print the trailer search URL for a movie
    Trailer {
        /// Movie id or title
        movie: String,
    },
    /// Print the current theme
    Theme {
        /// Switch between light and dark first
        #[arg(long)]
        toggle: bool,
    },
    /// Remove every saved favorite
    ClearFavorites,
}

#[tokio::main]
async fn main() {
    moviefav::logging::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let context = AppContext::from_config(&config)?;

    match cli.command {
        Command::List => {
            let mut navigator = Navigator::new(context);
            let movies = load_movies(&mut navigator).await?;
            print_movies(&movies, navigator.context().favorites.as_ref());
        }
        Command::Favorites => {
            let favorites = context.favorites.favorites();
            if favorites.is_empty() {
                println!("No favorites yet");
            }
            print_movies(&favorites, context.favorites.as_ref());
        }
        Command::Toggle { movie } => {
            let mut navigator = Navigator::new(context);
            let (tab, detail) = open_detail(&mut navigator, &movie).await?;
            detail.toggle_favorite();
            let verb = if detail.is_favorite().get() {
                "Added to"
            } else {
                "Removed from"
            };
            println!("{} favorites: {}", verb, detail.title().get());
            navigator.pop(tab);
        }
        Command::Trailer { movie } => {
            let mut navigator = Navigator::new(context);
            let (tab, detail) = open_detail(&mut navigator, &movie).await?;
            println!("{}", detail.trailer_search_url());
            navigator.pop(tab);
        }
        Command::Theme { toggle } => {
            let theme = if toggle {
                context.theme.toggle()
            } else {
                context.theme.current()
            };
            println!("{}", theme.as_str());
        }
        Command::ClearFavorites => {
            context.favorites.clear();
            println!("Favorites cleared");
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load default config")?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(dir) = &cli.data_dir {
        config.storage.dir = Some(dir.clone());
    }
    Ok(config)
}

async fn load_movies(navigator: &mut Navigator) -> anyhow::Result<Vec<Movie>> {
    navigator.start();
    let Some(ScreenView::MovieList(list)) = navigator.top(Tab::Movies).cloned() else {
        bail!("Movie list screen is not available");
    };

    let state = list.settled().await;
    match state.phase {
        ListPhase::Loaded => Ok(state.movies),
        _ => {
            let message = state
                .error
                .unwrap_or_else(|| "Movie list did not load".to_string());
            Err(anyhow!(message))
        }
    }
}

/// Open the detail screen for `query`.
///
/// Looks in the fetched list first. When the fetch fails, a saved
/// favorite is opened from the favorites tab instead, so favorites stay
/// manageable offline.
async fn open_detail(
    navigator: &mut Navigator,
    query: &str,
) -> anyhow::Result<(Tab, Arc<MovieDetailViewModel>)> {
    let (tab, movie) = match load_movies(navigator).await {
        Ok(movies) => {
            let movie = movies
                .into_iter()
                .find(|movie| movie.matches(query))
                .ok_or_else(|| anyhow!("Movie '{}' not found", query))?;
            (Tab::Movies, movie)
        }
        Err(fetch_error) => {
            let saved = navigator
                .context()
                .favorites
                .favorites()
                .into_iter()
                .find(|movie| movie.matches(query));
            match saved {
                Some(movie) => {
                    tracing::warn!(error = %fetch_error, "Movie list unavailable, using saved favorite");
                    (Tab::Favorites, movie)
                }
                None => return Err(fetch_error),
            }
        }
    };

    navigator
        .select_movie(tab, movie)
        .context("Screen cannot open movie details")?;
    match navigator.top(tab) {
        Some(ScreenView::MovieDetail(detail)) => Ok((tab, detail.clone())),
        _ => bail!("Movie detail screen is not available"),
    }
}

fn print_movies(movies: &[Movie], favorites: &dyn FavoritesRepository) {
    for movie in movies {
        let marker = if favorites.is_favorite(movie) { "*" } else { " " };
        let mut line = format!("{} {} ({})", marker, movie.title, movie.year);
        if let Some(runtime) = movie.runtime.as_deref().filter(|r| !r.is_empty()) {
            line.push_str(&format!(", {} min", runtime));
        }
        if let Some(id) = movie.id.as_deref() {
            line.push_str(&format!(" [{}]", id));
        }
        println!("{}", line);
    }
}
