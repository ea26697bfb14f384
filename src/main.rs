use clap::Parser;
use dotenv::dotenv;
use genre_tracks::config::{self, Settings};
use genre_tracks::error::Result;
use genre_tracks::file_handler::{FileFormat, FileHandler};
use genre_tracks::genres;
use genre_tracks::recommender::TrackRecommender;
use genre_tracks::spotify_handler::SpotifyClient;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genre-tracks")]
#[command(author, version, about = "Random Spotify tracks for a genre", long_about = None)]
struct Cli {
    /// Genre slug, e.g. `rock` or `hip-hop`
    #[arg(required_unless_present = "list_genres")]
    genre: Option<String>,

    /// Output format: json, csv or table
    #[arg(long, default_value = "json")]
    format: FileFormat,

    /// Also save the output under `data/`
    #[arg(long)]
    save: bool,

    /// Print the known genres and exit
    #[arg(long)]
    list_genres: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,genre_tracks=debug".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_genres {
        for genre in genres::known_genres() {
            println!("{genre}");
        }
        return Ok(());
    }

    config::validate_env_vars()?;
    let settings = Settings::from_env(&config::schema())?;

    let client = SpotifyClient::with_base_urls(
        &settings.client_id,
        &settings.client_secret,
        &settings.api_url,
        &settings.accounts_url,
    );
    let recommender = TrackRecommender::new(client, settings.track_limit, settings.sample_size);

    let genre = cli.genre.unwrap_or_default();
    let tracks = recommender.recommend(&genre).await?;
    tracing::info!(genre = %genre, count = tracks.len(), "recommendations ready");

    FileHandler::write(&tracks, cli.format, io::stdout().lock())?;

    if cli.save {
        let filename = FileHandler::save(&tracks, cli.format, &genre)?;
        tracing::info!(filename = %filename, "saved recommendations");
    }

    Ok(())
}
