use genre_tracks::config::{self, Settings};
use genre_tracks::recommender::TrackRecommender;
use genre_tracks::spotify_handler::SpotifyClient;

/// Example demonstrating environment variable validation
///
/// Missing credentials are reported together with a clear message before any
/// request is made.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    println!("Validating required environment variables...");
    match config::validate_env_vars() {
        Ok(()) => println!("✓ All required environment variables are set"),
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }

    let settings = match Settings::from_env(&config::schema()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("✗ Invalid settings: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "✓ Settings loaded (search limit {}, sample size {})",
        settings.track_limit, settings.sample_size
    );

    let client = SpotifyClient::with_base_urls(
        &settings.client_id,
        &settings.client_secret,
        &settings.api_url,
        &settings.accounts_url,
    );
    let recommender = TrackRecommender::new(client, settings.track_limit, settings.sample_size);

    let genre = std::env::args().nth(1).unwrap_or_else(|| "rock".to_string());
    match recommender.recommend(&genre).await {
        Ok(tracks) => {
            println!("\nFetched {} {genre} tracks:", tracks.len());
            for (i, track) in tracks.iter().enumerate() {
                println!(
                    "  {}. {} - {}",
                    i + 1,
                    track.artist.as_deref().unwrap_or("unknown artist"),
                    track.track
                );
            }
        }
        Err(e) => {
            eprintln!("Error fetching tracks: {e}");
        }
    }
}
