use crate::env_parser::{self, Cast, ConfigurationError, Env, NotSet, Spec};
use crate::error::{Result, TrackError};
use crate::recommender::DEFAULT_SAMPLE_SIZE;
use crate::spotify_handler::{ACCOUNTS_URL, API_MAX_LIMIT, API_URL};

/// Required environment variables for the application
const REQUIRED_ENV_VARS: &[&str] = &["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET"];

/// Application settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub track_limit: u32,
    pub sample_size: usize,
    pub api_url: String,
    pub accounts_url: String,
}

/// Schema for every variable `Settings` reads.
#[must_use]
pub fn schema() -> Env {
    Env::new([
        ("SPOTIFY_CLIENT_ID", Spec::from(Cast::Str)),
        ("SPOTIFY_CLIENT_SECRET", Spec::from(Cast::Str)),
        (
            "SPOTIFY_TRACK_LIMIT",
            Spec::with_default(Cast::Int, i64::from(API_MAX_LIMIT)),
        ),
        (
            "TRACK_SAMPLE_SIZE",
            Spec::with_default(Cast::Int, DEFAULT_SAMPLE_SIZE as i64),
        ),
        ("SPOTIFY_API_URL", Spec::with_default(Cast::Str, API_URL)),
        (
            "SPOTIFY_ACCOUNTS_URL",
            Spec::with_default(Cast::Str, ACCOUNTS_URL),
        ),
    ])
}

impl Settings {
    /// Read settings through `env`, usually the accessor built by [`schema`].
    ///
    /// # Errors
    /// * `TrackError::Config` - If a required variable is missing or a value fails to cast.
    pub fn from_env(env: &Env) -> Result<Self> {
        let client_id = string(env, "SPOTIFY_CLIENT_ID")?;
        let client_secret = string(env, "SPOTIFY_CLIENT_SECRET")?;
        let track_limit = positive(env, "SPOTIFY_TRACK_LIMIT")?;
        let sample_size = positive(env, "TRACK_SAMPLE_SIZE")?;
        let api_url = string(env, "SPOTIFY_API_URL")?;
        let accounts_url = string(env, "SPOTIFY_ACCOUNTS_URL")?;

        Ok(Settings {
            client_id,
            client_secret,
            track_limit: u32::try_from(track_limit).unwrap_or(API_MAX_LIMIT),
            sample_size: usize::try_from(sample_size).unwrap_or(DEFAULT_SAMPLE_SIZE),
            api_url,
            accounts_url,
        })
    }
}

// Variables without a schema default are required.
fn string(env: &Env, var: &str) -> Result<String> {
    let value = env.get(var, env.schema_default(var), None)?;
    value
        .into_string()
        .ok_or_else(|| TrackError::Other(format!("{var} is not a string")))
}

fn positive(env: &Env, var: &str) -> Result<i64> {
    match env.get(var, env.schema_default(var), None)?.as_int() {
        Some(n) if n > 0 => Ok(n),
        _ => Err(TrackError::Config(ConfigurationError::InvalidValue(format!(
            "{var} must be a positive integer"
        )))),
    }
}

/// Validates that all required environment variables are set
///
/// # Errors
/// Returns `TrackError::MissingEnvVar` listing every missing variable
pub fn validate_env_vars() -> Result<()> {
    let missing_vars: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var_name| env_parser::env().str(var_name, NotSet).is_err())
        .collect();

    if !missing_vars.is_empty() {
        return Err(TrackError::MissingEnvVar(missing_vars.join(", ")));
    }

    Ok(())
}

/// Gets a required environment variable
///
/// # Arguments
/// * `var_name` - The name of the environment variable to retrieve
///
/// # Errors
/// Returns `TrackError::MissingEnvVar` if the environment variable is not set
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env_parser::env()
        .str(var_name, NotSet)
        .ok()
        .and_then(|value| value.into_string())
        .ok_or_else(|| TrackError::MissingEnvVar(var_name.to_string()))
}
