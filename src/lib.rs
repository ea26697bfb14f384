#[path = "config.rs"]
pub mod config;

#[path = "env_parser.rs"]
pub mod env_parser;

#[path = "error.rs"]
pub mod error;

#[path = "file_handler.rs"]
pub mod file_handler;

#[path = "genres.rs"]
pub mod genres;

#[path = "recommender.rs"]
pub mod recommender;

#[path = "spotify_handler.rs"]
pub mod spotify_handler;

#[path = "types.rs"]
pub mod types;

#[path = "url_builder.rs"]
pub mod url_builder;
