//! Genre slugs and the artists searched for each one.

/// Representative artists per genre. Every list is non-empty.
pub const GENRES: &[(&str, &[&str])] = &[
    (
        "pop",
        &["Taylor Swift", "Dua Lipa", "Harry Styles", "Ariana Grande", "Ed Sheeran"],
    ),
    (
        "rock",
        &["Foo Fighters", "Arctic Monkeys", "Queen", "The Rolling Stones", "Muse"],
    ),
    (
        "hip-hop",
        &["Kendrick Lamar", "Drake", "J. Cole", "Travis Scott", "Nas"],
    ),
    ("jazz", &["Miles Davis", "John Coltrane", "Norah Jones", "Chet Baker"]),
    (
        "electronic",
        &["Daft Punk", "Disclosure", "Aphex Twin", "Calvin Harris", "Justice"],
    ),
    ("classical", &["Ludovico Einaudi", "Max Richter", "Hania Rani"]),
    ("metal", &["Metallica", "Gojira", "Iron Maiden", "Slipknot"]),
    ("country", &["Dolly Parton", "Chris Stapleton", "Kacey Musgraves"]),
    ("r-n-b", &["SZA", "Frank Ocean", "The Weeknd", "H.E.R."]),
    ("latin", &["Bad Bunny", "Rosalía", "J Balvin", "Karol G"]),
];

/// Artists for a genre slug, matched exactly.
#[must_use]
pub fn artists_for(genre: &str) -> Option<&'static [&'static str]> {
    GENRES
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, artists)| *artists)
}

#[must_use]
pub fn known_genres() -> Vec<&'static str> {
    GENRES.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_genre_has_artists() {
        for (genre, artists) in GENRES {
            assert!(!artists.is_empty(), "{genre} has no artists");
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!(artists_for("rock").is_some());
        assert!(artists_for("Rock").is_none());
        assert!(artists_for("polka").is_none());
    }
}
