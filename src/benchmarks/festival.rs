use easybench::{BenchError, Candidate, ComparisonReport};
use std::collections::HashMap;

pub const GENRES: [&str; 5] = ["Rock", "Jazz", "Pop", "Metal", "Electro"];

#[derive(Debug, Clone)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genre: String,
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

/// Synthetic artist catalog, genres cycling through the fixed set.
pub fn generate_artists(count: usize) -> Vec<Artist> {
    (0..count)
        .map(|i| Artist {
            id: format!("artist_{i}"),
            name: format!("Artist_{i}"),
            genre: GENRES[i % GENRES.len()].to_string(),
        })
        .collect()
}

/// One stage per genre.
pub fn generate_stages() -> Vec<Stage> {
    GENRES
        .iter()
        .map(|genre| Stage {
            id: format!("stage_{}", genre.to_lowercase()),
            name: format!("{genre} Stage"),
            genres: vec![genre.to_string()],
        })
        .collect()
}

/// Front-to-back scan for an artist by name.
pub fn find_artist_linear<'a>(artists: &'a [Artist], name: &str) -> Option<&'a str> {
    artists.iter().find(|a| a.name == name).map(|a| a.id.as_str())
}

/// Binary search for an artist. The catalog must be sorted by name.
pub fn find_artist_binary<'a>(artists: &'a [Artist], name: &str) -> Option<&'a str> {
    artists
        .binary_search_by(|a| a.name.as_str().cmp(name))
        .ok()
        .map(|i| artists[i].id.as_str())
}

/// Per-artist scan over the stage list. `None` for a genre no stage hosts.
pub fn stage_assignments_nested(artists: &[Artist], stages: &[Stage]) -> Vec<Option<String>> {
    artists
        .iter()
        .map(|artist| {
            stages
                .iter()
                .find(|stage| stage.genres.iter().any(|g| g == &artist.genre))
                .map(|stage| stage.id.clone())
        })
        .collect()
}

/// Genre-to-stage table built once, then one lookup per artist.
pub fn stage_assignments_lookup(artists: &[Artist], stages: &[Stage]) -> Vec<Option<String>> {
    let genre_to_stage: HashMap<&str, &str> = stages
        .iter()
        .flat_map(|stage| stage.genres.iter().map(move |g| (g.as_str(), stage.id.as_str())))
        .collect();
    artists
        .iter()
        .map(|artist| {
            genre_to_stage
                .get(artist.genre.as_str())
                .map(|id| (*id).to_string())
        })
        .collect()
}

pub fn festival_search(iterations: u32) -> Result<ComparisonReport, BenchError> {
    let mut artists = generate_artists(1000);
    // Binary search needs the catalog ordered by name.
    artists.sort_by(|a, b| a.name.cmp(&b.name));
    let args = (artists, "Artist_747".to_string());
    let candidates = vec![
        Candidate::new("find_artist_linear", |(artists, name): &(Vec<Artist>, String)| {
            find_artist_linear(artists, name).is_some()
        }),
        Candidate::new("find_artist_binary", |(artists, name): &(Vec<Artist>, String)| {
            find_artist_binary(artists, name).is_some()
        }),
    ];
    easybench::compare("artist lookup", &candidates, &args, iterations)
}

pub fn festival_stages(iterations: u32) -> Result<ComparisonReport, BenchError> {
    let args = (generate_artists(1000), generate_stages());
    let candidates = vec![
        Candidate::new(
            "stage_assignments_nested",
            |(artists, stages): &(Vec<Artist>, Vec<Stage>)| stage_assignments_nested(artists, stages),
        ),
        Candidate::new(
            "stage_assignments_lookup",
            |(artists, stages): &(Vec<Artist>, Vec<Stage>)| stage_assignments_lookup(artists, stages),
        ),
    ];
    easybench::compare("stage assignment", &candidates, &args, iterations)
}
