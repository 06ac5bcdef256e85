//! Load a slide deck from disk, falling back to the built-in sample.

use std::path::Path;

use anyhow::{bail, Context, Result};

use carousel_core::Deck;

/// Load the deck to show. A JSON file when a path is given, the sample deck
/// otherwise. Empty decks are rejected here, before the controller exists.
pub fn load_deck(path: Option<&Path>) -> Result<Deck> {
    let Some(path) = path else {
        return Ok(Deck::sample());
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck file: {}", path.display()))?;
    let deck: Deck = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse deck JSON: {}", path.display()))?;

    if deck.is_empty() {
        bail!("Deck file has no slides: {}", path.display());
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_falls_back_to_sample() {
        let deck = load_deck(None).unwrap();
        assert_eq!(deck, Deck::sample());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_deck(Some(Path::new("/nonexistent/deck.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read deck file"));
    }

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("carousel_deck_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.json");

        let json = serde_json::to_string(&Deck::sample()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_deck(Some(&path)).unwrap();
        assert_eq!(loaded.len(), 3);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = std::env::temp_dir().join("carousel_deck_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        let err = load_deck(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse deck JSON"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_deck_is_an_error() {
        let dir = std::env::temp_dir().join("carousel_deck_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.json");
        std::fs::write(&path, r#"{"slides":[]}"#).unwrap();

        let err = load_deck(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("no slides"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
