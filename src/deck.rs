// SPDX-License-Identifier: MPL-2.0
//! Slide deck loading: the content shown by the hero slider.
//!
//! A deck is a TOML file listing slides in display order. The deck fixes
//! the slide count for the lifetime of the slider; editing the file
//! requires a restart. An empty deck is valid and renders an inert hero.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One unit of content in the slider's circular sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Small lead-in line above the title.
    #[serde(default)]
    pub kicker: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Background tint as a `#rrggbb` hex color.
    #[serde(default)]
    pub background: Option<String>,
    /// Optional background image path, resolved relative to the process
    /// working directory.
    #[serde(default)]
    pub image: Option<PathBuf>,
}

impl Slide {
    /// Parses the background tint, ignoring malformed values.
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(self.background.as_deref()?)
    }
}

/// Ordered, immutable-length sequence of slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The deck shown when no deck file is supplied on the command line.
    pub fn builtin() -> Self {
        let slide = |kicker: &str, title: &str, subtitle: &str, background: &str| Slide {
            kicker: Some(kicker.to_string()),
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            background: Some(background.to_string()),
            image: None,
        };

        Self {
            slides: vec![
                slide(
                    "Since 1994",
                    "Defending Press Freedom Worldwide",
                    "Supporting journalists and independent media in 40 countries.",
                    "#1b2a4a",
                ),
                slide(
                    "Campaigns",
                    "Voices That Cannot Be Silenced",
                    "Join the campaign for the release of imprisoned reporters.",
                    "#40320f",
                ),
                slide(
                    "Get Involved",
                    "Your Support Keeps Stories Alive",
                    "Monthly donors fund legal aid, safe houses, and training.",
                    "#123a2e",
                ),
            ],
        }
    }
}

/// Loads a deck from a TOML file. Parse failures are reported as
/// [`Error::Deck`] so the caller can distinguish them from settings
/// problems.
pub fn load_from_path(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Deck(e.to_string()))
}

fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn builtin_deck_is_not_empty() {
        let deck = Deck::builtin();
        assert!(!deck.is_empty());
        assert!(deck.slides.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn load_parses_slides_in_order() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.toml");
        let mut file = fs::File::create(&path).expect("failed to create deck file");
        write!(
            file,
            r##"
[[slides]]
title = "First"
background = "#102030"

[[slides]]
kicker = "Second kicker"
title = "Second"
subtitle = "Sub"
"##
        )
        .expect("failed to write deck file");

        let deck = load_from_path(&path).expect("failed to load deck");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0].title, "First");
        assert_eq!(deck.slides[1].kicker.as_deref(), Some("Second kicker"));
        assert_eq!(deck.slides[0].background_rgb(), Some((0x10, 0x20, 0x30)));
    }

    #[test]
    fn load_missing_file_reports_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_malformed_toml_reports_deck_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.toml");
        fs::write(&path, "[[slides]]\nkicker = 3\n").expect("failed to write deck file");

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn empty_deck_file_is_valid() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deck.toml");
        fs::write(&path, "").expect("failed to write deck file");

        let deck = load_from_path(&path).expect("empty deck should load");
        assert!(deck.is_empty());
    }

    #[test]
    fn hex_colors_parse_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#abc"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn malformed_background_is_ignored() {
        let slide = Slide {
            kicker: None,
            title: "t".into(),
            subtitle: None,
            background: Some("nonsense".into()),
            image: None,
        };
        assert_eq!(slide.background_rgb(), None);
    }
}
