// SPDX-License-Identifier: MPL-2.0
use layer_slider::config::{self, Config};
use layer_slider::deck::{self, Deck};
use layer_slider::i18n::I18n;
use layer_slider::slider::LayerSlider;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("window-title"), "Layer Slider");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_persisted_preferences_drive_slider_behavior() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let stored = Config {
        autoplay: Some(true),
        autoplay_delay_ms: Some(2000),
        animation_duration_ms: Some(500),
        pause_on_hover: Some(false),
        ..Config::default()
    };
    config::save_to_path(&stored, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let options = loaded.slider_options();
    assert!(!options.pause_on_hover);

    // The slider honors the stored 2 s delay and 500 ms transition.
    let t0 = Instant::now();
    let mut slider = LayerSlider::new(3, options, t0);

    slider.tick(t0 + Duration::from_millis(1999));
    assert_eq!(slider.current_slide(), Some(0));

    slider.tick(t0 + Duration::from_millis(2000));
    assert_eq!(slider.current_slide(), Some(1));
    assert!(slider.is_transitioning());

    slider.tick(t0 + Duration::from_millis(2500));
    assert!(!slider.is_transitioning());
}

#[test]
fn test_deck_file_feeds_the_slider() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let deck_path = dir.path().join("deck.toml");
    std::fs::write(
        &deck_path,
        r#"
[[slides]]
title = "One"

[[slides]]
title = "Two"

[[slides]]
title = "Three"

[[slides]]
title = "Four"

[[slides]]
title = "Five"
"#,
    )
    .expect("Failed to write deck file");

    let deck = deck::load_from_path(&deck_path).expect("Failed to load deck");
    assert_eq!(deck.len(), 5);

    // N = 5, currentIndex = 4, next() wraps to 0.
    let t0 = Instant::now();
    let options = Config::default().slider_options();
    let animation = options.animation_duration;
    let mut slider = LayerSlider::new(deck.len(), options, t0);

    let mut now = t0;
    for _ in 0..4 {
        slider.next(now);
        now += animation;
        slider.tick(now);
    }
    assert_eq!(slider.current_slide(), Some(4));

    slider.next(now);
    assert_eq!(slider.current_slide(), Some(0));
}

#[test]
fn test_empty_deck_yields_inert_slider() {
    let options = Config::default().slider_options();
    let deck = Deck::default();
    let t0 = Instant::now();
    let mut slider = LayerSlider::new(deck.len(), options, t0);

    slider.next(t0);
    slider.tick(t0 + Duration::from_millis(60_000));

    assert_eq!(slider.current_slide(), None);
    assert!(!slider.needs_tick());
}
