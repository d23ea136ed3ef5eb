// SPDX-License-Identifier: MPL-2.0
use card_preview::config::{self, Config};
use card_preview::i18n::fluent::I18n;
use card_preview::media::{self, load_image, SourceSlot};
use card_preview::preview::Preview;
use card_preview::surface::fit::FitMode;
use card_preview::surface::text::TextMetrics;
use card_preview::surface::{self, default_catalog, SurfaceConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut russian = Config::default();
    russian.general.language = Some("ru".to_string());
    config::save_to_path(&russian, &config_path).expect("Failed to write russian config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load russian config");
    let i18n_ru = I18n::new(None, &loaded);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_eq!(i18n_ru.tr("surface-repost"), "Репост");
}

#[test]
fn configured_catalog_drives_the_preview() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[text]
line_height = 10.0

[[surfaces]]
id = "story"
width = 300.0
min_height = 300.0
max_height = 500.0
text_lines = 2
"#,
    )
    .expect("write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (surfaces, rejected) = surface::resolve_catalog(config.surfaces.clone());
    assert!(!rejected);

    let mut preview = Preview::new(surfaces, config.text.metrics());
    preview.set_text("one\ntwo\nthree");

    let views = preview.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, "story");
    assert_eq!(views[0].label_key, "surface-story");
    assert!(views[0].text.truncated);
}

#[test]
fn invalid_catalog_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[[surfaces]]
id = "a"
width = 300.0
min_height = 100.0
max_height = 200.0
text_lines = 2

[[surfaces]]
id = "a"
width = 400.0
min_height = 100.0
max_height = 200.0
text_lines = 2
"#,
    )
    .expect("write config");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let (surfaces, rejected) = surface::resolve_catalog(config.surfaces);

    assert!(rejected);
    assert_eq!(surfaces, default_catalog());
}

#[test]
fn unreadable_config_returns_defaults_and_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[tokio::test]
async fn decoded_png_fits_every_surface() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("landscape.png");
    image_rs::RgbaImage::new(300, 200)
        .save(&path)
        .expect("write png");

    let mut slot = SourceSlot::new();
    let handle = slot.acquire(path);
    let decoded = media::decode(handle).await;
    assert!(slot.is_active(decoded.source));

    let image = decoded.result.expect("png decodes");
    assert_eq!((image.width, image.height), (300, 200));

    let mut preview = Preview::new(default_catalog(), TextMetrics::default());
    preview.set_image(image).expect("image fits");

    for (view, surface) in preview.views().iter().zip(default_catalog()) {
        let media = view.media.as_ref().expect("media");
        let desired = surface.width / 1.5;
        if desired < surface.min_height || desired > surface.max_height {
            assert_eq!(media.fit, FitMode::Cover, "{}", surface.id);
        } else {
            assert_eq!(media.fit, FitMode::Contain, "{}", surface.id);
            assert_eq!(media.height, desired.round(), "{}", surface.id);
        }
    }
}

#[test]
fn garbage_file_is_a_decode_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("not-an-image.png");
    fs::write(&path, b"definitely not a png").expect("write");

    let err = load_image(&path).expect_err("garbage must not decode");
    assert_eq!(err.i18n_key(), "error-load-decode");
}

#[test]
fn surface_configs_round_trip_through_toml() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let config = Config {
        surfaces: Some(vec![SurfaceConfig::new("wide", 800.0, 200.0, 400.0, 2)]),
        ..Config::default()
    };

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);
}
