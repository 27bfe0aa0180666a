use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ThemeError;

use super::mapper::RawPalette;

/// Baseline keys every palette must provide, whatever its family.
pub const REQUIRED_COLORS: [&str; 7] = ["base", "text", "red", "green", "yellow", "blue", "pink"];

/// Resolves a palette name to its file path (<palettes>/<name>.json).
/// Names that could escape the palettes directory are rejected.
pub fn palette_path(config: &Config, name: &str) -> Result<PathBuf, ThemeError> {
    if name.is_empty() || name.len() > 64 {
        return Err(ThemeError::InvalidPaletteName(name.to_string()));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ThemeError::InvalidPaletteName(name.to_string()));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(ThemeError::InvalidPaletteName(name.to_string()));
    }
    Ok(config.palettes_dir().join(format!("{}.json", name)))
}

/// Loads one palette from JSON and validates its required keys.
pub fn load_palette(config: &Config, name: &str) -> Result<RawPalette, ThemeError> {
    let path = palette_path(config, name)?;
    if !path.exists() {
        return Err(ThemeError::PaletteNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    let palette: RawPalette =
        serde_json::from_str(&content).map_err(|source| ThemeError::PaletteParse { path, source })?;
    validate_palette(name, &palette)?;
    Ok(palette)
}

/// Checks that the required baseline keys are a subset of the palette.
pub fn validate_palette(name: &str, palette: &RawPalette) -> Result<(), ThemeError> {
    let missing: Vec<String> = REQUIRED_COLORS
        .iter()
        .filter(|key| !palette.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::MissingRequiredColors {
            theme: name.to_string(),
            missing,
        })
    }
}

/// Advisory messages for values that do not look like hex colors.
/// These never fail a palette; the orchestrator prints them in verbose mode.
pub fn format_warnings(name: &str, palette: &RawPalette) -> Vec<String> {
    palette
        .iter()
        .filter(|(_, value)| !value.starts_with('#'))
        .map(|(key, value)| {
            format!("color '{}' in '{}' does not start with '#': {}", key, name, value)
        })
        .collect()
}

/// Sorted stems of the *.json files in the palettes directory.
pub fn discover_palettes(config: &Config) -> Result<Vec<String>, ThemeError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(config.palettes_dir())? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());
        fs::create_dir_all(config.palettes_dir()).unwrap();
        (dir, config)
    }

    fn write_palette(config: &Config, name: &str, json: &str) {
        fs::write(config.palettes_dir().join(format!("{}.json", name)), json).unwrap();
    }

    const VALID: &str = r##"{
        "base": "#1e1e2e", "text": "#cdd6f4", "red": "#f38ba8",
        "green": "#a6e3a1", "yellow": "#f9e2af", "blue": "#89b4fa",
        "pink": "#f5c2e7"
    }"##;

    #[test]
    fn test_load_valid_palette() {
        let (_dir, config) = test_config();
        write_palette(&config, "catppuccin-mocha", VALID);

        let palette = load_palette(&config, "catppuccin-mocha").unwrap();
        assert_eq!(palette.get("base").map(String::as_str), Some("#1e1e2e"));
        assert_eq!(palette.len(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, config) = test_config();
        let err = load_palette(&config, "nope").unwrap_err();
        assert!(matches!(err, ThemeError::PaletteNotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_dir, config) = test_config();
        write_palette(&config, "broken", "{ not json");
        let err = load_palette(&config, "broken").unwrap_err();
        assert!(matches!(err, ThemeError::PaletteParse { .. }));
    }

    #[test]
    fn test_load_non_string_value_is_a_parse_error() {
        let (_dir, config) = test_config();
        write_palette(&config, "typed", r#"{"base": 16}"#);
        let err = load_palette(&config, "typed").unwrap_err();
        assert!(matches!(err, ThemeError::PaletteParse { .. }));
    }

    #[test]
    fn test_validate_missing_required_keys() {
        let (_dir, config) = test_config();
        write_palette(&config, "partial", r##"{"base": "#1e1e2e", "text": "#cdd6f4"}"##);
        let err = load_palette(&config, "partial").unwrap_err();
        match err {
            ThemeError::MissingRequiredColors { theme, missing } => {
                assert_eq!(theme, "partial");
                assert_eq!(missing, vec!["red", "green", "yellow", "blue", "pink"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_palette_path_rejects_traversal() {
        let (_dir, config) = test_config();
        for name in ["../etc/passwd", "a/b", "a\\b", "..", "", "bad\nname"] {
            assert!(
                matches!(
                    palette_path(&config, name),
                    Err(ThemeError::InvalidPaletteName(_))
                ),
                "name {:?} should be rejected",
                name
            );
        }
        let long = "a".repeat(65);
        assert!(palette_path(&config, &long).is_err());
        assert!(palette_path(&config, "catppuccin-mocha").is_ok());
    }

    #[test]
    fn test_format_warnings_flags_non_hex_values() {
        let palette: RawPalette = [
            ("base".to_string(), "#1e1e2e".to_string()),
            ("text".to_string(), "rgb(0,0,0)".to_string()),
        ]
        .into_iter()
        .collect();
        let warnings = format_warnings("odd", &palette);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'text'"));
        assert!(warnings[0].contains("rgb(0,0,0)"));
    }

    #[test]
    fn test_discover_palettes_sorted_json_stems() {
        let (_dir, config) = test_config();
        write_palette(&config, "nord", VALID);
        write_palette(&config, "dracula", VALID);
        write_palette(&config, "gruvbox", VALID);
        fs::write(config.palettes_dir().join("notes.txt"), "x").unwrap();

        let names = discover_palettes(&config).unwrap();
        assert_eq!(names, vec!["dracula", "gruvbox", "nord"]);
    }
}
