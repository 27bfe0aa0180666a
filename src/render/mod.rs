pub mod alacritty;
pub mod btop;
pub mod cava;
pub mod kitty;
pub mod rofi;
pub mod swaync;
pub mod waybar;

use crate::error::ThemeError;
use crate::palette::ColorMap;

pub type RenderFn = fn(&str, &ColorMap) -> Result<String, ThemeError>;

/// Output file name and renderer for each target application.
pub const TARGETS: [(&str, RenderFn); 8] = [
    ("waybar.css", waybar::render),
    ("swaync.css", swaync::render),
    ("rofi.rasi", rofi::render),
    ("btop.theme", btop::render),
    ("cava", cava::render),
    ("alacritty-theme.toml", alacritty::render),
    ("kitty-theme.conf", kitty::render),
    ("theme-switcher-menu.rasi", rofi::render_menu),
];

/// Looks up one color, naming the output file on failure.
pub(crate) fn color<'a>(
    colors: &'a ColorMap,
    target: &'static str,
    key: &str,
) -> Result<&'a str, ThemeError> {
    colors.get(key).ok_or_else(|| ThemeError::MissingColorKey {
        target,
        key: key.to_string(),
    })
}

/// Capitalizes the first letter of each alphabetic run
/// ("catppuccin-mocha" -> "Catppuccin-Mocha").
pub(crate) fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// The `@define-color` block shared by the GTK CSS targets (waybar, swaync).
pub(crate) fn define_colors(
    target: &'static str,
    colors: &ColorMap,
) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, target, key);
    Ok(format!(
        "@define-color base   {base};
@define-color mantle {mantle};
@define-color crust  {crust};

@define-color text     {text};
@define-color subtext0 {subtext0};
@define-color subtext1 {subtext1};

@define-color surface0 {surface0};
@define-color surface1 {surface1};
@define-color surface2 {surface2};

@define-color overlay0 {overlay0};
@define-color overlay1 {overlay1};

@define-color blue     {blue};
@define-color lavender {lavender};
@define-color sapphire {sapphire};
@define-color sky      {sky};
@define-color teal     {teal};
@define-color green    {green};
@define-color yellow   {yellow};
@define-color peach    {peach};
@define-color maroon   {maroon};
@define-color red      {red};
@define-color mauve    {mauve};
@define-color pink     {pink};
",
        base = c("base")?,
        mantle = c("mantle")?,
        crust = c("crust")?,
        text = c("text")?,
        subtext0 = c("subtext0")?,
        subtext1 = c("subtext1")?,
        surface0 = c("surface0")?,
        surface1 = c("surface1")?,
        surface2 = c("surface2")?,
        overlay0 = c("overlay0")?,
        overlay1 = c("overlay1")?,
        blue = c("blue")?,
        lavender = c("lavender")?,
        sapphire = c("sapphire")?,
        sky = c("sky")?,
        teal = c("teal")?,
        green = c("green")?,
        yellow = c("yellow")?,
        peach = c("peach")?,
        maroon = c("maroon")?,
        red = c("red")?,
        mauve = c("mauve")?,
        pink = c("pink")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{map_colors, RawPalette};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("catppuccin-mocha"), "Catppuccin-Mocha");
        assert_eq!(title_case("nord"), "Nord");
        assert_eq!(title_case("tokyo-night"), "Tokyo-Night");
        assert_eq!(title_case("ROSE-PINE"), "Rose-Pine");
    }

    #[test]
    fn test_every_target_renders_with_a_full_canonical_map() {
        let mapped = map_colors("catppuccin-mocha", &RawPalette::new());
        for (file, render) in TARGETS {
            let out = render("catppuccin-mocha", &mapped)
                .unwrap_or_else(|e| panic!("{} failed: {}", file, e));
            assert!(!out.is_empty(), "{} rendered empty output", file);
            assert!(out.ends_with('\n'), "{} should end with a newline", file);
        }
    }

    #[test]
    fn test_every_target_reports_missing_keys_for_raw_passthrough() {
        // Unknown family: the map carries the raw keys only, so every
        // renderer must fail with a labeled missing-key error.
        let raw: RawPalette = [("primary".to_string(), "#123456".to_string())]
            .into_iter()
            .collect();
        let mapped = map_colors("foo", &raw);
        for (file, render) in TARGETS {
            match render("foo", &mapped) {
                Err(ThemeError::MissingColorKey { target, .. }) => assert_eq!(target, file),
                other => panic!("{}: expected MissingColorKey, got {:?}", file, other),
            }
        }
    }
}
