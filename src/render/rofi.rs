use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::color;

const TARGET: &str = "rofi.rasi";
const MENU_TARGET: &str = "theme-switcher-menu.rasi";

const LAYOUT: &str = r#"window {
    transparency: "real";
    location: center;
    anchor: center;
    fullscreen: false;
    width: 640px;
    padding: 0px;
    border: 0px solid;
    border-radius: 18px;
    border-color: @selected;
    background-color: @background;
}

mainbox {
    enabled: true;
    spacing: 12px;
    margin: 0px;
    padding: 20px;
    border: 0px solid;
    border-radius: 0px;
    background-color: transparent;
    children: [ "inputbar", "listview" ];
}

inputbar {
    enabled: true;
    spacing: 15px;
    margin: 0px;
    padding: 0px;
    border: 0px;
    border-radius: 0px;
    background-color: transparent;
    text-color: @foreground;
    children: [ "textbox-prompt-colon", "prompt" ];
}

textbox-prompt-colon {
    enabled: true;
    expand: false;
    str: "";
    padding: 12px 15px;
    border-radius: 100%;
    background-color: @urgent;
    text-color: @background;
    font: "feather bold 20";
    vertical-align: 0.5;
    horizontal-align: 0.5;
}

prompt {
    enabled: true;
    padding: 12px 20px;
    border-radius: 100%;
    background-color: @active;
    text-color: @background;
    font: "JetBrainsMono Nerd Font 12";
    vertical-align: 0.5;
    horizontal-align: 0.5;
}

listview {
    enabled: true;
    columns: 5;
    lines: 1;
    cycle: true;
    dynamic: true;
    scrollbar: false;
    layout: vertical;
    reverse: false;
    fixed-height: true;
    fixed-columns: true;
    spacing: 12px;
    margin: 0px 0px 0px -10px;
    padding: 0px;
    border: 0px solid;
    border-radius: 0px;
    background-color: transparent;
    text-color: @foreground;
    cursor: "default";
}

element {
    enabled: true;
    margin: 0px;
    padding: 0px;
    border-radius: 100%;
    background-color: @background-alt;
    text-color: @foreground;
    cursor: pointer;
    orientation: vertical;
}

element-text {
    font: "feather bold 28";
    background-color: transparent;
    text-color: inherit;
    cursor: inherit;
    horizontal-align: 0.5;
    vertical-align: 0.5;
    padding: 45px;
}

element selected.normal {
    background-color: @accent;
    text-color: @background;
}
"#;

const MENU_LAYOUT: &str = r#"window {
    transparency:                "real";
    location:                    center;
    anchor:                      center;
    fullscreen:                  false;
    width:                       450px;
    x-offset:                    0px;
    y-offset:                    0px;

    enabled:                     true;
    margin:                      0px;
    padding:                     0px;
    border:                      0px solid;
    border-radius:               12px;
    border-color:                @selected;
    background-color:            @background;
    cursor:                      "default";
}

mainbox {
    enabled:                     true;
    spacing:                     0px;
    margin:                      0px;
    padding:                     0px;
    border:                      0px solid;
    border-radius:               0px 0px 0px 0px;
    border-color:                @selected;
    background-color:            transparent;
    children:                    [ "inputbar", "listview" ];
}

inputbar {
    enabled:                     true;
    spacing:                     10px;
    margin:                      0px;
    padding:                     15px;
    border:                      0px solid;
    border-radius:               12px 12px 0px 0px;
    border-color:                @selected;
    background-color:            @selected;
    text-color:                  @background;
    children:                    [ "prompt", "entry" ];
}

prompt {
    enabled:                     true;
    background-color:            inherit;
    text-color:                  inherit;
}

entry {
    enabled:                     true;
    background-color:            inherit;
    text-color:                  inherit;
    cursor:                      text;
    placeholder:                 "Search themes...";
    placeholder-color:           inherit;
}

listview {
    enabled:                     true;
    columns:                     1;
    lines:                       7;
    cycle:                       true;
    dynamic:                     true;
    scrollbar:                   false;
    layout:                      vertical;
    reverse:                     false;
    fixed-height:                true;
    fixed-columns:               true;

    spacing:                     5px;
    margin:                      0px;
    padding:                     10px;
    border:                      0px solid;
    border-radius:               0px;
    border-color:                @selected;
    background-color:            transparent;
    text-color:                  @foreground;
    cursor:                      "default";
}

element {
    enabled:                     true;
    spacing:                     10px;
    margin:                      0px;
    padding:                     10px;
    border:                      0px solid;
    border-radius:               8px;
    border-color:                @selected;
    background-color:            transparent;
    text-color:                  @foreground;
    cursor:                      pointer;
}

element normal.normal {
    background-color:            @background;
    text-color:                  @foreground;
}

element selected.normal {
    background-color:            @selected;
    text-color:                  @background;
}

element-text {
    background-color:            transparent;
    text-color:                  inherit;
    highlight:                   inherit;
    cursor:                      inherit;
    vertical-align:              0.5;
    horizontal-align:            0.0;
}
"#;

/// Rofi launcher theme.
pub fn render(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, TARGET, key);
    let variables = format!(
        r#"configuration {{
    show-icons: false;
}}

* {{
    bg:     {bg};
    bg-alt: {bg_alt};
    fg:     {fg};
    accent: {accent};
    green:  {green};
    red:    {red};
    selected: {selected};
    background: {background};
    background-alt: {background_alt};
    foreground: {foreground};
    urgent: {urgent};
    active: {active};

    font: "JetBrainsMono Nerd Font 12";
}}

"#,
        bg = c("base")?,
        bg_alt = c("mantle")?,
        fg = c("text")?,
        accent = c("mauve")?,
        green = c("green")?,
        red = c("red")?,
        selected = c("mauve")?,
        background = c("base")?,
        background_alt = c("surface0")?,
        foreground = c("text")?,
        urgent = c("red")?,
        active = c("green")?,
    );
    Ok(variables + LAYOUT)
}

/// Rofi theme for the theme-switcher menu itself.
pub fn render_menu(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, MENU_TARGET, key);
    let variables = format!(
        r#"configuration {{
	modi:                       "drun";
    show-icons:                 false;
    display-drun:               "󰏘";
	drun-display-format:        "{{name}}";
}}

* {{
    bg:     {bg};
    bg-alt: {bg_alt};
    fg:     {fg};
    accent: {accent};
    surface: {surface};

    background: {background};
    background-alt: {background_alt};
    foreground: {foreground};
    selected: {selected};

    font: "Ubuntu Nerd Font 13";
}}

"#,
        bg = c("base")?,
        bg_alt = c("mantle")?,
        fg = c("text")?,
        accent = c("mauve")?,
        surface = c("surface0")?,
        background = c("base")?,
        background_alt = c("surface0")?,
        foreground = c("text")?,
        selected = c("mauve")?,
    );
    Ok(variables + MENU_LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{map_colors, RawPalette};

    #[test]
    fn test_render_launcher_theme() {
        let mapped = map_colors("catppuccin-mocha", &RawPalette::new());
        let rasi = render("catppuccin-mocha", &mapped).unwrap();

        assert!(rasi.starts_with("configuration {\n"));
        assert!(rasi.contains("bg:     #1e1e2e;"));
        assert!(rasi.contains("accent: #cba6f7;"));
        assert!(rasi.contains("background-alt: #313244;"));
        assert!(rasi.contains("element selected.normal {"));
    }

    #[test]
    fn test_render_menu_keeps_rasi_placeholders() {
        let mapped = map_colors("catppuccin-mocha", &RawPalette::new());
        let rasi = render_menu("catppuccin-mocha", &mapped).unwrap();

        // {name} is a rofi placeholder, not one of ours.
        assert!(rasi.contains("drun-display-format:        \"{name}\";"));
        assert!(rasi.contains("placeholder:                 \"Search themes...\";"));
        assert!(rasi.contains("selected: #cba6f7;"));
    }

    #[test]
    fn test_missing_key_is_reported_per_target() {
        let mapped = map_colors("foo", &RawPalette::new());
        match render("foo", &mapped) {
            Err(ThemeError::MissingColorKey { target, .. }) => assert_eq!(target, "rofi.rasi"),
            other => panic!("expected MissingColorKey, got {:?}", other),
        }
        match render_menu("foo", &mapped) {
            Err(ThemeError::MissingColorKey { target, .. }) => {
                assert_eq!(target, "theme-switcher-menu.rasi")
            }
            other => panic!("expected MissingColorKey, got {:?}", other),
        }
    }
}
