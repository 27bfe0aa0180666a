use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::color;

const TARGET: &str = "kitty-theme.conf";

/// Kitty terminal color scheme.
pub fn render(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, TARGET, key);
    Ok(format!(
        r#"foreground {text}
background {base}
selection_foreground {base}
selection_background {pink}
cursor {pink}
cursor_text_color {base}
url_color {pink}
active_border_color {lavender}
inactive_border_color {overlay0}
bell_border_color {yellow}
active_tab_foreground {crust}
active_tab_background {mauve}
inactive_tab_foreground {text}
inactive_tab_background {mantle}
tab_bar_background {crust}
color0 {surface1}
color8 {surface2}
color1 {red}
color9 {red}
color2  {green}
color10 {green}
color3  {yellow}
color11 {yellow}
color4  {blue}
color12 {blue}
color5  {pink}
color13 {pink}
color6  {teal}
color14 {teal}
color7  {subtext1}
color15 {subtext0}
"#,
        text = c("text")?,
        base = c("base")?,
        pink = c("pink")?,
        lavender = c("lavender")?,
        overlay0 = c("overlay0")?,
        yellow = c("yellow")?,
        crust = c("crust")?,
        mauve = c("mauve")?,
        mantle = c("mantle")?,
        surface1 = c("surface1")?,
        surface2 = c("surface2")?,
        red = c("red")?,
        green = c("green")?,
        blue = c("blue")?,
        teal = c("teal")?,
        subtext1 = c("subtext1")?,
        subtext0 = c("subtext0")?,
    ))
}
