use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::color;

const TARGET: &str = "alacritty-theme.toml";

/// Alacritty terminal color scheme (TOML).
pub fn render(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, TARGET, key);
    Ok(format!(
        r#"[colors.primary]
background = '{base}'
foreground = '{text}'

[colors.cursor]
text = '{base}'
cursor = '{pink}'

[colors.selection]
text = '{base}'
background = '{pink}'

[colors.normal]
black = '{surface1}'
red = '{red}'
green = '{green}'
yellow = '{yellow}'
blue = '{blue}'
magenta = '{pink}'
cyan = '{teal}'
white = '{subtext1}'

[colors.bright]
black = '{surface2}'
red = '{red}'
green = '{green}'
yellow = '{yellow}'
blue = '{blue}'
magenta = '{pink}'
cyan = '{teal}'
white = '{subtext0}'
"#,
        base = c("base")?,
        text = c("text")?,
        pink = c("pink")?,
        surface1 = c("surface1")?,
        red = c("red")?,
        green = c("green")?,
        yellow = c("yellow")?,
        blue = c("blue")?,
        teal = c("teal")?,
        subtext1 = c("subtext1")?,
        surface2 = c("surface2")?,
        subtext0 = c("subtext0")?,
    ))
}
