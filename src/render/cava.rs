use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::color;

const TARGET: &str = "cava";

/// Cava audio visualizer config with a six-stop color gradient.
pub fn render(_theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let c = |key: &str| color(colors, TARGET, key);
    let gradient = [c("mauve")?, c("pink")?, c("red")?, c("peach")?, c("yellow")?, c("green")?];

    Ok(format!(
        r#"[general]
framerate = 60
bars = 0
bar_width = 2
bar_spacing = 1

[input]
method = pulse
source = auto

[output]
method = ncurses
channels = stereo
mono_option = average
reverse = 0

[color]
gradient = 1
gradient_count = 6
gradient_color_1 = '{}'
gradient_color_2 = '{}'
gradient_color_3 = '{}'
gradient_color_4 = '{}'
gradient_color_5 = '{}'
gradient_color_6 = '{}'

[smoothing]
monstercat = 1
waves = 0
gravity = 100
ignore = 0
"#,
        gradient[0], gradient[1], gradient[2], gradient[3], gradient[4], gradient[5],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{map_colors, RawPalette};

    #[test]
    fn test_gradient_runs_mauve_to_green() {
        let mapped = map_colors("catppuccin-mocha", &RawPalette::new());
        let config = render("catppuccin-mocha", &mapped).unwrap();

        assert!(config.contains("gradient_color_1 = '#cba6f7'"));
        assert!(config.contains("gradient_color_3 = '#f38ba8'"));
        assert!(config.contains("gradient_color_6 = '#a6e3a1'"));
        assert!(config.contains("[smoothing]"));
    }
}
