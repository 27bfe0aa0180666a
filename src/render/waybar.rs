use crate::error::ThemeError;
use crate::palette::ColorMap;

use super::{define_colors, title_case};

const TARGET: &str = "waybar.css";

// Everything below the color block only references the @define-color names,
// so it is emitted as-is.
const RULES: &str = r#"* {
  border: none;
  font-family: "Ubuntu Nerd Font Propo";
  font-size: 15px;
  font-weight: 600;
  min-height: 0;
  margin: 0;
  padding: 0;
}

window#waybar {
  background: transparent;
  color: @text;
}

tooltip {
  background: @base;
  border: 1px solid @surface1;
  border-radius: 8px;
  padding: 6px;
}

tooltip label {
  color: @text;
}

#workspaces {
  background: alpha(@base, 0.8);
  border-radius: 12px;
  padding: 3px 9px;
  margin: 4px 7px;
}

#workspaces button {
  padding: 3px 11px;
  margin: 0 2px;
  border: 1px solid @surface1;
  background: alpha(@surface0, 0.8);
  color: @text;
  border-radius: 8px;
  transition: all 200ms ease;
}

#workspaces button.active {
  border-radius: 100px;
  border: 1px solid @mauve;
  color: @crust;
  background: @mauve;
  min-width: 47px;
  font-size: 15px;
}

#clock {
  background: @blue;
  color: @crust;
  font-size: 17px;
  font-weight: 600;
  padding: 6px 18px;
  margin: 4px 8px;
  border-radius: 14px;
}

#custom-arch {
  font-size: 18px;
  padding: 6px 14px;
  margin-left: 12px;
  margin-right: 8px;
  min-height: 32px;
  color: @mauve;
  background: transparent;
  border-radius: 12px;
  transition: all 200ms ease;
}

#custom-arch:hover {
  background: alpha(@mauve, 0.2);
  color: @mauve;
}

#cpu {
  background: @green;
  color: @crust;
  padding: 3px 11px;
  margin: 4px 3px;
  border-radius: 8px;
}

#memory {
  background: @yellow;
  color: @crust;
  padding: 3px 11px;
  margin: 4px 3px;
  border-radius: 8px;
}

#pulseaudio {
  background: @mauve;
  color: @crust;
  padding: 3px 11px;
  margin: 4px 3px;
  border-radius: 8px;
}

#pulseaudio.muted {
  background: @surface1;
  color: @overlay1;
}

#network {
  background: @sky;
  color: @crust;
  padding: 3px 11px;
  margin: 4px 6px;
  border-radius: 8px;
}

#network.disconnected {
  background: @surface1;
  color: @red;
}

#custom-notification {
  background: @pink;
  color: @crust;
  margin-right: 6px;
  padding: 3px 11px;
  margin: 4px 12px 4px 3px;
  border-radius: 8px;
  font-size: 16px;
}

#custom-notification.notification {
  color: #f38ba8;
  text-shadow: 0 0 6px rgba(243, 139, 168, 0.6);
}

#custom-notification.dnd-notification {
  background: @maroon;
  color: @crust;
}

#mode {
  background: @red;
  color: @crust;
  padding: 4px 12px;
  margin: 4px 6px;
  border-radius: 8px;
  font-weight: 700;
}
"#;

/// Waybar status bar stylesheet.
pub fn render(theme_name: &str, colors: &ColorMap) -> Result<String, ThemeError> {
    let defines = define_colors(TARGET, colors)?;
    Ok(format!(
        "/* {} */\n{}\n{}",
        title_case(theme_name),
        defines,
        RULES
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{map_colors, RawPalette};

    #[test]
    fn test_render_catppuccin_defaults() {
        let mapped = map_colors("catppuccin-mocha", &RawPalette::new());
        let css = render("catppuccin-mocha", &mapped).unwrap();

        assert!(css.starts_with("/* Catppuccin-Mocha */\n"));
        assert!(css.contains("@define-color base   #1e1e2e;"));
        assert!(css.contains("@define-color pink     #f5c2e7;"));
        assert!(css.contains("window#waybar {"));
        assert!(css.contains("#custom-notification.notification"));
    }

    #[test]
    fn test_render_uses_palette_values() {
        let raw: RawPalette = [("base".to_string(), "#000001".to_string())]
            .into_iter()
            .collect();
        let mapped = map_colors("catppuccin-mocha", &raw);
        let css = render("catppuccin-mocha", &mapped).unwrap();
        assert!(css.contains("@define-color base   #000001;"));
    }
}
