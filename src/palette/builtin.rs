//! Palette files seeded into the palettes directory on first run.

/// (palette name, JSON content) pairs written by `Config::ensure_config_exists`.
pub const BUILTIN_PALETTES: [(&str, &str); 3] = [
    ("catppuccin-mocha", CATPPUCCIN_MOCHA),
    ("gruvbox", GRUVBOX),
    ("nord", NORD),
];

const CATPPUCCIN_MOCHA: &str = r##"{
  "base": "#1e1e2e",
  "mantle": "#181825",
  "crust": "#11111b",
  "text": "#cdd6f4",
  "subtext0": "#a6adc8",
  "subtext1": "#bac2de",
  "surface0": "#313244",
  "surface1": "#45475a",
  "surface2": "#585b70",
  "overlay0": "#6c7086",
  "overlay1": "#7f849c",
  "blue": "#89b4fa",
  "lavender": "#b4befe",
  "sapphire": "#74c7ec",
  "sky": "#89dceb",
  "teal": "#94e2d5",
  "green": "#a6e3a1",
  "yellow": "#f9e2af",
  "peach": "#fab387",
  "maroon": "#eba0ac",
  "red": "#f38ba8",
  "mauve": "#cba6f7",
  "pink": "#f5c2e7"
}
"##;

const GRUVBOX: &str = r##"{
  "bg": "#282828",
  "bg0": "#282828",
  "bg1": "#3c3836",
  "bg2": "#504945",
  "bg3": "#665c54",
  "bg4": "#7c6f64",
  "fg": "#ebdbb2",
  "fg1": "#ebdbb2",
  "fg2": "#d5c4a1",
  "gray": "#928374",
  "blue": "#83a598",
  "purple": "#d3869b",
  "aqua": "#8ec07c",
  "green": "#b8bb26",
  "yellow": "#fabd2f",
  "orange": "#fe8019",
  "red": "#fb4934",
  "base": "#282828",
  "text": "#ebdbb2",
  "pink": "#d3869b"
}
"##;

const NORD: &str = r##"{
  "nord0": "#2e3440",
  "nord1": "#3b4252",
  "nord2": "#434c5e",
  "nord3": "#4c566a",
  "nord4": "#d8dee9",
  "nord5": "#e5e9f0",
  "nord6": "#eceff4",
  "nord7": "#8fbcbb",
  "nord8": "#88c0d0",
  "nord9": "#81a1c1",
  "nord10": "#5e81ac",
  "nord11": "#bf616a",
  "nord12": "#d08770",
  "nord13": "#ebcb8b",
  "nord14": "#a3be8c",
  "nord15": "#b48ead",
  "base": "#2e3440",
  "text": "#d8dee9",
  "red": "#bf616a",
  "green": "#a3be8c",
  "yellow": "#ebcb8b",
  "blue": "#5e81ac",
  "pink": "#b48ead"
}
"##;
