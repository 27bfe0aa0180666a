use std::collections::BTreeMap;

/// Raw palette as loaded from JSON: color name -> hex string, in the
/// theme author's own naming convention.
pub type RawPalette = BTreeMap<String, String>;

/// The canonical color roles every renderer consumes.
pub const CANONICAL_ROLES: [&str; 23] = [
    "base", "mantle", "crust", "text", "subtext0", "subtext1", "surface0", "surface1", "surface2",
    "overlay0", "overlay1", "blue", "lavender", "sapphire", "sky", "teal", "green", "yellow",
    "peach", "maroon", "red", "mauve", "pink",
];

/// One alias-table row: (canonical role, source key, fallback hex).
type Alias = (&'static str, &'static str, &'static str);

const CATPPUCCIN: [Alias; 23] = [
    ("base", "base", "#1e1e2e"),
    ("mantle", "mantle", "#181825"),
    ("crust", "crust", "#11111b"),
    ("text", "text", "#cdd6f4"),
    ("subtext0", "subtext0", "#a6adc8"),
    ("subtext1", "subtext1", "#bac2de"),
    ("surface0", "surface0", "#313244"),
    ("surface1", "surface1", "#45475a"),
    ("surface2", "surface2", "#585b70"),
    ("overlay0", "overlay0", "#6c7086"),
    ("overlay1", "overlay1", "#7f849c"),
    ("blue", "blue", "#89b4fa"),
    ("lavender", "lavender", "#b4befe"),
    ("sapphire", "sapphire", "#74c7ec"),
    ("sky", "sky", "#89dceb"),
    ("teal", "teal", "#94e2d5"),
    ("green", "green", "#a6e3a1"),
    ("yellow", "yellow", "#f9e2af"),
    ("peach", "peach", "#fab387"),
    ("maroon", "maroon", "#eba0ac"),
    ("red", "red", "#f38ba8"),
    ("mauve", "mauve", "#cba6f7"),
    ("pink", "pink", "#f5c2e7"),
];

const ROSE_PINE: [Alias; 23] = [
    ("base", "base", "#191724"),
    ("mantle", "surface", "#1f1d2e"),
    ("crust", "base", "#191724"),
    ("text", "text", "#e0def4"),
    ("subtext0", "subtle", "#908caa"),
    ("subtext1", "subtle", "#908caa"),
    ("surface0", "surface", "#1f1d2e"),
    ("surface1", "overlay", "#26233a"),
    ("surface2", "highlight_med", "#403d52"),
    ("overlay0", "muted", "#6e6a86"),
    ("overlay1", "subtle", "#908caa"),
    ("blue", "pine", "#31748f"),
    ("lavender", "iris", "#c4a7e7"),
    ("sapphire", "foam", "#9ccfd8"),
    ("sky", "foam", "#9ccfd8"),
    ("teal", "foam", "#9ccfd8"),
    ("green", "foam", "#9ccfd8"),
    ("yellow", "gold", "#f6c177"),
    ("peach", "gold", "#f6c177"),
    ("maroon", "love", "#eb6f92"),
    ("red", "love", "#eb6f92"),
    ("mauve", "iris", "#c4a7e7"),
    ("pink", "rose", "#ebbcba"),
];

const NORD: [Alias; 23] = [
    ("base", "nord0", "#2e3440"),
    ("mantle", "nord1", "#3b4252"),
    ("crust", "nord0", "#2e3440"),
    ("text", "nord4", "#d8dee9"),
    ("subtext0", "nord4", "#d8dee9"),
    ("subtext1", "nord5", "#e5e9f0"),
    ("surface0", "nord1", "#3b4252"),
    ("surface1", "nord2", "#434c5e"),
    ("surface2", "nord3", "#4c566a"),
    ("overlay0", "nord3", "#4c566a"),
    ("overlay1", "nord4", "#d8dee9"),
    ("blue", "nord10", "#5e81ac"),
    ("lavender", "nord15", "#b48ead"),
    ("sapphire", "nord8", "#88c0d0"),
    ("sky", "nord8", "#88c0d0"),
    ("teal", "nord7", "#8fbcbb"),
    ("green", "nord14", "#a3be8c"),
    ("yellow", "nord13", "#ebcb8b"),
    ("peach", "nord12", "#d08770"),
    ("maroon", "nord11", "#bf616a"),
    ("red", "nord11", "#bf616a"),
    ("mauve", "nord15", "#b48ead"),
    ("pink", "nord15", "#b48ead"),
];

const GRUVBOX: [Alias; 23] = [
    ("base", "bg", "#282828"),
    ("mantle", "bg0", "#282828"),
    ("crust", "bg", "#282828"),
    ("text", "fg", "#ebdbb2"),
    ("subtext0", "fg2", "#d5c4a1"),
    ("subtext1", "fg1", "#ebdbb2"),
    ("surface0", "bg1", "#3c3836"),
    ("surface1", "bg2", "#504945"),
    ("surface2", "bg3", "#665c54"),
    ("overlay0", "bg4", "#7c6f64"),
    ("overlay1", "gray", "#928374"),
    ("blue", "blue", "#83a598"),
    ("lavender", "purple", "#d3869b"),
    ("sapphire", "aqua", "#8ec07c"),
    ("sky", "aqua", "#8ec07c"),
    ("teal", "aqua", "#8ec07c"),
    ("green", "green", "#b8bb26"),
    ("yellow", "yellow", "#fabd2f"),
    ("peach", "orange", "#fe8019"),
    ("maroon", "red", "#fb4934"),
    ("red", "red", "#fb4934"),
    ("mauve", "purple", "#d3869b"),
    ("pink", "purple", "#d3869b"),
];

const TOKYO_NIGHT: [Alias; 23] = [
    ("base", "bg", "#1a1b26"),
    ("mantle", "bg_dark", "#16161e"),
    ("crust", "bg_dark", "#16161e"),
    ("text", "fg", "#c0caf5"),
    ("subtext0", "fg_dark", "#a9b1d6"),
    ("subtext1", "fg", "#c0caf5"),
    ("surface0", "bg_highlight", "#292e42"),
    ("surface1", "terminal_black", "#414868"),
    ("surface2", "dark3", "#545c7e"),
    ("overlay0", "comment", "#565f89"),
    ("overlay1", "dark5", "#737aa2"),
    ("blue", "blue", "#7aa2f7"),
    ("lavender", "purple", "#bb9af7"),
    ("sapphire", "cyan", "#7dcfff"),
    ("sky", "cyan", "#7dcfff"),
    ("teal", "teal", "#1abc9c"),
    ("green", "green", "#9ece6a"),
    ("yellow", "yellow", "#e0af68"),
    ("peach", "orange", "#ff9e64"),
    ("maroon", "red1", "#db4b4b"),
    ("red", "red", "#f7768e"),
    ("mauve", "purple", "#bb9af7"),
    ("pink", "magenta", "#ff007c"),
];

const DRACULA: [Alias; 23] = [
    ("base", "bg", "#282a36"),
    ("mantle", "bg", "#282a36"),
    ("crust", "bg", "#282a36"),
    ("text", "fg", "#f8f8f2"),
    ("subtext0", "comment", "#6272a4"),
    ("subtext1", "fg", "#f8f8f2"),
    ("surface0", "current_line", "#44475a"),
    ("surface1", "selection", "#44475a"),
    ("surface2", "selection", "#44475a"),
    ("overlay0", "comment", "#6272a4"),
    ("overlay1", "comment", "#6272a4"),
    ("blue", "cyan", "#8be9fd"),
    ("lavender", "purple", "#bd93f9"),
    ("sapphire", "cyan", "#8be9fd"),
    ("sky", "cyan", "#8be9fd"),
    ("teal", "cyan", "#8be9fd"),
    ("green", "green", "#50fa7b"),
    ("yellow", "yellow", "#f1fa8c"),
    ("peach", "orange", "#ffb86c"),
    ("maroon", "red", "#ff5555"),
    ("red", "red", "#ff5555"),
    ("mauve", "purple", "#bd93f9"),
    ("pink", "pink", "#ff79c6"),
];

/// Which aliasing convention a palette follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFamily {
    Catppuccin,
    RosePine,
    Nord,
    Gruvbox,
    TokyoNight,
    Dracula,
    Unknown,
}

impl ThemeFamily {
    /// Classifies a theme name. Catppuccin variants share a prefix
    /// (catppuccin-mocha, catppuccin-latte, ...); the rest match exactly.
    pub fn classify(theme_name: &str) -> Self {
        if theme_name.starts_with("catppuccin") {
            return Self::Catppuccin;
        }
        match theme_name {
            "rose-pine" => Self::RosePine,
            "nord" => Self::Nord,
            "gruvbox" => Self::Gruvbox,
            "tokyo-night" => Self::TokyoNight,
            "dracula" => Self::Dracula,
            _ => Self::Unknown,
        }
    }

    fn alias_table(self) -> Option<&'static [Alias]> {
        match self {
            Self::Catppuccin => Some(&CATPPUCCIN),
            Self::RosePine => Some(&ROSE_PINE),
            Self::Nord => Some(&NORD),
            Self::Gruvbox => Some(&GRUVBOX),
            Self::TokyoNight => Some(&TOKYO_NIGHT),
            Self::Dracula => Some(&DRACULA),
            Self::Unknown => None,
        }
    }
}

/// Canonical color mapping handed to the renderers. For a known family
/// this carries exactly the 23 canonical roles; for an unknown family it
/// carries the raw palette keys verbatim, so renderers may hit a missing
/// key and must report it instead of emitting malformed output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap(BTreeMap<String, String>);

impl ColorMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

/// Maps a theme's own color vocabulary onto the canonical roles.
///
/// For each canonical role the family's source key is looked up in the
/// raw palette, falling back to the family's literal default when the
/// key is absent. Values that are present are carried over verbatim.
/// Unknown families pass the raw palette through unchanged.
pub fn map_colors(theme_name: &str, raw: &RawPalette) -> ColorMap {
    match ThemeFamily::classify(theme_name).alias_table() {
        Some(table) => ColorMap(
            table
                .iter()
                .map(|&(role, source, fallback)| {
                    let value = raw.get(source).map(String::as_str).unwrap_or(fallback);
                    (role.to_string(), value.to_string())
                })
                .collect(),
        ),
        None => ColorMap(raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawPalette {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_classify_families() {
        assert_eq!(
            ThemeFamily::classify("catppuccin-mocha"),
            ThemeFamily::Catppuccin
        );
        assert_eq!(
            ThemeFamily::classify("catppuccin-latte"),
            ThemeFamily::Catppuccin
        );
        assert_eq!(ThemeFamily::classify("rose-pine"), ThemeFamily::RosePine);
        assert_eq!(ThemeFamily::classify("nord"), ThemeFamily::Nord);
        assert_eq!(ThemeFamily::classify("gruvbox"), ThemeFamily::Gruvbox);
        assert_eq!(
            ThemeFamily::classify("tokyo-night"),
            ThemeFamily::TokyoNight
        );
        assert_eq!(ThemeFamily::classify("dracula"), ThemeFamily::Dracula);
        assert_eq!(ThemeFamily::classify("foo"), ThemeFamily::Unknown);
        // Exact matches only outside the catppuccin prefix.
        assert_eq!(ThemeFamily::classify("rose-pine-moon"), ThemeFamily::Unknown);
    }

    #[test]
    fn test_known_families_produce_all_canonical_roles() {
        let empty = RawPalette::new();
        for name in ["catppuccin-mocha", "rose-pine", "nord", "gruvbox", "tokyo-night", "dracula"] {
            let mapped = map_colors(name, &empty);
            assert_eq!(mapped.len(), CANONICAL_ROLES.len(), "family {}", name);
            for role in CANONICAL_ROLES {
                assert!(mapped.contains(role), "family {} missing role {}", name, role);
            }
        }
    }

    #[test]
    fn test_present_source_keys_pass_through_verbatim() {
        let palette = raw(&[("base", "#1e1e2e"), ("red", "#F38BA8")]);
        let mapped = map_colors("catppuccin-mocha", &palette);
        assert_eq!(mapped.get("base"), Some("#1e1e2e"));
        // No case or format normalization.
        assert_eq!(mapped.get("red"), Some("#F38BA8"));
    }

    #[test]
    fn test_absent_source_keys_use_literal_defaults() {
        let palette = raw(&[("base", "#101010")]);
        let mapped = map_colors("catppuccin-mocha", &palette);
        assert_eq!(mapped.get("base"), Some("#101010"));
        assert_eq!(mapped.get("mauve"), Some("#cba6f7"));
        assert_eq!(mapped.get("pink"), Some("#f5c2e7"));
    }

    #[test]
    fn test_rose_pine_aliases_its_own_vocabulary() {
        let palette = raw(&[
            ("surface", "#1f1d2e"),
            ("love", "#eb6f92"),
            ("gold", "#f6c177"),
        ]);
        let mapped = map_colors("rose-pine", &palette);
        assert_eq!(mapped.get("mantle"), Some("#1f1d2e"));
        assert_eq!(mapped.get("red"), Some("#eb6f92"));
        assert_eq!(mapped.get("maroon"), Some("#eb6f92"));
        assert_eq!(mapped.get("yellow"), Some("#f6c177"));
        assert_eq!(mapped.get("peach"), Some("#f6c177"));
    }

    #[test]
    fn test_nord_indexed_vocabulary() {
        let palette = raw(&[("nord0", "#2e3440"), ("nord11", "#bf616a")]);
        let mapped = map_colors("nord", &palette);
        assert_eq!(mapped.get("base"), Some("#2e3440"));
        assert_eq!(mapped.get("crust"), Some("#2e3440"));
        assert_eq!(mapped.get("red"), Some("#bf616a"));
        assert_eq!(mapped.get("maroon"), Some("#bf616a"));
    }

    #[test]
    fn test_unknown_family_passes_palette_through() {
        let palette = raw(&[("primary", "#123456"), ("secondary", "#654321")]);
        let mapped = map_colors("foo", &palette);
        assert_eq!(mapped.as_map(), &palette);
        assert!(!mapped.contains("base"));
    }
}
