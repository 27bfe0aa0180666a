pub mod builtin;
pub mod loader;
pub mod mapper;

pub use loader::{discover_palettes, format_warnings, load_palette, validate_palette};
pub use mapper::{map_colors, ColorMap, RawPalette, ThemeFamily};
