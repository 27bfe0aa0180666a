use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::palette::builtin::BUILTIN_PALETTES;

/// Directory layout of the tool: `<root>/palettes/*.json` in,
/// `<root>/themes/<name>/*` out.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns the default config root (~/.config/theme-switcher)
    pub fn default_root() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("theme-switcher"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the palettes directory path (<root>/palettes)
    pub fn palettes_dir(&self) -> PathBuf {
        self.root.join("palettes")
    }

    /// Returns the themes output directory path (<root>/themes)
    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    /// Returns the output directory for one theme (<root>/themes/<name>)
    pub fn theme_output_dir(&self, name: &str) -> PathBuf {
        self.themes_dir().join(name)
    }

    /// Ensures config directories and bundled palette files exist.
    /// Called on startup; a palette file that already exists is left alone.
    pub fn ensure_config_exists(&self) -> io::Result<()> {
        let palettes_dir = self.palettes_dir();
        fs::create_dir_all(&palettes_dir)?;
        fs::create_dir_all(self.themes_dir())?;

        for (name, json) in BUILTIN_PALETTES {
            let path = palettes_dir.join(format!("{}.json", name));
            if !path.exists() {
                let _ = fs::write(&path, json);
            }
        }

        Ok(())
    }
}
