use std::fs;

use crate::config::Config;
use crate::error::ThemeError;
use crate::palette::{self, ThemeFamily};
use crate::render;

/// Success/failure tally for one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Drives load -> map -> render -> write for each theme. One theme's
/// failure never aborts the rest of the batch.
pub struct Generator<'a> {
    config: &'a Config,
    verbose: bool,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, verbose: bool) -> Self {
        Self { config, verbose }
    }

    /// Generates all output files for one theme.
    pub fn generate_theme(&self, theme: &str) -> Result<(), ThemeError> {
        if self.verbose {
            println!("Generating theme: {}", theme);
        }

        let raw = palette::load_palette(self.config, theme)?;
        if self.verbose {
            for warning in palette::format_warnings(theme, &raw) {
                eprintln!("Warning: {}", warning);
            }
        }

        if ThemeFamily::classify(theme) == ThemeFamily::Unknown {
            eprintln!(
                "Warning: unknown theme '{}', using direct color mapping",
                theme
            );
        }
        let mapped = palette::map_colors(theme, &raw);

        // Render everything up front so a missing key never leaves a
        // half-written theme directory behind.
        let mut outputs = Vec::with_capacity(render::TARGETS.len());
        for (file, render) in render::TARGETS {
            outputs.push((file, render(theme, &mapped)?));
        }

        let theme_dir = self.config.theme_output_dir(theme);
        fs::create_dir_all(&theme_dir)?;

        for (file, content) in outputs {
            let path = theme_dir.join(file);
            fs::write(&path, content).map_err(|source| ThemeError::Write {
                path: path.clone(),
                source,
            })?;
            if self.verbose {
                println!("  wrote {}", file);
            }
        }

        Ok(())
    }

    /// Generates every named theme; failures are reported and skipped.
    pub fn generate_all(&self, themes: &[String]) -> Summary {
        let mut summary = Summary::default();
        for theme in themes {
            match self.generate_theme(theme) {
                Ok(()) => summary.succeeded += 1,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// Load-and-validate pass that writes nothing.
    pub fn validate_all(&self, themes: &[String]) -> Summary {
        let mut summary = Summary::default();
        for theme in themes {
            match palette::load_palette(self.config, theme) {
                Ok(_) => {
                    println!("{}: valid", theme);
                    summary.succeeded += 1;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}
