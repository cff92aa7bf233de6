//! Font installation
//!
//! Loads one TrueType file and puts it first in both font families. A
//! missing file logs a warning and leaves the library's default fonts in
//! place.

use std::path::Path;

use tracing::warn;

/// Install `path` as the primary proportional and monospace font
pub fn install_font(ctx: &egui::Context, path: impl AsRef<Path>) {
    let path = path.as_ref();
    let mut fonts = egui::FontDefinitions::default();

    match std::fs::read(path) {
        Ok(font_data) => {
            fonts.font_data.insert(
                "app-font".to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );

            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "app-font".to_owned());

            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .insert(0, "app-font".to_owned());
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load font, using defaults");
        }
    }

    ctx.set_fonts(fonts);
}
