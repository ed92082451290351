//! Startup font resource. Loaded once before the window opens.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use eframe::egui;
use thiserror::Error;

pub const CALENDAR_FONT_NAME: &str = "calendar";

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("font file '{}' is empty", path.display())]
    Empty { path: PathBuf },
    #[error("font file '{}' is not a usable TrueType/OpenType font: {reason}", path.display())]
    UnrecognizedFormat { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
pub struct FontResource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FontResource {
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, FontError> {
        if bytes.is_empty() {
            return Err(FontError::Empty {
                path: path.to_path_buf(),
            });
        }
        if let Err(err) = ab_glyph::FontRef::try_from_slice(&bytes) {
            return Err(FontError::UnrecognizedFormat {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Font definitions with this font placed first in every family.
    pub fn font_definitions(&self) -> egui::FontDefinitions {
        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            CALENDAR_FONT_NAME.to_owned(),
            Arc::new(egui::FontData::from_owned(self.bytes.clone())),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .insert(0, CALENDAR_FONT_NAME.to_owned());
        }
        fonts
    }

    pub fn install(&self, ctx: &egui::Context) {
        ctx.set_fonts(self.font_definitions());
    }
}
