// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Destinations for exported images

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{CapturedImage, ExportFormat};

/// Writes an encoded capture somewhere the user can find it
pub trait ImageSaver {
    /// Returns the written path, or `None` if the user cancelled
    fn save(&self, image: &CapturedImage) -> anyhow::Result<Option<PathBuf>>;
}

/// Asks for a destination with a native save dialog
#[derive(Debug, Default)]
pub struct DialogSaver;

impl ImageSaver for DialogSaver {
    fn save(&self, image: &CapturedImage) -> anyhow::Result<Option<PathBuf>> {
        let (filter_name, extensions): (&str, &[&str]) = match image.format {
            ExportFormat::Png => ("PNG Image", &["png"]),
            ExportFormat::Jpeg => ("JPEG Image", &["jpeg", "jpg"]),
        };
        let path = rfd::FileDialog::new()
            .set_title("Download Field")
            .set_file_name(image.format.file_name())
            .add_filter(filter_name, extensions)
            .save_file();

        let Some(path) = path else {
            tracing::info!("Save dialog cancelled");
            return Ok(None);
        };
        write_image(&path, image)?;
        Ok(Some(path))
    }
}

/// Writes into a fixed directory under the export file name
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSaver for DirectorySaver {
    fn save(&self, image: &CapturedImage) -> anyhow::Result<Option<PathBuf>> {
        let path = self.dir.join(image.format.file_name());
        write_image(&path, image)?;
        Ok(Some(path))
    }
}

fn write_image(path: &Path, image: &CapturedImage) -> anyhow::Result<()> {
    std::fs::write(path, &image.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        "Saved {}x{} {} to {}",
        image.width,
        image.height,
        image.format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(format: ExportFormat) -> CapturedImage {
        CapturedImage {
            format,
            width: 2,
            height: 2,
            bytes: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn directory_saver_uses_export_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path());

        let path = saver.save(&sample(ExportFormat::Jpeg)).unwrap().unwrap();
        assert_eq!(path, dir.path().join("cricket_field_strategy.jpeg"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectorySaver::new(dir.path().join("missing"));
        let err = saver.save(&sample(ExportFormat::Png)).unwrap_err();
        assert!(err.to_string().contains("cricket_field_strategy.png"));
    }
}
