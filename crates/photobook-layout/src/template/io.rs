//! File output for generated templates

use crate::types::*;
use image::{ImageFormat, RgbImage};
use log::info;
use std::io::Cursor;
use std::path::Path;

/// Encode a preview as PNG and write it
pub async fn write_preview(image: RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Cursor::new(Vec::new());
        image.write_to(&mut writer, ImageFormat::Png)?;
        Ok::<_, LayoutError>(writer.into_inner())
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Write a rendered text file
pub async fn write_text(path: impl AsRef<Path>, contents: String) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, contents).await?;
    info!("Wrote {}", path.display());
    Ok(())
}
