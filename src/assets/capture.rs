use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::{
    buffer::{access::PixelSource, texture::Texture},
    foundation::error::TexfxResult,
};

/// Encode any pixel source as PNG bytes.
pub fn encode_png<S: PixelSource + ?Sized>(src: &S) -> TexfxResult<Vec<u8>> {
    let img = Texture::from_source(src)?.to_image()?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// Write a PNG snapshot of `src`, creating parent directories as needed.
#[tracing::instrument(skip(src), fields(width = src.width(), height = src.height()))]
pub fn save_png<S: PixelSource + ?Sized>(src: &S, path: &Path) -> TexfxResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let bytes = encode_png(src)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/capture.rs"]
mod tests;
