use std::path::Path;

use anyhow::Context;

use crate::{buffer::texture::Texture, foundation::error::TexfxResult};

/// Decode encoded image bytes (PNG, JPEG, BMP) into a straight-alpha texture.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_texture(bytes: &[u8]) -> TexfxResult<Texture> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    tracing::debug!(width = rgba.width(), height = rgba.height(), "decoded texture");
    Texture::from_image(&rgba)
}

/// Read and decode an image file.
#[tracing::instrument]
pub fn load_texture(path: &Path) -> TexfxResult<Texture> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image file '{}'", path.display()))?;
    decode_texture(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
