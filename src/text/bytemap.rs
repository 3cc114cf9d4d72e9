//! ByteMap fonts: glyphs stored as one palette index per pixel.

use crate::{
    buffer::access::PixelBuffer,
    foundation::{
        color::Rgba,
        error::{TexfxError, TexfxResult},
    },
};

/// One glyph. `data` holds `width * height` palette indices, row-major; 0 is transparent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BytemapChar {
    pub width: u8,
    pub height: u8,
    /// Horizontal offset relative to the cursor.
    pub relx: i8,
    /// Vertical offset relative to the cursor.
    pub rely: i8,
    /// Cursor advance after drawing.
    pub kerning: u8,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BytemapFont {
    pub name: String,
    pub palette: Vec<Rgba>,
    /// Extra advance after every glyph.
    pub tracking: i8,
    /// Glyphs indexed by byte value; missing entries draw nothing and do not advance.
    pub chars: Vec<BytemapChar>,
}

impl BytemapFont {
    /// Check glyph data sizes and palette indices.
    pub fn validate(&self) -> TexfxResult<()> {
        if self.chars.len() > 256 {
            return Err(TexfxError::validation(format!(
                "bytemap font '{}' has {} glyphs, at most 256 allowed",
                self.name,
                self.chars.len()
            )));
        }
        for (code, ch) in self.chars.iter().enumerate() {
            let expected = usize::from(ch.width) * usize::from(ch.height);
            if ch.data.len() != expected {
                return Err(TexfxError::validation(format!(
                    "glyph {code} of '{}' has {} bytes, expected {expected}",
                    self.name,
                    ch.data.len()
                )));
            }
            if let Some(&bad) = ch.data.iter().find(|&&i| usize::from(i) >= self.palette.len()) {
                return Err(TexfxError::validation(format!(
                    "glyph {code} of '{}' uses palette index {bad}, palette has {} entries",
                    self.name,
                    self.palette.len()
                )));
            }
        }
        Ok(())
    }

    fn glyph(&self, byte: u8) -> Option<&BytemapChar> {
        self.chars.get(usize::from(byte))
    }
}

/// Receives the points plotted by [`print_bmf`].
pub trait GlyphSink {
    fn plot(&mut self, x: i64, y: i64, color: Rgba);
}

impl<T: GlyphSink + ?Sized> GlyphSink for &mut T {
    fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        (**self).plot(x, y, color)
    }
}

/// Plots glyphs straight into a pixel buffer, clipping points outside it.
pub struct BufferSink<'a, B: ?Sized>(pub &'a mut B);

impl<B: PixelBuffer + ?Sized> GlyphSink for BufferSink<'_, B> {
    fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        let buf = &mut *self.0;
        if x < 0 || y < 0 || x >= i64::from(buf.width()) || y >= i64::from(buf.height()) {
            return;
        }
        buf.set_pixel(x as u32, y as u32, color);
    }
}

/// Draw `text` with `font`, the cursor starting at `(x, y)`. Returns the final cursor x.
///
/// Each byte of `text` selects a glyph; formatting is left to the caller.
pub fn print_bmf<G>(sink: &mut G, x: i64, y: i64, font: &BytemapFont, text: &str) -> TexfxResult<i64>
where
    G: GlyphSink + ?Sized,
{
    font.validate()?;
    tracing::debug!(font = %font.name, len = text.len(), "print_bmf");

    let mut cursor = x;
    for byte in text.bytes() {
        let Some(ch) = font.glyph(byte) else {
            continue;
        };
        let w = usize::from(ch.width);
        if w > 0 {
            for (gy, row) in ch.data.chunks_exact(w).enumerate() {
                for (gx, &idx) in row.iter().enumerate() {
                    if idx == 0 {
                        continue;
                    }
                    sink.plot(
                        cursor + gx as i64 + i64::from(ch.relx),
                        y + gy as i64 + i64::from(ch.rely),
                        font.palette[usize::from(idx)],
                    );
                }
            }
        }
        cursor += i64::from(ch.kerning) + i64::from(font.tracking);
    }
    Ok(cursor)
}

#[cfg(test)]
#[path = "../../tests/unit/text/bytemap.rs"]
mod tests;
