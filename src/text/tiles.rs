//! Fixed-size tile fonts: a sheet of equally sized glyph tiles, one per character code.

use crate::{
    buffer::access::{PixelBuffer, PixelSource},
    foundation::error::{TexfxError, TexfxResult},
    text::bytemap::{BufferSink, GlyphSink},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TileFont {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Character code of the sheet's first tile.
    pub tile_start: u32,
    pub tiles_per_row: u32,
}

impl TileFont {
    pub fn new(
        tile_width: u32,
        tile_height: u32,
        tile_start: u32,
        tiles_per_row: u32,
    ) -> TexfxResult<Self> {
        if tile_width == 0 || tile_height == 0 || tiles_per_row == 0 {
            return Err(TexfxError::validation(format!(
                "tile font needs non-zero sizes, got {tile_width}x{tile_height} with {tiles_per_row} per row"
            )));
        }
        Ok(Self {
            tile_width,
            tile_height,
            tile_start,
            tiles_per_row,
        })
    }

    /// Font covering a whole sheet, row by row.
    pub fn for_sheet<S: PixelSource + ?Sized>(
        sheet: &S,
        tile_width: u32,
        tile_height: u32,
        tile_start: u32,
    ) -> TexfxResult<Self> {
        if tile_width == 0 {
            return Err(TexfxError::validation("tile width must be > 0"));
        }
        Self::new(tile_width, tile_height, tile_start, sheet.width() / tile_width)
    }

    /// Top-left corner of `tile` in the sheet.
    fn tile_origin(&self, tile: u32) -> (u64, u64) {
        let col = u64::from(tile % self.tiles_per_row);
        let row = u64::from(tile / self.tiles_per_row);
        (col * u64::from(self.tile_width), row * u64::from(self.tile_height))
    }
}

/// One tile placement produced by [`layout_tiles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDraw {
    pub x: i64,
    pub y: i64,
    pub tile: u32,
    pub zoom: u32,
}

/// Lay out `text` left to right from `(x, y)`, advancing `tile_width * zoom` per byte.
/// Bytes below `tile_start` take up space but produce no draw.
pub fn layout_tiles(
    x: i64,
    y: i64,
    font: &TileFont,
    zoom: u32,
    text: &str,
) -> TexfxResult<Vec<TileDraw>> {
    if zoom == 0 {
        return Err(TexfxError::validation("tile zoom must be >= 1"));
    }
    let advance = i64::from(font.tile_width) * i64::from(zoom);
    let mut out = Vec::with_capacity(text.len());
    for (i, byte) in text.bytes().enumerate() {
        let Some(tile) = u32::from(byte).checked_sub(font.tile_start) else {
            continue;
        };
        out.push(TileDraw {
            x: x + i as i64 * advance,
            y,
            tile,
            zoom,
        });
    }
    Ok(out)
}

/// Copy laid-out tiles from `sheet` onto `target`, scaling by each draw's zoom.
///
/// Fully transparent sheet pixels are skipped and points past the target edges clipped.
/// All draws are checked against the sheet before anything is written.
pub fn blit_tiles<S, D>(
    sheet: &S,
    font: &TileFont,
    draws: &[TileDraw],
    target: &mut D,
) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    for d in draws {
        let (sx, sy) = font.tile_origin(d.tile);
        if d.zoom == 0 {
            return Err(TexfxError::validation("tile zoom must be >= 1"));
        }
        if sx + u64::from(font.tile_width) > u64::from(sheet.width())
            || sy + u64::from(font.tile_height) > u64::from(sheet.height())
        {
            return Err(TexfxError::validation(format!(
                "tile {} lies outside the {}x{} sheet",
                d.tile,
                sheet.width(),
                sheet.height()
            )));
        }
    }
    tracing::debug!(tiles = draws.len(), "blit_tiles");

    let mut sink = BufferSink(target);
    for d in draws {
        let (sx, sy) = font.tile_origin(d.tile);
        let zoom = i64::from(d.zoom);
        for ty in 0..font.tile_height {
            for tx in 0..font.tile_width {
                let c = sheet.get_pixel(sx as u32 + tx, sy as u32 + ty);
                if c.a() == 0 {
                    continue;
                }
                let ox = d.x + i64::from(tx) * zoom;
                let oy = d.y + i64::from(ty) * zoom;
                for zy in 0..zoom {
                    for zx in 0..zoom {
                        sink.plot(ox + zx, oy + zy, c);
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/tiles.rs"]
mod tests;
