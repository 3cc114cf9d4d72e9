//! texfx applies per-pixel texture effects to RGBA8 pixel buffers.
//!
//! Effects read a source through [`PixelSource`] and write a destination through
//! [`PixelBuffer`]; any storage that can get and set packed [`Rgba`] values by coordinate
//! works, including [`Texture`] and `image::RgbaImage`.
//!
//! - **Geometry**: [`flip_horizontal`], [`flip_vertical`]
//! - **Tone**: [`grayscale`], [`sepia`], [`invert`] (plus `*_in_place` forms)
//! - **Neighbourhood**: [`blur`], [`scatter`], [`pixelate`]
//!
//! Every effect is stateless and validates its buffers before the first write. Scatter
//! takes its randomness from an injected [`OffsetSource`], so results are reproducible
//! for a given seed.
//!
//! Around the effects sit small helpers for loading textures ([`load_texture`]), saving
//! snapshots ([`save_png`]), and drawing bitmap text ([`print_bmf`], [`blit_tiles`]).
#![forbid(unsafe_code)]

mod assets;
mod buffer;
mod effects;
mod foundation;
mod text;

pub use assets::capture::{encode_png, save_png};
pub use assets::decode::{decode_texture, load_texture};
pub use buffer::access::{PixelBuffer, PixelSource, check_non_empty, check_same_dims};
pub use buffer::texture::Texture;
pub use effects::blur::blur;
pub use effects::flip::{flip_horizontal, flip_vertical};
pub use effects::fx::{
    Effect, EffectInstance, EffectLimits, apply_effect, apply_effect_in_place, apply_effects,
    parse_effect, parse_effects_json,
};
pub use effects::parallel::{ParallelOpts, apply_effect_par};
pub use effects::pixelate::{pixelate, pixelate_in_place};
pub use effects::scatter::{OffsetSequence, OffsetSource, RngOffsets, scatter, scatter_in_place};
pub use effects::tone::{
    grayscale, grayscale_in_place, grayscale_px, invert, invert_in_place, invert_px, sepia,
    sepia_in_place, sepia_px,
};
pub use foundation::color::Rgba;
pub use foundation::error::{TexfxError, TexfxResult};
pub use text::bytemap::{BufferSink, BytemapChar, BytemapFont, GlyphSink, print_bmf};
pub use text::tiles::{TileDraw, TileFont, blit_tiles, layout_tiles};
