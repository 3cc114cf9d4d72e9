use crate::{
    buffer::{
        access::{PixelBuffer, PixelSource},
        texture::Texture,
    },
    effects::{
        blur::blur,
        flip::{flip_horizontal, flip_vertical},
        pixelate::{pixelate, pixelate_in_place},
        scatter::{OffsetSource, scatter, scatter_in_place},
        tone::{grayscale, grayscale_in_place, invert, invert_in_place, sepia, sepia_in_place},
    },
    foundation::error::{TexfxError, TexfxResult},
};

/// A texture effect with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Sepia,
    Invert,
    Blur { factor: u32 },
    Scatter { factor: u32 },
    Pixelate { factor: u32 },
}

impl Effect {
    pub fn name(self) -> &'static str {
        match self {
            Self::FlipHorizontal => "flip_horizontal",
            Self::FlipVertical => "flip_vertical",
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Invert => "invert",
            Self::Blur { .. } => "blur",
            Self::Scatter { .. } => "scatter",
            Self::Pixelate { .. } => "pixelate",
        }
    }

    /// Whether the effect may read and write the same buffer.
    pub fn supports_in_place(self) -> bool {
        !matches!(
            self,
            Self::FlipHorizontal | Self::FlipVertical | Self::Blur { .. }
        )
    }

    /// Check factors against `limits`.
    pub fn validate(self, limits: &EffectLimits) -> TexfxResult<()> {
        match self {
            Self::Blur { factor } if factor > limits.max_blur_factor => {
                Err(TexfxError::validation(format!(
                    "blur factor {factor} exceeds limit {}",
                    limits.max_blur_factor
                )))
            }
            Self::Scatter { factor } if factor > limits.max_scatter_factor => {
                Err(TexfxError::validation(format!(
                    "scatter factor {factor} exceeds limit {}",
                    limits.max_scatter_factor
                )))
            }
            Self::Pixelate { factor } if factor == 0 => {
                Err(TexfxError::validation("pixelate factor must be >= 1"))
            }
            Self::Pixelate { factor } if factor > limits.max_pixelate_factor => {
                Err(TexfxError::validation(format!(
                    "pixelate factor {factor} exceeds limit {}",
                    limits.max_pixelate_factor
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Upper bounds for effect factors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectLimits {
    pub max_blur_factor: u32,
    pub max_scatter_factor: u32,
    pub max_pixelate_factor: u32,
}

impl Default for EffectLimits {
    fn default() -> Self {
        Self {
            max_blur_factor: 64,
            max_scatter_factor: 1024,
            max_pixelate_factor: 1024,
        }
    }
}

/// Loosely-typed effect description, as found in JSON configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectInstance {
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub fn parse_effect(inst: &EffectInstance, limits: &EffectLimits) -> TexfxResult<Effect> {
    let kind: String = inst
        .kind
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase();
    if kind.is_empty() {
        return Err(TexfxError::validation("effect kind must be non-empty"));
    }

    let effect = match kind.as_str() {
        "fliph" | "fliphorizontal" => Effect::FlipHorizontal,
        "flipv" | "flipvertical" => Effect::FlipVertical,
        "grayscale" | "greyscale" => Effect::Grayscale,
        "sepia" => Effect::Sepia,
        "invert" => Effect::Invert,
        "blur" => Effect::Blur {
            factor: get_u32(&inst.params, "factor")?,
        },
        "scatter" => Effect::Scatter {
            factor: get_u32(&inst.params, "factor")?,
        },
        "pixelate" => Effect::Pixelate {
            factor: get_u32(&inst.params, "factor")?,
        },
        _ => {
            return Err(TexfxError::validation(format!(
                "unknown effect kind '{}'",
                inst.kind
            )));
        }
    };
    effect.validate(limits)?;
    Ok(effect)
}

/// Parse a JSON array of [`EffectInstance`] values.
pub fn parse_effects_json(json: &str, limits: &EffectLimits) -> TexfxResult<Vec<Effect>> {
    let instances: Vec<EffectInstance> = serde_json::from_str(json)
        .map_err(|e| TexfxError::validation(format!("invalid effect list json: {e}")))?;
    instances
        .iter()
        .map(|inst| parse_effect(inst, limits))
        .collect()
}

fn get_u32(obj: &serde_json::Value, key: &str) -> TexfxResult<u32> {
    let Some(v) = obj.get(key) else {
        return Err(TexfxError::validation(format!(
            "missing effect param '{key}'"
        )));
    };
    let Some(n) = v.as_u64() else {
        return Err(TexfxError::validation(format!(
            "effect param '{key}' must be a non-negative integer"
        )));
    };
    u32::try_from(n)
        .map_err(|_| TexfxError::validation(format!("effect param '{key}' is out of range")))
}

/// Run one effect from `src` into a distinct `dst` of the same size.
pub fn apply_effect<S, D, R>(effect: Effect, src: &S, dst: &mut D, rng: &mut R) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
    R: OffsetSource + ?Sized,
{
    match effect {
        Effect::FlipHorizontal => flip_horizontal(src, dst),
        Effect::FlipVertical => flip_vertical(src, dst),
        Effect::Grayscale => grayscale(src, dst),
        Effect::Sepia => sepia(src, dst),
        Effect::Invert => invert(src, dst),
        Effect::Blur { factor } => blur(src, dst, factor),
        Effect::Scatter { factor } => scatter(src, dst, factor, rng),
        Effect::Pixelate { factor } => pixelate(src, dst, factor),
    }
}

/// Run one effect on a single buffer. Errors for effects that need a second buffer.
pub fn apply_effect_in_place<B, R>(effect: Effect, buf: &mut B, rng: &mut R) -> TexfxResult<()>
where
    B: PixelBuffer + ?Sized,
    R: OffsetSource + ?Sized,
{
    match effect {
        Effect::Grayscale => grayscale_in_place(buf),
        Effect::Sepia => sepia_in_place(buf),
        Effect::Invert => invert_in_place(buf),
        Effect::Scatter { factor } => scatter_in_place(buf, factor, rng),
        Effect::Pixelate { factor } => pixelate_in_place(buf, factor),
        Effect::FlipHorizontal | Effect::FlipVertical | Effect::Blur { .. } => {
            Err(TexfxError::validation(format!(
                "{} needs distinct source and destination buffers",
                effect.name()
            )))
        }
    }
}

/// Apply `effects` in order, returning a new texture.
///
/// Each step writes over a copy of the previous result, so pixels an effect leaves alone
/// (pixelate's trailing edge, unswapped scatter pixels) carry through unchanged. Scatter
/// runs in place on that copy.
#[tracing::instrument(skip(effects, src, rng), fields(count = effects.len()))]
pub fn apply_effects<R>(effects: &[Effect], src: &Texture, rng: &mut R) -> TexfxResult<Texture>
where
    R: OffsetSource + ?Sized,
{
    let mut current = src.clone();
    for &effect in effects {
        if effect.supports_in_place() {
            apply_effect_in_place(effect, &mut current, rng)?;
        } else {
            let mut next = current.clone();
            apply_effect(effect, &current, &mut next, rng)?;
            current = next;
        }
    }
    Ok(current)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
