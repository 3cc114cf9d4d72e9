use super::*;
use crate::{effects::scatter::OffsetSequence, foundation::color::Rgba};

fn inst(kind: &str, params: serde_json::Value) -> EffectInstance {
    EffectInstance {
        kind: kind.to_string(),
        params,
    }
}

fn no_rng() -> OffsetSequence {
    OffsetSequence::new(vec![0]).unwrap()
}

#[test]
fn parse_accepts_spelling_variants() {
    let limits = EffectLimits::default();
    for kind in ["flip_h", "FlipHorizontal", "flip-horizontal", "fliph"] {
        let e = parse_effect(&inst(kind, serde_json::Value::Null), &limits).unwrap();
        assert_eq!(e, Effect::FlipHorizontal);
    }
    let e = parse_effect(&inst(" greyscale ", serde_json::Value::Null), &limits).unwrap();
    assert_eq!(e, Effect::Grayscale);
}

#[test]
fn parse_factor_effects() {
    let limits = EffectLimits::default();
    let e = parse_effect(&inst("blur", serde_json::json!({ "factor": 2 })), &limits).unwrap();
    assert_eq!(e, Effect::Blur { factor: 2 });
    let e = parse_effect(&inst("pixelate", serde_json::json!({ "factor": 8 })), &limits).unwrap();
    assert_eq!(e, Effect::Pixelate { factor: 8 });
}

#[test]
fn parse_rejects_bad_params() {
    let limits = EffectLimits::default();
    let cases = [
        inst("blur", serde_json::json!({})),
        inst("blur", serde_json::json!({ "factor": -1 })),
        inst("blur", serde_json::json!({ "factor": 1.5 })),
        inst("blur", serde_json::json!({ "factor": 65 })),
        inst("scatter", serde_json::json!({ "factor": 5_000_000_000u64 })),
        inst("pixelate", serde_json::json!({ "factor": 0 })),
        inst("swirl", serde_json::Value::Null),
        inst("  ", serde_json::Value::Null),
    ];
    for c in cases {
        let err = parse_effect(&c, &limits).unwrap_err();
        assert!(err.is_validation(), "{c:?} -> {err}");
    }
}

#[test]
fn limits_are_configurable() {
    let limits: EffectLimits = serde_json::from_str(r#"{ "max_blur_factor": 2 }"#).unwrap();
    assert_eq!(limits.max_blur_factor, 2);
    assert_eq!(limits.max_pixelate_factor, 1024);
    assert!(Effect::Blur { factor: 3 }.validate(&limits).is_err());
    assert!(Effect::Blur { factor: 2 }.validate(&limits).is_ok());
}

#[test]
fn parse_effects_json_reads_a_list() {
    let json = r#"[
        { "kind": "invert" },
        { "kind": "blur", "params": { "factor": 1 } }
    ]"#;
    let fx = parse_effects_json(json, &EffectLimits::default()).unwrap();
    assert_eq!(fx, vec![Effect::Invert, Effect::Blur { factor: 1 }]);

    assert!(parse_effects_json("{", &EffectLimits::default()).is_err());
}

#[test]
fn effect_serde_uses_kind_tag() {
    let s = serde_json::to_string(&Effect::Scatter { factor: 3 }).unwrap();
    assert_eq!(s, r#"{"kind":"scatter","factor":3}"#);
    let back: Effect = serde_json::from_str(r#"{"kind":"flip_vertical"}"#).unwrap();
    assert_eq!(back, Effect::FlipVertical);
}

#[test]
fn in_place_refuses_flips_and_blur() {
    let mut t = Texture::new(2, 2).unwrap();
    let mut rng = no_rng();
    for e in [
        Effect::FlipHorizontal,
        Effect::FlipVertical,
        Effect::Blur { factor: 1 },
    ] {
        assert!(!e.supports_in_place());
        let err = apply_effect_in_place(e, &mut t, &mut rng).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }
}

#[test]
fn apply_effects_chains_in_order() {
    let src = Texture::from_pixels(
        2,
        1,
        vec![Rgba::new(255, 0, 0, 255), Rgba::new(0, 0, 0, 10)],
    )
    .unwrap();
    let mut rng = no_rng();
    let out = apply_effects(
        &[Effect::FlipHorizontal, Effect::Invert, Effect::Grayscale],
        &src,
        &mut rng,
    )
    .unwrap();
    // flip: [black/10, red]; invert: [white/10, cyan]; gray of cyan = (150+28)*255/255 = 178.
    assert_eq!(
        out.pixels(),
        &[Rgba::new(255, 255, 255, 10), Rgba::new(178, 178, 178, 255)]
    );
}

#[test]
fn double_invert_via_chain_is_identity() {
    let src = Texture::from_pixels(2, 2, (0..4).map(|i| Rgba(0x1020_3040 * i)).collect()).unwrap();
    let out = apply_effects(&[Effect::Invert, Effect::Invert], &src, &mut no_rng()).unwrap();
    assert_eq!(out, src);
}
