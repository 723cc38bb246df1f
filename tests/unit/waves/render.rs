use super::*;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn blank() -> WaveLayer {
    [Color::TRANSPARENT; BUTTON_COUNT]
}

fn renderer(params: WaveParams) -> WaveRenderer<'static> {
    WaveRenderer::new(DistanceTable::baked(), params)
}

#[test]
fn default_params_are_valid() {
    let p = WaveParams::default();
    p.validate().unwrap();
    assert_eq!(p.velocity_per_ms, 0.024);
    assert_eq!(p.max_age_ms, 340.0);
}

#[test]
fn validate_rejects_degenerate_geometry() {
    for bad in [
        WaveParams {
            velocity_per_ms: 0.0,
            ..WaveParams::default()
        },
        WaveParams {
            width: -0.1,
            ..WaveParams::default()
        },
        WaveParams {
            bleed_radius: 0.0,
            ..WaveParams::default()
        },
        WaveParams {
            max_age_ms: f32::NAN,
            ..WaveParams::default()
        },
    ] {
        assert!(bad.validate().is_err(), "{bad:?}");
    }
}

#[test]
fn ring_grows_linearly_and_expires() {
    let p = WaveParams::default();
    assert_eq!(
        p.ring(0.0),
        Some(Ring {
            min_full: 0.0,
            max_full: 0.25
        })
    );
    let r = p.ring(100.0).unwrap();
    assert!((r.min_full - 2.4).abs() < 1e-5);
    assert!((r.max_full - 2.65).abs() < 1e-5);
    assert_eq!(p.ring(340.0), None);
    assert_eq!(p.ring(-1.0), None);
}

#[test]
fn classify_covers_band_and_both_gradients() {
    let ring = Ring {
        min_full: 2.0,
        max_full: 2.5,
    };
    assert_eq!(ring.classify(2.0, 1.0), Some(Touch::Full));
    assert_eq!(ring.classify(2.5, 1.0), Some(Touch::Full));
    assert_eq!(ring.classify(3.0, 1.0), Some(Touch::OuterBleed(0.5)));
    assert_eq!(ring.classify(1.75, 1.0), Some(Touch::InnerBleed(0.25)));
    assert_eq!(ring.classify(3.5, 1.0), None);
    assert_eq!(ring.classify(1.0, 1.0), None);
}

#[test]
fn only_full_and_outer_touches_rearm_the_mask() {
    assert!(Touch::Full.resets_mask());
    assert!(Touch::OuterBleed(0.3).resets_mask());
    assert!(!Touch::InnerBleed(0.3).resets_mask());
}

#[test]
fn bleed_fades_alpha_linearly() {
    assert_eq!(bleed_color(RED, 0.0), RED);
    assert_eq!(bleed_color(RED, 0.75), RED.with_alpha(0.25));
    assert_eq!(bleed_color(RED.with_alpha(0.5), 0.5), RED.with_alpha(0.25));
}

#[test]
fn fresh_wave_lights_spawn_button_and_bleeds_onto_neighbours() {
    let r = renderer(WaveParams::default());
    let mut layer = blank();
    let resets = r.render_wave(&Wave::new(0, RED, 0.0), 0.0, &mut layer);

    assert_eq!(layer[0], RED);
    // DOWN is one unit away: 0.75 of the way through the outer gradient.
    assert!((layer[1].a - 0.25).abs() < 1e-6);
    assert!((layer[1].r - 1.0).abs() < 1e-6);
    for px in &layer[2..] {
        assert_eq!(*px, Color::TRANSPARENT);
    }
    assert_eq!(resets.iter().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn inner_bleed_tints_without_rearming() {
    let params = WaveParams {
        velocity_per_ms: 0.01,
        ..WaveParams::default()
    };
    let r = renderer(params);
    let mut layer = blank();
    // min_full = 1.5, max_full = 1.75
    let resets = r.render_wave(&Wave::new(0, RED, 0.0), 150.0, &mut layer);

    assert_eq!(layer[0], Color::TRANSPARENT);
    assert!((layer[1].a - 0.5).abs() < 1e-5);
    assert!(!resets.contains(1));
    // RIGHT sits ~2.06 away, just past the outer edge.
    assert!(resets.contains(2));
    assert!(layer[2].a > 0.0 && layer[2].a < 1.0);
}

#[test]
fn expired_wave_is_a_no_op() {
    let r = renderer(WaveParams::default());
    let mut layer = [Color::rgba(0.1, 0.2, 0.3, 0.4); BUTTON_COUNT];
    let before = layer;
    let resets = r.render_wave(&Wave::new(5, RED, 0.0), 340.0, &mut layer);
    assert_eq!(layer, before);
    assert!(resets.is_empty());

    let resets = r.render_wave(&Wave::new(5, RED, 0.0), 10_000.0, &mut layer);
    assert_eq!(layer, before);
    assert!(resets.is_empty());
}

#[test]
fn off_panel_wave_touches_nothing() {
    let r = renderer(WaveParams::default());
    let mut layer = blank();
    for button in [BUTTON_COUNT, BUTTON_COUNT + 7, usize::MAX] {
        let resets = r.render_wave(&Wave::new(button, RED, 0.0), 100.0, &mut layer);
        assert_eq!(layer, blank());
        assert!(resets.is_empty());
    }
}

#[test]
fn newer_waves_composite_over_older_ones() {
    let r = renderer(WaveParams::default());
    let waves = [Wave::new(0, RED, 0.0), Wave::new(0, BLUE, 0.0)];
    let mut layer = blank();
    let resets = r.render_all(&waves, 0.0, &mut layer);
    assert_eq!(layer[0], BLUE);
    assert_eq!(resets.len(), 2);
}
