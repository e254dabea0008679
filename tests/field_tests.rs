// Host-side tests for particle sampling, wraparound and projection.

mod common;

use common::{Call, RecordingSurface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::*;

fn seeded_config(seed: u64) -> FieldConfig {
    FieldConfig {
        seed: Some(seed),
        ..FieldConfig::default()
    }
}

fn assert_in_bounds(particles: &[Particle], vp: Viewport) {
    for p in particles {
        assert!(p.depth >= DEPTH_MIN && p.depth <= DEPTH_MAX, "depth {}", p.depth);
        assert!(p.base.x >= 0.0 && p.base.x < vp.width as f32, "x {}", p.base.x);
        assert!(p.base.y >= 0.0 && p.base.y < vp.height as f32, "y {}", p.base.y);
    }
}

#[test]
fn sampled_particles_lie_within_viewport_and_depth_range() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let vp = Viewport::new(1280, 720);
        let particles = sample_particles(&mut rng, vp, STAR_COUNT);
        assert_eq!(particles.len(), STAR_COUNT);
        assert_in_bounds(&particles, vp);
    }
}

#[test]
fn viewport_never_collapses_to_zero() {
    let vp = Viewport::new(0, 0);
    assert_eq!((vp.width, vp.height), (1, 1));
    let mut rng = StdRng::seed_from_u64(3);
    assert_in_bounds(&sample_particles(&mut rng, vp, 10), vp);
}

#[test]
fn wrap_keeps_in_range_values() {
    assert_eq!(wrap(0.0, 800.0), 0.0);
    assert_eq!(wrap(123.5, 800.0), 123.5);
    assert_eq!(wrap(799.5, 800.0), 799.5);
}

#[test]
fn wrap_moves_out_of_range_values_to_opposite_edge() {
    assert_eq!(wrap(-10.0, 800.0), 790.0);
    assert_eq!(wrap(810.0, 800.0), 10.0);
    assert_eq!(wrap(800.0, 800.0), 0.0);
    assert_eq!(wrap(-800.0, 800.0), 0.0);
}

#[test]
fn wrap_lands_in_range_across_single_step_domain() {
    let limit = 800.0_f32;
    // -limit .. 2*limit in half-pixel steps
    for k in 0..4800 {
        let v = k as f32 * 0.5 - limit;
        let r = wrap(v, limit);
        assert!((0.0..limit).contains(&r), "wrap({v}) = {r}");
    }
}

#[test]
fn wrap_of_tiny_negative_stays_below_limit() {
    for limit in [1920.0_f32, 1080.0, 800.0, 1.0] {
        for v in [-1e-5_f32, -1e-7, -f32::MIN_POSITIVE, -1e-30] {
            let r = wrap(v, limit);
            assert!((0.0..limit).contains(&r), "wrap({v}, {limit}) = {r}");
        }
    }
    assert_eq!(wrap(-1e-5, 1920.0), 0.0);
}

#[test]
fn projection_near_left_edge_stays_on_screen() {
    let vp = Viewport::new(1920, 1080);
    let mut field = ParticleField::new(vp, &seeded_config(8));
    field.set_pointer(PointerSignal {
        norm_x: -1e-7,
        norm_y: 0.0,
    });
    let p = Particle {
        base: Vec2::new(1e-6, 10.0),
        depth: 1.0,
    };
    let pos = field.project(&p);
    assert!(pos.x >= 0.0 && pos.x < 1920.0, "x = {}", pos.x);
    assert_eq!(pos.y, 10.0);
}

#[test]
fn projection_without_input_is_identity() {
    let field = ParticleField::new(Viewport::new(1024, 768), &seeded_config(11));
    for (pos, p) in field.projected() {
        assert_eq!(pos, p.base);
    }
}

#[test]
fn full_depth_pointer_right_shifts_by_sixty() {
    let vp = Viewport::new(800, 600);
    let mut field = ParticleField::new(vp, &seeded_config(5));
    field.set_pointer(PointerSignal {
        norm_x: 1.0,
        norm_y: 0.0,
    });
    for base_x in [0.0_f32, 100.0, 500.25, 760.0, 799.0] {
        let p = Particle {
            base: Vec2::new(base_x, 300.0),
            depth: 1.0,
        };
        let pos = field.project(&p);
        assert_eq!(pos.x, wrap(base_x + 60.0, 800.0));
        assert_eq!(pos.y, 300.0);
    }
}

#[test]
fn parallax_scales_with_depth() {
    let mut field = ParticleField::new(Viewport::new(1000, 1000), &seeded_config(5));
    field.set_pointer(PointerSignal {
        norm_x: 0.5,
        norm_y: -0.5,
    });
    field.set_scroll(ScrollSignal { velocity_y: 1.0 });
    let near = Particle {
        base: Vec2::new(500.0, 500.0),
        depth: 1.0,
    };
    let far = Particle {
        base: Vec2::new(500.0, 500.0),
        depth: 0.2,
    };
    let dn = field.project(&near) - near.base;
    let df = field.project(&far) - far.base;
    // x: 0.5 * 60 + 1 * 30 = 60, y: -0.5 * 40 + 1 * 80 = 60
    assert!((dn.x - 60.0).abs() < 1e-4 && (dn.y - 60.0).abs() < 1e-4);
    assert!((df.x - 12.0).abs() < 1e-4 && (df.y - 12.0).abs() < 1e-4);
}

#[test]
fn scroll_pushes_stars_past_bottom_edge_back_to_top() {
    let mut field = ParticleField::new(Viewport::new(400, 400), &seeded_config(2));
    field.set_scroll(ScrollSignal::from_scroll_offset(500.0)); // velocity 4.0
    let p = Particle {
        base: Vec2::new(10.0, 390.0),
        depth: 1.0,
    };
    let pos = field.project(&p);
    // y = 390 + 4 * 80 = 710 -> 310
    assert!((pos.y - 310.0).abs() < 1e-3, "y = {}", pos.y);
    assert!((pos.x - 130.0).abs() < 1e-3, "x = {}", pos.x);
}

#[test]
fn resize_regenerates_whole_set_within_new_bounds() {
    let mut field = ParticleField::new(Viewport::new(1920, 1080), &seeded_config(9));
    let before = field.particles().to_vec();

    let small = Viewport::new(320, 240);
    assert!(field.resize(small));
    assert_eq!(field.viewport(), small);
    assert_eq!(field.particles().len(), STAR_COUNT);
    assert_in_bounds(field.particles(), small);
    assert!(field
        .particles()
        .iter()
        .all(|p| !before.contains(p)));

    let wide = Viewport::new(2560, 400);
    assert!(field.resize(wide));
    assert_eq!(field.particles().len(), STAR_COUNT);
    assert_in_bounds(field.particles(), wide);
}

#[test]
fn resize_to_same_size_keeps_particles() {
    let vp = Viewport::new(640, 480);
    let mut field = ParticleField::new(vp, &seeded_config(4));
    let before = field.particles().to_vec();
    assert!(!field.resize(vp));
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn same_seed_gives_same_field() {
    let vp = Viewport::new(800, 600);
    let a = ParticleField::new(vp, &seeded_config(77));
    let b = ParticleField::new(vp, &seeded_config(77));
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn paint_clears_then_draws_in_insertion_order() {
    let vp = Viewport::new(800, 600);
    let mut field = ParticleField::new(vp, &seeded_config(1));
    field.set_pointer(PointerSignal::from_client(700.0, 100.0, vp));

    let mut surface = RecordingSurface::default();
    field.paint(&mut surface).unwrap();

    assert_eq!(surface.calls.len(), STAR_COUNT + 1);
    assert_eq!(surface.calls[0], Call::Clear(vp));
    for (call, (pos, p)) in surface.calls[1..].iter().zip(field.projected()) {
        match call {
            Call::Dot {
                center,
                radius,
                opacity,
                blur,
                color,
            } => {
                assert_eq!(*center, pos);
                assert!((radius - STAR_SIZE * (0.7 + 0.3 * p.depth)).abs() < 1e-5);
                assert!((opacity - (0.7 + 0.3 * p.depth)).abs() < 1e-5);
                assert!((blur - 6.0 * p.depth).abs() < 1e-5);
                assert_eq!(color, STAR_COLOR);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}

#[test]
fn dot_style_grows_with_depth() {
    let far = DotStyle::for_depth(DEPTH_MIN, STAR_SIZE, STAR_COLOR);
    let near = DotStyle::for_depth(DEPTH_MAX, STAR_SIZE, STAR_COLOR);
    assert!(near.radius > far.radius);
    assert!(near.opacity > far.opacity);
    assert!(near.blur > far.blur);
    assert!((near.radius - 2.0).abs() < 1e-5);
    assert!((near.opacity - 1.0).abs() < 1e-5);
    assert!(near.opacity <= 1.0 + 1e-6);
}
