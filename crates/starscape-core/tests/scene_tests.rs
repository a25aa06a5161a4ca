// Integration tests for the scene controller using a recording surface.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starscape_core::*;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Circle { center: Vec2, radius: f32, alpha: f32 },
}

#[derive(Default)]
struct RecordingSurface {
    size: (u32, u32),
    resizes: usize,
    ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(Op::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            alpha,
        });
    }
}

fn make_scene(config: StarfieldConfig, w: f32, h: f32) -> Scene<RecordingSurface> {
    Scene::new(
        config,
        Viewport::new(w, h),
        RecordingSurface::default(),
        StdRng::seed_from_u64(1),
    )
    .unwrap()
}

#[test]
fn construction_sizes_surface_to_viewport() {
    let scene = make_scene(StarfieldConfig::default(), 1000.0, 500.0);
    assert_eq!(scene.surface().size, (1000, 500));
    assert_eq!(scene.field().particles().len(), 250);
}

#[test]
fn frame_clears_then_draws_each_star() {
    let mut scene = make_scene(StarfieldConfig::default(), 200.0, 100.0);
    assert!(scene.frame(0.0));
    let ops = &scene.surface().ops;
    assert_eq!(ops[0], Op::Clear);
    assert_eq!(ops.len(), 1 + scene.field().particles().len());
    for (op, p) in ops[1..].iter().zip(scene.field().particles()) {
        assert_eq!(
            *op,
            Op::Circle {
                center: p.position,
                radius: p.size / 2.0 * p.scale,
                alpha: p.alpha,
            }
        );
    }
}

#[test]
fn frames_are_throttled_to_configured_rate() {
    let mut scene = make_scene(StarfieldConfig::default(), 200.0, 100.0);
    assert!(scene.frame(1.0));
    assert!(!scene.frame(1.0 + 1.0 / 60.0));
    assert!(scene.frame(1.0 + 1.0 / 20.0));
    assert_eq!(scene.frames_drawn(), 2);
}

#[test]
fn empty_field_still_clears() {
    let cfg = StarfieldConfig {
        density_ratio: 0.0,
        ..Default::default()
    };
    let mut scene = make_scene(cfg, 300.0, 300.0);
    assert!(scene.frame(0.0));
    assert_eq!(scene.surface().ops, vec![Op::Clear]);
}

#[test]
fn load_resizes_surface_and_rebuilds_field() {
    let mut scene = make_scene(StarfieldConfig::default(), 1000.0, 500.0);
    scene.load(Viewport::new(640.0, 480.0));
    assert_eq!(scene.surface().size, (640, 480));
    assert_eq!(scene.surface().resizes, 2);
    assert_eq!(scene.field().particles().len(), 240);
}

#[test]
fn pointer_then_leave_settles_at_rest() {
    let mut scene = make_scene(StarfieldConfig::default(), 400.0, 400.0);
    let target = scene.field().particles()[0].position;
    scene.pointer_move(target);

    let mut t = 0.0;
    for _ in 0..30 {
        scene.frame(t);
        t += 1.0 / 24.0;
    }
    let lit = scene.field().particles()[0];
    assert!((lit.scale - 2.0).abs() < 1e-5);
    assert!((lit.alpha - 1.0).abs() < 1e-5);

    scene.pointer_leave();
    for _ in 0..30 {
        scene.frame(t);
        t += 1.0 / 24.0;
    }
    assert!(!scene.field().is_animating());
    for p in scene.field().particles() {
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.alpha, 0.2);
    }
}
