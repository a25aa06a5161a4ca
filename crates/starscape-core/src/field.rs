//! Star state: creation from the viewport, proximity targets and resting
//! targets. Values only change through [`TweenSet`] tasks stepped by
//! [`StarField::advance`].

use crate::config::{ConfigError, StarfieldConfig};
use crate::constants::*;
use crate::mapper::RangeMapper;
use crate::random::random_snapped;
use crate::tween::{Attribute, TweenKey, TweenSet};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Diameter in pixels, fixed at creation.
    pub size: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl Particle {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5 * self.scale
    }

    #[inline]
    pub fn set(&mut self, attribute: Attribute, value: f32) {
        match attribute {
            Attribute::Scale => self.scale = value,
            Attribute::Alpha => self.alpha = value,
        }
    }
}

/// Number of stars for a viewport: `floor(min(w, h) * density)`, capped at
/// [`MAX_STARS`].
#[inline]
pub fn particle_count(viewport: Viewport, density_ratio: f32) -> usize {
    let count = (viewport.min_side() * density_ratio).floor();
    if count.is_nan() || count <= 0.0 {
        return 0;
    }
    if count >= MAX_STARS as f32 {
        return MAX_STARS;
    }
    count as usize
}

pub struct StarField {
    config: StarfieldConfig,
    max_range: f32,
    scale_mapper: RangeMapper,
    alpha_mapper: RangeMapper,
    particles: Vec<Particle>,
    tweens: TweenSet,
    rng: StdRng,
}

impl StarField {
    pub fn new(config: StarfieldConfig, viewport: Viewport, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let tweens = TweenSet::new(config.tween_duration_sec, config.ease);
        let mut field = Self {
            max_range: 0.0,
            scale_mapper: RangeMapper::new(0.0, 0.0, config.scale_limit, REST_SCALE),
            alpha_mapper: RangeMapper::new(0.0, 0.0, NEAR_ALPHA, config.default_alpha),
            config,
            particles: Vec::new(),
            tweens,
            rng,
        };
        field.resize(viewport);
        Ok(field)
    }

    pub fn with_seed(config: StarfieldConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, viewport, StdRng::seed_from_u64(seed))
    }

    /// Recompute the influence radius and mappers, then replace every star.
    /// In-flight tweens belong to the old stars and are dropped.
    pub fn resize(&mut self, viewport: Viewport) {
        let cfg = &self.config;
        let vmin = viewport.min_side();
        self.max_range = vmin * cfg.proximity_ratio;
        self.scale_mapper =
            RangeMapper::new(NEAR_DISTANCE, self.max_range, cfg.scale_limit, REST_SCALE);
        self.alpha_mapper =
            RangeMapper::new(NEAR_DISTANCE, self.max_range, NEAR_ALPHA, cfg.default_alpha);

        let count = particle_count(viewport, cfg.density_ratio);
        let (size_limit, default_alpha) = (cfg.size_limit, cfg.default_alpha);
        let rng = &mut self.rng;
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(
                    random_snapped(rng, 0.0, viewport.width.max(0.0), POSITION_SNAP),
                    random_snapped(rng, 0.0, viewport.height.max(0.0), POSITION_SNAP),
                ),
                size: random_snapped(rng, MIN_SIZE, size_limit, SIZE_SNAP),
                scale: REST_SCALE,
                alpha: random_snapped(rng, MIN_ALPHA, default_alpha, ALPHA_SNAP),
            })
            .collect();
        self.particles = particles;
        self.tweens.clear();
        log::debug!(
            "[field] viewport={}x{} stars={} max_range={:.1}",
            viewport.width,
            viewport.height,
            count,
            self.max_range
        );
    }

    /// Target `(scale, alpha)` for a star `distance` px from the pointer.
    #[inline]
    pub fn target_for_distance(&self, distance: f32) -> (f32, f32) {
        let d = distance.clamp(0.0, self.max_range);
        (self.scale_mapper.map(d), self.alpha_mapper.map(d))
    }

    /// Retarget every star towards the scale/alpha for its distance to `pointer`.
    pub fn update_pointer(&mut self, pointer: Vec2) {
        for i in 0..self.particles.len() {
            let p = self.particles[i];
            let (scale, alpha) = self.target_for_distance(p.position.distance(pointer));
            self.tweens
                .retarget(TweenKey::new(i, Attribute::Scale), p.scale, scale);
            self.tweens
                .retarget(TweenKey::new(i, Attribute::Alpha), p.alpha, alpha);
        }
        log::trace!("[field] pointer=({:.0},{:.0}) active={}", pointer.x, pointer.y, self.tweens.len());
    }

    /// Retarget every star towards the resting state.
    pub fn reset(&mut self) {
        let rest_alpha = self.config.default_alpha;
        for (i, p) in self.particles.iter().enumerate() {
            self.tweens
                .retarget(TweenKey::new(i, Attribute::Scale), p.scale, REST_SCALE);
            self.tweens
                .retarget(TweenKey::new(i, Attribute::Alpha), p.alpha, rest_alpha);
        }
        log::debug!("[field] reset {} stars", self.particles.len());
    }

    /// Step in-flight tweens by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tweens.advance(dt, &mut self.particles);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    pub fn scale_mapper(&self) -> RangeMapper {
        self.scale_mapper
    }

    pub fn alpha_mapper(&self) -> RangeMapper {
        self.alpha_mapper
    }

    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }
}
