//! Per-attribute interpolation tasks.
//!
//! Every animated value is addressed by a [`TweenKey`] (star index plus
//! attribute). Starting a new tween on a key replaces whatever was in flight
//! for that key, starting from the attribute's current value, so rapid pointer
//! movement retargets smoothly instead of stacking competing animations.

use crate::field::Particle;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// `power1.out`: quadratic ease-out.
    #[default]
    QuadOut,
    CubicOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" | "none" => Some(Ease::Linear),
            "power1.out" | "quad.out" => Some(Ease::QuadOut),
            "power2.out" | "cubic.out" => Some(Ease::CubicOut),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Scale,
    Alpha,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenKey {
    pub particle: usize,
    pub attribute: Attribute,
}

impl TweenKey {
    pub const fn new(particle: usize, attribute: Attribute) -> Self {
        Self {
            particle,
            attribute,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
            ease,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Advance by `dt` seconds and return the new value.
    #[inline]
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Registry of in-flight tweens, at most one per key.
#[derive(Clone, Debug)]
pub struct TweenSet {
    tasks: FnvHashMap<TweenKey, Tween>,
    duration: f32,
    ease: Ease,
}

impl TweenSet {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            tasks: FnvHashMap::default(),
            duration,
            ease,
        }
    }

    /// Start animating `key` from `current` towards `target`, replacing any
    /// in-flight task on the same key.
    pub fn retarget(&mut self, key: TweenKey, current: f32, target: f32) {
        if current == target && !self.tasks.contains_key(&key) {
            return;
        }
        self.tasks
            .insert(key, Tween::new(current, target, self.duration, self.ease));
    }

    /// Step every task by `dt`, write the values into `particles` and drop the
    /// tasks that have finished. Tasks pointing past the end of `particles`
    /// are discarded.
    pub fn advance(&mut self, dt: f32, particles: &mut [Particle]) {
        self.tasks.retain(|key, tween| {
            let Some(p) = particles.get_mut(key.particle) else {
                return false;
            };
            p.set(key.attribute, tween.step(dt));
            !tween.is_finished()
        });
    }

    pub fn target(&self, key: TweenKey) -> Option<f32> {
        self.tasks.get(&key).map(|t| t.to)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints() {
        for e in [Ease::Linear, Ease::QuadOut, Ease::CubicOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
        assert!(Ease::QuadOut.apply(0.5) > 0.5);
    }

    #[test]
    fn ease_names() {
        assert_eq!(Ease::from_name("power1.out"), Some(Ease::QuadOut));
        assert_eq!(Ease::from_name("linear"), Some(Ease::Linear));
        assert_eq!(Ease::from_name("bounce"), None);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut t = Tween::new(1.0, 2.0, 0.0, Ease::Linear);
        assert!(t.is_finished());
        assert_eq!(t.step(0.0), 2.0);
    }

    #[test]
    fn linear_tween_midpoint() {
        let mut t = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        assert!((t.step(0.5) - 5.0).abs() < 1e-5);
        assert_eq!(t.step(10.0), 10.0);
        assert!(t.is_finished());
    }

    #[test]
    fn retarget_replaces_in_flight_task() {
        let mut set = TweenSet::new(1.0, Ease::Linear);
        let key = TweenKey::new(0, Attribute::Scale);
        set.retarget(key, 1.0, 2.0);
        set.retarget(key, 1.0, 1.5);
        assert_eq!(set.len(), 1);
        assert_eq!(set.target(key), Some(1.5));
    }

    #[test]
    fn retarget_to_current_value_without_task_is_noop() {
        let mut set = TweenSet::new(1.0, Ease::Linear);
        set.retarget(TweenKey::new(3, Attribute::Alpha), 0.2, 0.2);
        assert!(set.is_empty());
    }
}
