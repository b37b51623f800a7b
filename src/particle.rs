//! Fixed-size particle arena.
//!
//! Particles are never allocated nor freed once the pool exists: dead slots are found by a
//! round-robin search starting at the last slot handed out, and revived in place.

use rand::Rng;

use crate::linear::{Color, Vector3, V3};

/// Number of slots in the tears pool.
pub const POOL_SIZE: usize = 500;
/// Constant velocity applied after every step.
pub const GRAVITY: V3<f32> = Vector3 { x: 0., y: -0.0025, z: 0. };
/// Life lost per step.
pub const LIFE_STEP: f32 = 0.005;
/// Bound on the horizontal components of a revived particle’s velocity.
pub const H_VARIANCE: f32 = 0.01;
/// Range of the vertical component of a revived particle’s velocity.
pub const V_SPEED_MIN: f32 = 0.025;
pub const V_SPEED_MAX: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
  pub pos: V3<f32>,
  pub vel: V3<f32>,
  pub color: Color,
  /// 1 when fresh; the particle is dead once this reaches zero or below.
  pub life: f32,
}

impl Default for Particle {
  fn default() -> Self {
    Particle {
      pos: V3::new(0., 0., 0.),
      vel: V3::new(0., 0., 0.),
      color: Color::new(1., 1., 1., 1.),
      life: 0.,
    }
  }
}

impl Particle {
  pub fn is_alive(&self) -> bool {
    self.life > 0.
  }

  /// Bring the particle back to life at `pos` with a random upward velocity.
  pub fn revive<R>(&mut self, pos: V3<f32>, rng: &mut R) where R: Rng {
    self.life = 1.;
    self.pos = pos;
    self.vel = V3::new(
      rng.gen_range(-H_VARIANCE..=H_VARIANCE),
      rng.gen_range(V_SPEED_MIN..=V_SPEED_MAX),
      rng.gen_range(-H_VARIANCE..=H_VARIANCE),
    );
  }

  /// Advance a live particle by one step; dead particles are left untouched.
  ///
  /// The velocity is replaced by gravity rather than accelerated by it, so after the first step
  /// a particle falls at a constant rate.
  pub fn step(&mut self) {
    if !self.is_alive() {
      return;
    }

    self.life -= LIFE_STEP;
    self.pos += self.vel;
    self.vel = GRAVITY;
    self.color = Color::new(0., self.life, 1., 0.);
  }
}

/// Arena of particles with round-robin recycling.
#[derive(Clone, Debug)]
pub struct ParticlePool {
  particles: Box<[Particle]>,
  last_used: usize,
}

impl ParticlePool {
  /// Create a pool of `size` dead particles.
  pub fn new(size: usize) -> Self {
    ParticlePool {
      particles: vec![Particle::default(); size].into_boxed_slice(),
      last_used: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.particles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.particles.is_empty()
  }

  pub fn last_used(&self) -> usize {
    self.last_used
  }

  pub fn particles(&self) -> &[Particle] {
    &self.particles
  }

  pub fn particles_mut(&mut self) -> &mut [Particle] {
    &mut self.particles
  }

  pub fn alive_count(&self) -> usize {
    self.particles.iter().filter(|p| p.is_alive()).count()
  }

  /// Index of the next dead slot, searching from the last slot handed out and wrapping around.
  ///
  /// When every particle is alive, slot 0 is taken.
  pub fn next_free(&mut self) -> usize {
    let n = self.particles.len();
    let start = self.last_used.min(n);
    let found = (start..n)
      .chain(0..start)
      .find(|&i| !self.particles[i].is_alive())
      .unwrap_or(0);

    self.last_used = found;
    found
  }

  /// Revive one particle at `pos`; returns its slot, or `None` for an empty pool.
  pub fn spawn_one<R>(&mut self, pos: V3<f32>, rng: &mut R) -> Option<usize> where R: Rng {
    if self.particles.is_empty() {
      return None;
    }

    let i = self.next_free();
    self.particles[i].revive(pos, rng);
    Some(i)
  }

  /// Revive `count` particles at `pos`.
  pub fn spawn<R>(&mut self, count: usize, pos: V3<f32>, rng: &mut R) where R: Rng {
    for _ in 0..count {
      self.spawn_one(pos, rng);
    }
  }

  /// Step every live particle once.
  pub fn step_all(&mut self) {
    for p in self.particles.iter_mut() {
      p.step();
    }
  }
}

impl Default for ParticlePool {
  fn default() -> Self {
    ParticlePool::new(POOL_SIZE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn step_replaces_velocity_with_gravity() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut p = Particle::default();
    p.revive(V3::new(0., 0., 0.), &mut rng);
    let v0 = p.vel;

    p.step();
    assert_eq!(p.pos, v0);
    assert_eq!(p.vel, GRAVITY);

    p.step();
    assert_eq!(p.pos, v0 + GRAVITY);
    assert_eq!(p.vel, GRAVITY);
  }

  #[test]
  fn color_tracks_life() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut p = Particle::default();
    p.revive(V3::new(0., 0., 0.), &mut rng);
    p.step();

    assert_eq!(p.color, Color::new(0., p.life, 1., 0.));
  }

  #[test]
  fn next_free_defaults_to_zero_when_full() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = ParticlePool::new(4);
    pool.spawn(4, V3::new(0., 0., 0.), &mut rng);

    assert_eq!(pool.alive_count(), 4);
    assert_eq!(pool.next_free(), 0);
    assert_eq!(pool.last_used(), 0);
  }

  #[test]
  fn next_free_wraps_around() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut pool = ParticlePool::new(5);
    pool.spawn(5, V3::new(0., 0., 0.), &mut rng);

    // free slot 1 and make the search start past it
    pool.particles_mut()[1].life = 0.;
    pool.last_used = 3;

    assert_eq!(pool.next_free(), 1);
    assert_eq!(pool.last_used(), 1);
  }

  #[test]
  fn empty_pool_spawns_nothing() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut pool = ParticlePool::new(0);

    pool.spawn(5, V3::new(0., 0., 0.), &mut rng);

    assert_eq!(pool.spawn_one(V3::new(0., 0., 0.), &mut rng), None);
  }
}
