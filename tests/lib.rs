use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use sketchbook::camera::Camera;
use sketchbook::face::{AudioCue, Expression, FaceScene};
use sketchbook::globe::surface_point;
use sketchbook::linear::{V2, V3};
use sketchbook::particle::{ParticlePool, H_VARIANCE, LIFE_STEP, POOL_SIZE, V_SPEED_MAX, V_SPEED_MIN};
use sketchbook::projection::Viewport;

fn origin() -> V3<f32> {
  V3::new(0., 0., 0.)
}

#[test]
fn pool_starts_dead() {
  let pool = ParticlePool::default();

  assert_eq!(pool.len(), POOL_SIZE);
  assert!(pool.particles().iter().all(|p| p.life == 0. && !p.is_alive()));
}

#[test]
fn revive_bounds() {
  let mut rng = StdRng::seed_from_u64(0xdead);
  let mut pool = ParticlePool::default();

  for _ in 0..POOL_SIZE {
    let i = pool.spawn_one(origin(), &mut rng).unwrap();
    let p = &pool.particles()[i];

    assert_eq!(p.life, 1.);
    assert!(p.vel.x >= -H_VARIANCE && p.vel.x <= H_VARIANCE);
    assert!(p.vel.z >= -H_VARIANCE && p.vel.z <= H_VARIANCE);
    assert!(p.vel.y >= V_SPEED_MIN && p.vel.y <= V_SPEED_MAX);
    assert!(p.vel.y > 0.);
  }
}

#[test]
fn batch_never_revives_a_slot_twice() {
  let mut rng = StdRng::seed_from_u64(42);
  let mut pool = ParticlePool::default();

  for _ in 0..1000 {
    // kill a random handful so the pool is fragmented
    for _ in 0..10 {
      let i = rng.gen_range(0..POOL_SIZE);
      pool.particles_mut()[i].life = 0.;
    }

    let dead = POOL_SIZE - pool.alive_count();
    let n = dead.min(5);
    let slots: Vec<_> = (0..n).map(|_| pool.spawn_one(origin(), &mut rng).unwrap()).collect();
    let unique: HashSet<_> = slots.iter().collect();

    assert_eq!(unique.len(), n, "{:?}", slots);
  }
}

#[test]
fn search_resumes_from_last_allocated() {
  let mut rng = StdRng::seed_from_u64(9);
  let mut pool = ParticlePool::new(10);

  let first: Vec<_> = (0..3).map(|_| pool.spawn_one(origin(), &mut rng).unwrap()).collect();
  assert_eq!(first, vec![0, 1, 2]);
  assert_eq!(pool.last_used(), 2);

  // slot 0 is free again, but the search starts from 2 and finds 3 first
  pool.particles_mut()[0].life = 0.;
  assert_eq!(pool.spawn_one(origin(), &mut rng), Some(3));

  // fill up to the end, then wrap to the freed slot 0
  for expected in 4..10 {
    assert_eq!(pool.spawn_one(origin(), &mut rng), Some(expected));
  }

  assert_eq!(pool.spawn_one(origin(), &mut rng), Some(0));
}

#[test]
fn decay_until_dead() {
  let mut rng = StdRng::seed_from_u64(3);
  let mut pool = ParticlePool::new(1);
  pool.spawn_one(origin(), &mut rng);

  let mut last = pool.particles()[0].life;
  let mut steps = 0;

  while pool.particles()[0].is_alive() {
    pool.step_all();
    let life = pool.particles()[0].life;

    assert!((last - life - LIFE_STEP).abs() < 1e-6);
    last = life;
    steps += 1;
  }

  assert!(steps >= 199 && steps <= 201, "{}", steps);

  let dead = pool.particles()[0];
  for _ in 0..10 {
    pool.step_all();
  }

  assert_eq!(pool.particles()[0], dead);
}

#[test]
fn expression_toggle() {
  let mut face = FaceScene::new(Viewport::new(750, 750), 30.);
  assert_eq!(face.expression(), Expression::Smile);

  assert_eq!(face.set_crying(true), Some(AudioCue::Play));
  assert_eq!(face.expression(), Expression::Frown);
  assert_eq!(face.expression().cheek_y(), -0.5);
  assert_eq!(face.expression().mouth_y(), -0.3);

  // held: nothing changes, audio isn’t restarted
  assert_eq!(face.set_crying(true), None);
  assert_eq!(face.expression(), Expression::Frown);

  assert_eq!(face.set_crying(false), Some(AudioCue::Stop));
  assert_eq!(face.expression(), Expression::Smile);
  assert_eq!(face.expression().cheek_y(), -0.3);
  assert_eq!(face.expression().mouth_y(), -0.5);

  assert_eq!(face.set_crying(false), None);
}

#[test]
fn camera_drag_modes_are_exclusive() {
  let mut rng = StdRng::seed_from_u64(17);

  for _ in 0..100 {
    let mut cam = Camera::new(Viewport::new(800, 600), V3::new(0., 0., 0.), V3::new(0., 0., -7.), 30.);
    let shift = rng.gen::<bool>();
    let from = V2::new(rng.gen_range(0. ..800.), rng.gen_range(0. ..600.));
    let to = from + V2::new(rng.gen_range(1. ..100.), rng.gen_range(1. ..100.));
    let (rotation, translation) = (cam.rotation(), cam.translation());

    cam.mouse_down(from);
    cam.mouse_drag(to, shift);
    cam.mouse_up();

    if shift {
      assert_eq!(cam.rotation(), rotation);
      assert_ne!(cam.translation(), translation);
    } else {
      assert_eq!(cam.translation(), translation);
      assert_ne!(cam.rotation(), rotation);
    }
  }
}

#[test]
fn globe_is_unit_sphere_at_time_zero() {
  let mut rng = StdRng::seed_from_u64(1);

  for _ in 0..10_000 {
    let (u, v) = (rng.gen::<f32>(), rng.gen::<f32>());
    let p = surface_point(u, v, 0.);

    assert!((p.x * p.x + p.y * p.y + p.z * p.z - 1.).abs() < 1e-5);
  }
}
