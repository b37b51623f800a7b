//! Orbiting camera driven by mouse drags and wheel spins.

use cgmath::{One as _, Zero as _};

use crate::linear::{rotate_x, rotate_y, rotate_z, M44, V2, V3};
use crate::projection::{perspective, Viewport};

/// Narrowest vertical field of view, in degrees.
pub const MIN_FOVY: f32 = 5.;
/// Widest vertical field of view, in degrees.
pub const MAX_FOVY: f32 = 150.;

/// A camera orbiting around a fixed center.
///
/// The camera exposes three matrices, recomputed whenever its state changes:
///
///   - `modelview`, the view transform;
///   - `persp`, the perspective projection;
///   - `fullview`, the product `persp * modelview`.
///
/// Dragging the mouse either rotates the view (yaw and pitch) or translates it in the screen plane;
/// both are expressed relative to the state at the time the mouse went down.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
  viewport: Viewport,
  /// Vertical field of view, in degrees.
  fovy: f32,
  z_near: f32,
  z_far: f32,
  /// Yaw, pitch and roll, in degrees.
  rotation: V3<f32>,
  translation: V3<f32>,
  rotation_center: V3<f32>,
  /// Degrees per pixel of drag.
  rotation_speed: f32,
  /// World units per pixel of drag.
  translation_speed: f32,
  /// Cursor position and camera state when the current drag began.
  drag_origin: Option<DragOrigin>,
  modelview: M44<f32>,
  persp: M44<f32>,
  fullview: M44<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
  cursor: V2<f32>,
  rotation: V3<f32>,
  translation: V3<f32>,
}

impl Camera {
  pub fn new(viewport: Viewport, rotation: V3<f32>, translation: V3<f32>, fovy: f32) -> Self {
    let mut camera = Camera {
      viewport,
      fovy: clamp_fovy(fovy),
      z_near: 0.001,
      z_far: 500.,
      rotation,
      translation,
      rotation_center: V3::zero(),
      rotation_speed: 0.3,
      translation_speed: 0.01,
      drag_origin: None,
      modelview: M44::one(),
      persp: M44::one(),
      fullview: M44::one(),
    };

    camera.recompute();
    camera
  }

  pub fn modelview(&self) -> &M44<f32> {
    &self.modelview
  }

  pub fn persp(&self) -> &M44<f32> {
    &self.persp
  }

  pub fn fullview(&self) -> &M44<f32> {
    &self.fullview
  }

  pub fn viewport(&self) -> Viewport {
    self.viewport
  }

  /// Yaw, pitch and roll, in degrees.
  pub fn rotation(&self) -> V3<f32> {
    self.rotation
  }

  pub fn translation(&self) -> V3<f32> {
    self.translation
  }

  /// Vertical field of view, in degrees.
  pub fn fov(&self) -> f32 {
    self.fovy
  }

  /// Change the vertical field of view; clamped to [`MIN_FOVY`, `MAX_FOVY`].
  pub fn set_fov(&mut self, fovy: f32) {
    self.fovy = clamp_fovy(fovy);
    self.recompute();
  }

  pub fn resize(&mut self, viewport: Viewport) {
    self.viewport = viewport;
    self.recompute();
  }

  /// Remember where a drag starts.
  pub fn mouse_down(&mut self, cursor: V2<f32>) {
    self.drag_origin = Some(DragOrigin {
      cursor,
      rotation: self.rotation,
      translation: self.translation,
    });
  }

  /// Rotate (or translate, with `shift`) by the cursor offset since [`Camera::mouse_down`].
  ///
  /// A drag without a preceding mouse down is ignored.
  pub fn mouse_drag(&mut self, cursor: V2<f32>, shift: bool) {
    let origin = match self.drag_origin {
      Some(origin) => origin,
      None => return,
    };
    let dif = cursor - origin.cursor;

    if shift {
      self.translation = origin.translation + V3::new(dif.x, dif.y, 0.) * self.translation_speed;
    } else {
      self.rotation = origin.rotation + V3::new(dif.x, -dif.y, 0.) * self.rotation_speed;
    }

    self.recompute();
  }

  pub fn mouse_up(&mut self) {
    self.drag_origin = None;
  }

  /// Roll the view, or move along the view axis with `shift`.
  pub fn mouse_wheel(&mut self, forward: bool, shift: bool) {
    let sign = if forward { 1. } else { -1. };

    if shift {
      self.translation.z += 0.5 * sign;
    } else {
      self.rotation.z += 5. * sign;
    }

    self.recompute();
  }

  fn recompute(&mut self) {
    let center = M44::from_translation(self.rotation_center);
    let uncenter = M44::from_translation(-self.rotation_center);
    let orientation = rotate_z(self.rotation.z) * rotate_x(self.rotation.y) * rotate_y(self.rotation.x);

    self.modelview = M44::from_translation(self.translation) * center * orientation * uncenter;
    self.persp = perspective(self.fovy, self.viewport.aspect_ratio(), self.z_near, self.z_far);
    self.fullview = self.persp * self.modelview;
  }
}

fn clamp_fovy(fovy: f32) -> f32 {
  fovy.max(MIN_FOVY).min(MAX_FOVY)
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::Zero as _;

  fn camera() -> Camera {
    Camera::new(Viewport::new(800, 600), V3::zero(), V3::new(0., 0., -7.), 30.)
  }

  #[test]
  fn drag_rotates_without_shift() {
    let mut cam = camera();
    cam.mouse_down(V2::new(100., 100.));
    cam.mouse_drag(V2::new(110., 90.), false);

    assert_eq!(cam.translation(), V3::new(0., 0., -7.));
    assert!((cam.rotation().x - 3.).abs() < 1e-5);
    assert!((cam.rotation().y - 3.).abs() < 1e-5);
    assert_eq!(cam.rotation().z, 0.);
  }

  #[test]
  fn drag_translates_with_shift() {
    let mut cam = camera();
    cam.mouse_down(V2::new(100., 100.));
    cam.mouse_drag(V2::new(200., 100.), true);

    assert_eq!(cam.rotation(), V3::zero());
    assert!((cam.translation().x - 1.).abs() < 1e-6);
  }

  #[test]
  fn drag_is_relative_to_mouse_down() {
    let mut cam = camera();
    cam.mouse_down(V2::new(0., 0.));
    cam.mouse_drag(V2::new(10., 0.), false);
    cam.mouse_drag(V2::new(20., 0.), false);

    assert!((cam.rotation().x - 6.).abs() < 1e-6);
  }

  #[test]
  fn drag_without_mouse_down_is_ignored() {
    let mut cam = camera();
    let before = cam.clone();
    cam.mouse_drag(V2::new(50., 50.), false);

    assert_eq!(cam, before);

    cam.mouse_down(V2::new(0., 0.));
    cam.mouse_up();
    cam.mouse_drag(V2::new(50., 50.), true);

    assert_eq!(cam.translation(), before.translation());
  }

  #[test]
  fn wheel_zooms_with_shift_and_rolls_without() {
    let mut cam = camera();
    cam.mouse_wheel(true, true);
    assert_eq!(cam.translation(), V3::new(0., 0., -6.5));
    assert_eq!(cam.rotation(), V3::zero());

    cam.mouse_wheel(false, false);
    assert_eq!(cam.rotation(), V3::new(0., 0., -5.));
  }

  #[test]
  fn fov_is_clamped() {
    let mut cam = camera();
    cam.set_fov(1.);
    assert_eq!(cam.fov(), MIN_FOVY);
    cam.set_fov(400.);
    assert_eq!(cam.fov(), MAX_FOVY);
  }

  #[test]
  fn fullview_is_persp_times_modelview() {
    let mut cam = camera();
    cam.mouse_down(V2::new(0., 0.));
    cam.mouse_drag(V2::new(30., 12.), false);

    assert_eq!(*cam.fullview(), *cam.persp() * *cam.modelview());
  }
}
