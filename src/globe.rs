//! The tessellated globe.
//!
//! The globe has no mesh: the GPU expands a single 4-vertex patch and the tessellation evaluation
//! stage places every vertex analytically. [`surface_point`] and [`surface_normal`] are the CPU
//! rendition of that stage; the shader must stay in sync with them.

use std::f32::consts::PI;

use crate::camera::Camera;
use crate::input::{DragState, DragTarget};
use crate::light::{Light, LightMover};
use crate::linear::{rotate_y, rotate_z, M44, Point3, V2, V3, V4};
use crate::projection::Viewport;

/// Outer and inner tessellation level of the globe patch.
pub const TESS_LEVEL: f32 = 25.;
/// Vertices per patch.
pub const PATCH_VERTICES: i32 = 4;
/// Axial tilt, in degrees.
pub const AXIAL_TILT: f32 = 23.4;
/// Precession of the tilted axis, in degrees per second.
pub const PRECESSION_SPEED: f32 = 30.;
/// Spin around the tilted axis, in degrees per second.
pub const SPIN_SPEED: f32 = 180.;

/// Point of the globe surface at patch coordinates (`u`, `v`) and time `t`.
///
/// `u` runs along the longitude, `v` from the south pole (0) to the north pole (1). Over time the
/// surface breathes between a sphere and a cylinder: the horizontal radius at a given elevation
/// is `cos(b * elevation)` with `b = shape_blend(t)`, which is the unit sphere whenever `|b|` is 1
/// (at `t = 0` in particular) and a unit cylinder whenever it is 0.
pub fn surface_point(u: f32, v: f32, t: f32) -> V3<f32> {
  let elevation = PI * v - PI / 2.;
  let y = elevation.sin();
  let angle = 2. * PI * (1. - u);
  let r = (shape_blend(t) * elevation).cos();

  V3::new(r * angle.cos(), y, r * angle.sin())
}

/// Normal used for shading [`surface_point`]; flattens toward horizontal as the shape becomes a
/// cylinder.
pub fn surface_normal(u: f32, v: f32, t: f32) -> V3<f32> {
  let p = surface_point(u, v, t);
  V3::new(p.x, shape_blend(t).abs() * p.y, p.z)
}

/// Blend factor between cylinder (0) and sphere (±1).
pub fn shape_blend(t: f32) -> f32 {
  t.cos()
}

/// Model matrix of the globe at time `t`: spin, then axial tilt, then precession.
pub fn model_matrix(t: f32) -> M44<f32> {
  rotate_y(-PRECESSION_SPEED * t) * rotate_z(-AXIAL_TILT) * rotate_y(SPIN_SPEED * t)
}

/// Whole state of the globe sketch.
#[derive(Clone, Debug)]
pub struct GlobeScene {
  pub camera: Camera,
  pub light: Light,
  drag: DragState,
}

impl GlobeScene {
  pub fn new(viewport: Viewport, fovy: f32) -> Self {
    GlobeScene {
      camera: Camera::new(viewport, V3::new(0., 0., 0.), V3::new(0., 0., -7.), fovy),
      light: Light::new(Point3::new(-1.5, 1.5, 1.)),
      drag: DragState::Idle,
    }
  }

  pub fn drag_state(&self) -> DragState {
    self.drag
  }

  /// Modelview of the globe at time `t`.
  pub fn modelview(&self, t: f32) -> M44<f32> {
    *self.camera.modelview() * model_matrix(t)
  }

  /// Light position in eye space.
  pub fn light_eye(&self) -> V3<f32> {
    let p = self.light.position;
    (*self.camera.modelview() * V4::new(p.x, p.y, p.z, 1.)).truncate()
  }

  /// Mouse went down at `cursor` (screen coordinates, y up): pick the light if the cursor is over
  /// it, the camera otherwise.
  pub fn mouse_press(&mut self, cursor: V2<f32>) {
    let viewport = self.camera.viewport();
    let fullview = *self.camera.fullview();
    let mover = if self.light.is_under(cursor, &fullview, viewport) {
      LightMover::down(self.light.position, cursor, &fullview, viewport)
    } else {
      None
    };

    match mover {
      Some(mover) => self.drag.press(DragTarget::Light(mover)),
      None => {
        self.drag.press(DragTarget::Camera);
        self.camera.mouse_down(cursor);
      }
    }
  }

  pub fn mouse_release(&mut self) {
    if let Some(DragTarget::Camera) = self.drag.release() {
      self.camera.mouse_up();
    }
  }

  pub fn cursor_move(&mut self, cursor: V2<f32>, shift: bool) {
    match self.drag.target() {
      Some(DragTarget::Light(mover)) => {
        if let Some(p) = mover.drag(cursor, self.camera.fullview(), self.camera.viewport()) {
          self.light.position = p;
        }
      }

      Some(DragTarget::Camera) => self.camera.mouse_drag(cursor, shift),

      None => (),
    }
  }

  pub fn scroll(&mut self, forward: bool, shift: bool) {
    self.camera.mouse_wheel(forward, shift);
  }

  pub fn resize(&mut self, viewport: Viewport) {
    self.camera.resize(viewport);
  }
}
