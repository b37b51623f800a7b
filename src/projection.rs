//! Perspective setup and screen-space mapping.
//!
//! Screen coordinates used throughout this crate have their origin at the lower-left corner of
//! the viewport and grow upward, like OpenGL window coordinates.

use cgmath::{perspective as cg_perspective, Deg, SquareMatrix as _};

use crate::linear::{M44, Point3, V2, V4};

/// Build a perspective matrix from a vertical field of view in degrees.
pub fn perspective(fovy: f32, ratio: f32, znear: f32, zfar: f32) -> M44<f32> {
  cg_perspective(Deg(fovy), ratio, znear, zfar)
}

/// Dimension of the drawable area, in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Viewport {
  pub width: u32,
  pub height: u32,
}

impl Viewport {
  pub fn new(width: u32, height: u32) -> Self {
    Viewport { width, height }
  }

  /// Width over height; a degenerate (minimized or zero-width) viewport yields 1.
  pub fn aspect_ratio(&self) -> f32 {
    if self.width == 0 || self.height == 0 {
      1.
    } else {
      self.width as f32 / self.height as f32
    }
  }

  /// Convert a cursor position reported with a top-left origin into screen coordinates.
  pub fn flip_y(&self, cursor: [f64; 2]) -> V2<f32> {
    V2::new(cursor[0] as f32, self.height as f32 - cursor[1] as f32)
  }
}

/// A point projected onto the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
  /// Position in pixels.
  pub pos: V2<f32>,
  /// Normalized device depth, in [-1, 1] when inside the frustum.
  pub depth: f32,
}

/// Project a world point with a full (projection × view × model) matrix.
///
/// Returns `None` for points behind the eye.
pub fn to_screen(p: Point3<f32>, fullview: &M44<f32>, viewport: Viewport) -> Option<ScreenPoint> {
  let clip = *fullview * V4::new(p.x, p.y, p.z, 1.);

  if clip.w <= 0. {
    return None;
  }

  let ndc = clip.truncate() / clip.w;
  let pos = V2::new(
    (ndc.x + 1.) * 0.5 * viewport.width as f32,
    (ndc.y + 1.) * 0.5 * viewport.height as f32,
  );

  Some(ScreenPoint { pos, depth: ndc.z })
}

/// Unproject a screen position at a given normalized device depth back into world space.
pub fn from_screen(pos: V2<f32>, depth: f32, fullview: &M44<f32>, viewport: Viewport) -> Option<Point3<f32>> {
  let inv = fullview.invert()?;
  let ndc = V4::new(
    2. * pos.x / viewport.width.max(1) as f32 - 1.,
    2. * pos.y / viewport.height.max(1) as f32 - 1.,
    depth,
    1.,
  );
  let world = inv * ndc;

  if world.w.abs() < f32::EPSILON {
    None
  } else {
    Some(Point3::from_homogeneous(world))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::MetricSpace as _;

  #[test]
  fn screen_round_trip() {
    let vp = Viewport::new(800, 600);
    let m = perspective(30., vp.aspect_ratio(), 0.1, 100.) * M44::from_translation([0., 0., -7.].into());
    let p = Point3::new(-1.5, 1.5, 1.);

    let s = to_screen(p, &m, vp).unwrap();
    let q = from_screen(s.pos, s.depth, &m, vp).unwrap();

    assert!(p.distance(q) < 1e-3, "{:?} vs {:?}", p, q);
  }

  #[test]
  fn origin_projects_to_center() {
    let vp = Viewport::new(640, 480);
    let m = perspective(45., vp.aspect_ratio(), 0.1, 100.) * M44::from_translation([0., 0., -5.].into());
    let s = to_screen(Point3::new(0., 0., 0.), &m, vp).unwrap();

    assert!((s.pos.x - 320.).abs() < 1e-3);
    assert!((s.pos.y - 240.).abs() < 1e-3);
  }

  #[test]
  fn behind_eye_is_not_projected() {
    let vp = Viewport::new(640, 480);
    let m = perspective(45., vp.aspect_ratio(), 0.1, 100.);

    assert_eq!(to_screen(Point3::new(0., 0., 5.), &m, vp), None);
  }

  #[test]
  fn degenerate_viewports_have_unit_aspect() {
    assert_eq!(Viewport::new(0, 750).aspect_ratio(), 1.);
    assert_eq!(Viewport::new(750, 0).aspect_ratio(), 1.);
    assert_eq!(Viewport::new(0, 0).aspect_ratio(), 1.);
    assert_eq!(Viewport::new(800, 400).aspect_ratio(), 2.);
  }

  #[test]
  fn flip_y_uses_viewport_height() {
    let vp = Viewport::new(100, 50);
    assert_eq!(vp.flip_y([10., 5.]), V2::new(10., 45.));
  }
}
