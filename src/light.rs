use crate::linear::{Color, M44, Point3, V2};
use crate::projection::{from_screen, to_screen, Viewport};

/// Distance, in pixels, under which the cursor is considered over the light marker.
pub const PICK_PROXIMITY: f32 = 12.;

/// A movable point light, drawn as a small disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
  pub position: Point3<f32>,
  /// Color of the on-screen marker.
  pub marker_color: Color,
  /// Diameter of the on-screen marker, in pixels.
  pub marker_size: f32,
}

impl Light {
  pub fn new(position: Point3<f32>) -> Self {
    Light {
      position,
      marker_color: Color::new(1., 0., 0., 1.),
      marker_size: 12.,
    }
  }

  /// Whether `cursor` (screen coordinates, y up) lies over the light marker.
  pub fn is_under(&self, cursor: V2<f32>, fullview: &M44<f32>, viewport: Viewport) -> bool {
    match to_screen(self.position, fullview, viewport) {
      Some(s) => {
        let d = s.pos - cursor;
        d.x * d.x + d.y * d.y < PICK_PROXIMITY * PICK_PROXIMITY
      }

      None => false,
    }
  }
}

/// Drags a point in the plane parallel to the screen, at the depth it had when picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightMover {
  /// Normalized device depth of the point when it was picked.
  depth: f32,
  /// Offset from the cursor to the projected point, so the point doesn’t jump under the cursor.
  grab_offset: V2<f32>,
}

impl LightMover {
  /// Start moving `position`; `None` if it cannot be projected (behind the eye).
  pub fn down(position: Point3<f32>, cursor: V2<f32>, fullview: &M44<f32>, viewport: Viewport) -> Option<Self> {
    to_screen(position, fullview, viewport).map(|s| LightMover {
      depth: s.depth,
      grab_offset: s.pos - cursor,
    })
  }

  /// New world position for the cursor at `cursor`.
  pub fn drag(&self, cursor: V2<f32>, fullview: &M44<f32>, viewport: Viewport) -> Option<Point3<f32>> {
    from_screen(cursor + self.grab_offset, self.depth, fullview, viewport)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::projection::perspective;
  use cgmath::MetricSpace as _;

  fn setup() -> (M44<f32>, Viewport) {
    let vp = Viewport::new(800, 600);
    let m = perspective(30., vp.aspect_ratio(), 0.1, 100.) * M44::from_translation([0., 0., -7.].into());
    (m, vp)
  }

  #[test]
  fn pick_only_near_marker() {
    let (m, vp) = setup();
    let light = Light::new(Point3::new(-1.5, 1.5, 1.));
    let s = to_screen(light.position, &m, vp).unwrap();

    assert!(light.is_under(s.pos, &m, vp));
    assert!(light.is_under(s.pos + V2::new(5., 5.), &m, vp));
    assert!(!light.is_under(s.pos + V2::new(20., 0.), &m, vp));
  }

  #[test]
  fn drag_keeps_depth() {
    let (m, vp) = setup();
    let start = Point3::new(-1.5, 1.5, 1.);
    let s = to_screen(start, &m, vp).unwrap();
    let mover = LightMover::down(start, s.pos + V2::new(2., -3.), &m, vp).unwrap();

    // not moving the cursor doesn’t move the light
    let same = mover.drag(s.pos + V2::new(2., -3.), &m, vp).unwrap();
    assert!(same.distance(start) < 1e-3, "{:?}", same);

    let moved = mover.drag(s.pos + V2::new(102., -3.), &m, vp).unwrap();
    let t = to_screen(moved, &m, vp).unwrap();

    assert!((t.depth - s.depth).abs() < 1e-4);
    assert!((t.pos.x - (s.pos.x + 100.)).abs() < 0.1);
    assert!(moved.x > start.x);
  }
}
