//! A unit cube, used for every shape of the face sketch.

// A unit cube (-1 to 1 on every axis).
//
//     5-----7
//    /|    /|
//   1-+---3 |
//   | 4---+-6
//   |/    |/
//   0-----2
pub const VERTICES: [[f32; 3]; 8] = [
  [-1., -1., -1.],
  [-1.,  1., -1.],
  [ 1., -1., -1.],
  [ 1.,  1., -1.],
  [-1., -1.,  1.],
  [-1.,  1.,  1.],
  [ 1., -1.,  1.],
  [ 1.,  1.,  1.],
];

pub const TRIANGLES: [[u32; 3]; 12] = [
  [1, 2, 3], [0, 1, 2], // near face
  [5, 6, 7], [4, 5, 6], // far face
  [1, 4, 5], [0, 1, 4], // left face
  [3, 6, 7], [2, 3, 6], // right face
  [2, 4, 6], [0, 2, 4], // bottom face
  [3, 5, 7], [1, 3, 5], // top face
];

/// Number of indices to draw the whole cube.
pub const INDEX_COUNT: usize = TRIANGLES.len() * 3;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_vertex_is_used() {
    let mut used = [false; 8];

    for tri in &TRIANGLES {
      for &i in tri {
        used[i as usize] = true;
      }
    }

    assert!(used.iter().all(|&u| u));
  }

  #[test]
  fn triangles_are_not_degenerate() {
    for tri in &TRIANGLES {
      assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
    }
  }
}
