//! Screen-space disk markers.

use cgmath::EuclideanSpace as _;

use sketchbook::linear::{Color, M44, Point3};

use crate::mesh::AttributelessVao;
use crate::shader::{Program, ShaderError};

pub(crate) const DISK_VS: &str = r#"
#version 400 core

uniform mat4 fullview;
uniform vec3 center;
uniform float size;

void main() {
  gl_Position = fullview * vec4(center, 1.);
  gl_PointSize = size;
}
"#;

pub(crate) const DISK_FS: &str = r#"
#version 400 core

uniform vec4 color;

out vec4 frag;

void main() {
  vec2 p = gl_PointCoord * 2. - 1.;

  if (dot(p, p) > 1.) {
    discard;
  }

  frag = color;
}
"#;

/// Draws a filled disk of constant pixel size around a world-space point.
pub struct DiskRenderer {
  program: Program,
  vao: AttributelessVao,
}

impl DiskRenderer {
  pub fn new() -> Result<Self, ShaderError> {
    Ok(DiskRenderer {
      program: Program::new(DISK_VS, None, DISK_FS)?,
      vao: AttributelessVao::new(),
    })
  }

  /// Draw a disk of diameter `size` pixels at `center`.
  pub fn draw(&self, center: Point3<f32>, size: f32, color: Color, fullview: &M44<f32>) {
    self.program.bind();
    self.program.set_mat4("fullview", fullview);
    self.program.set_vec3("center", center.to_vec());
    self.program.set_f32("size", size);
    self.program.set_vec4("color", color);
    self.vao.bind();

    unsafe {
      gl::Enable(gl::PROGRAM_POINT_SIZE);
      gl::DrawArrays(gl::POINTS, 0, 1);
      gl::Disable(gl::PROGRAM_POINT_SIZE);
    }
  }
}
