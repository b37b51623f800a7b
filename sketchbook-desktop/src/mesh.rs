//! GPU geometry.

use gl::types::{GLsizei, GLsizeiptr, GLuint};
use std::mem::size_of_val;
use std::os::raw::c_void;
use std::ptr::null;

use sketchbook::cube;

/// A vertex array with no attribute, for shaders that generate their vertices themselves.
#[derive(Debug)]
pub struct AttributelessVao {
  handle: GLuint,
}

impl AttributelessVao {
  pub fn new() -> Self {
    let mut handle = 0;
    unsafe { gl::GenVertexArrays(1, &mut handle) };

    AttributelessVao { handle }
  }

  pub fn bind(&self) {
    unsafe { gl::BindVertexArray(self.handle) }
  }
}

impl Drop for AttributelessVao {
  fn drop(&mut self) {
    unsafe { gl::DeleteVertexArrays(1, &self.handle) }
  }
}

/// The unit cube, uploaded once as positions (attribute 0) and triangle indices.
#[derive(Debug)]
pub struct CubeMesh {
  vao: GLuint,
  vbo: GLuint,
  ibo: GLuint,
}

impl CubeMesh {
  pub fn new() -> Self {
    let (mut vao, mut vbo, mut ibo) = (0, 0, 0);

    unsafe {
      gl::GenVertexArrays(1, &mut vao);
      gl::BindVertexArray(vao);

      gl::GenBuffers(1, &mut vbo);
      gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
      gl::BufferData(
        gl::ARRAY_BUFFER,
        size_of_val(&cube::VERTICES) as GLsizeiptr,
        cube::VERTICES.as_ptr() as *const c_void,
        gl::STATIC_DRAW,
      );

      gl::EnableVertexAttribArray(0);
      gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 0, null());

      gl::GenBuffers(1, &mut ibo);
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ibo);
      gl::BufferData(
        gl::ELEMENT_ARRAY_BUFFER,
        size_of_val(&cube::TRIANGLES) as GLsizeiptr,
        cube::TRIANGLES.as_ptr() as *const c_void,
        gl::STATIC_DRAW,
      );

      gl::BindVertexArray(0);
    }

    CubeMesh { vao, vbo, ibo }
  }

  pub fn draw(&self) {
    unsafe {
      gl::BindVertexArray(self.vao);
      gl::DrawElements(gl::TRIANGLES, cube::INDEX_COUNT as GLsizei, gl::UNSIGNED_INT, null());
    }
  }
}

impl Drop for CubeMesh {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteBuffers(1, &self.ibo);
      gl::DeleteBuffers(1, &self.vbo);
      gl::DeleteVertexArrays(1, &self.vao);
    }
  }
}
