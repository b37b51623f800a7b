//! Shader programs.
//!
//! A program is made of a vertex stage, an optional tessellation evaluation stage and a fragment
//! stage. No tessellation control stage is ever used: the patch levels come from the defaults set
//! with `glPatchParameterfv`.

use cgmath::Matrix as _;
use gl::types::{GLchar, GLenum, GLint, GLuint};
use std::error::Error;
use std::ffi::CString;
use std::fmt;
use std::ptr::{null, null_mut};

use sketchbook::linear::{M44, V3, V4};

/// Shader stage kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageKind {
  Vertex,
  TessellationEvaluation,
  Fragment,
}

impl StageKind {
  fn to_gl(self) -> GLenum {
    match self {
      StageKind::Vertex => gl::VERTEX_SHADER,
      StageKind::TessellationEvaluation => gl::TESS_EVALUATION_SHADER,
      StageKind::Fragment => gl::FRAGMENT_SHADER,
    }
  }
}

impl fmt::Display for StageKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageKind::Vertex => f.write_str("vertex"),
      StageKind::TessellationEvaluation => f.write_str("tessellation evaluation"),
      StageKind::Fragment => f.write_str("fragment"),
    }
  }
}

/// Error that might occur while building a shader program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShaderError {
  /// A stage didn’t compile; carries the driver’s info log.
  CompilationFailed(StageKind, String),
  /// The stages didn’t link; carries the driver’s info log.
  LinkFailed(String),
}

impl fmt::Display for ShaderError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ShaderError::CompilationFailed(kind, ref log) => write!(f, "{} stage compilation failed:\n{}", kind, log),
      ShaderError::LinkFailed(ref log) => write!(f, "shader program link failed:\n{}", log),
    }
  }
}

impl Error for ShaderError {}

/// A compiled shader stage.
struct Stage {
  handle: GLuint,
}

impl Stage {
  fn new(kind: StageKind, src: &str) -> Result<Self, ShaderError> {
    let src = CString::new(src).map_err(|e| ShaderError::CompilationFailed(kind, e.to_string()))?;

    unsafe {
      let handle = gl::CreateShader(kind.to_gl());
      let stage = Stage { handle };

      gl::ShaderSource(handle, 1, &src.as_ptr(), null());
      gl::CompileShader(handle);

      let mut compiled: GLint = gl::FALSE as GLint;
      gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

      let log = shader_info_log(handle);

      if compiled == gl::TRUE as GLint {
        if has_warnings(&log) {
          log::warn!("{} stage compiled with warnings:\n{}", kind, log);
        }

        Ok(stage)
      } else {
        Err(ShaderError::CompilationFailed(kind, log))
      }
    }
  }
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe { gl::DeleteShader(self.handle) }
  }
}

/// A linked shader program.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
}

impl Program {
  pub fn new(vs_src: &str, tes_src: Option<&str>, fs_src: &str) -> Result<Self, ShaderError> {
    let vs = Stage::new(StageKind::Vertex, vs_src)?;
    let tes = match tes_src {
      Some(src) => Some(Stage::new(StageKind::TessellationEvaluation, src)?),
      None => None,
    };
    let fs = Stage::new(StageKind::Fragment, fs_src)?;

    unsafe {
      let handle = gl::CreateProgram();
      let program = Program { handle };

      gl::AttachShader(handle, vs.handle);

      if let Some(ref tes) = tes {
        gl::AttachShader(handle, tes.handle);
      }

      gl::AttachShader(handle, fs.handle);
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE as GLint;
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      let log = program_info_log(handle);

      if linked == gl::TRUE as GLint {
        if has_warnings(&log) {
          log::warn!("shader program linked with warnings:\n{}", log);
        }

        Ok(program)
      } else {
        Err(ShaderError::LinkFailed(log))
      }
    }
  }

  pub fn bind(&self) {
    unsafe { gl::UseProgram(self.handle) }
  }

  fn location(&self, name: &str) -> GLint {
    match CString::new(name) {
      Ok(name) => unsafe { gl::GetUniformLocation(self.handle, name.as_ptr()) },
      Err(_) => -1,
    }
  }

  // Every setter expects the program to be bound. Unknown uniforms (optimized out by the driver)
  // resolve to -1, which OpenGL silently ignores.

  pub fn set_mat4(&self, name: &str, m: &M44<f32>) {
    unsafe { gl::UniformMatrix4fv(self.location(name), 1, gl::FALSE, m.as_ptr()) }
  }

  pub fn set_vec3(&self, name: &str, v: V3<f32>) {
    unsafe { gl::Uniform3f(self.location(name), v.x, v.y, v.z) }
  }

  pub fn set_vec4(&self, name: &str, v: V4<f32>) {
    unsafe { gl::Uniform4f(self.location(name), v.x, v.y, v.z, v.w) }
  }

  pub fn set_f32(&self, name: &str, x: f32) {
    unsafe { gl::Uniform1f(self.location(name), x) }
  }

  pub fn set_i32(&self, name: &str, x: i32) {
    unsafe { gl::Uniform1i(self.location(name), x) }
  }
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe { gl::DeleteProgram(self.handle) }
  }
}

unsafe fn shader_info_log(handle: GLuint) -> String {
  let mut len: GLint = 0;
  gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut len);

  let mut log = vec![0u8; len.max(1) as usize];
  gl::GetShaderInfoLog(handle, len, null_mut(), log.as_mut_ptr() as *mut GLchar);

  trim_log(log)
}

unsafe fn program_info_log(handle: GLuint) -> String {
  let mut len: GLint = 0;
  gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut len);

  let mut log = vec![0u8; len.max(1) as usize];
  gl::GetProgramInfoLog(handle, len, null_mut(), log.as_mut_ptr() as *mut GLchar);

  trim_log(log)
}

fn trim_log(mut log: Vec<u8>) -> String {
  while log.last() == Some(&0) {
    log.pop();
  }

  String::from_utf8_lossy(&log).into_owned()
}

/// OpenGL version a GLSL source needs, read from its `#version` directive.
pub fn required_gl_version(src: &str) -> Option<(u32, u32)> {
  let line = src.lines().map(str::trim).find(|line| line.starts_with("#version"))?;
  let version: u32 = line.trim_start_matches("#version").split_whitespace().next()?.parse().ok()?;

  Some((version / 100, version / 10 % 10))
}

// Some drivers report a lone newline for a clean build.
fn has_warnings(log: &str) -> bool {
  !log.trim().is_empty()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn info_logs_lose_their_terminator() {
    assert_eq!(trim_log(b"0(12) : error C0000: syntax error\0".to_vec()), "0(12) : error C0000: syntax error");
    assert_eq!(trim_log(vec![0]), "");
  }

  #[test]
  fn blank_info_logs_are_not_warnings() {
    assert!(!has_warnings(""));
    assert!(!has_warnings("\n"));
    assert!(has_warnings("0(3) : warning C7022: unrecognized profile specifier"));
  }

  #[test]
  fn version_directive() {
    assert_eq!(required_gl_version("\n#version 330 core\nvoid main() {}"), Some((3, 3)));
    assert_eq!(required_gl_version("#version 400 core"), Some((4, 0)));
    assert_eq!(required_gl_version("void main() {}"), None);
  }

  #[test]
  fn errors_name_the_stage() {
    let e = ShaderError::CompilationFailed(StageKind::TessellationEvaluation, "oops".to_owned());
    assert!(e.to_string().starts_with("tessellation evaluation stage"));
  }
}
