//! Windowed OpenGL front-ends of the sketchbook sketches.

use std::error;
use std::fmt;

pub mod audio;
pub mod bootstrap;
pub mod disk;
pub mod earth_tess;
pub mod logger;
pub mod mesh;
pub mod okay_to_cry;
pub mod opt;
pub mod shader;
pub mod texture;

pub use crate::bootstrap::{run, BootstrapError, Sketch, WindowOpt};
pub use crate::opt::Opt;

use sketchbook::ConfigError;

use crate::shader::ShaderError;

/// Error that stops a sketch from starting.
#[derive(Debug)]
pub enum Error {
  Config(ConfigError),
  Bootstrap(BootstrapError),
  Shader(ShaderError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Error::Config(ref e) => e.fmt(f),
      Error::Bootstrap(ref e) => e.fmt(f),
      Error::Shader(ref e) => e.fmt(f),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match *self {
      Error::Config(ref e) => Some(e),
      Error::Bootstrap(ref e) => Some(e),
      Error::Shader(ref e) => Some(e),
    }
  }
}

impl From<ConfigError> for Error {
  fn from(e: ConfigError) -> Self {
    Error::Config(e)
  }
}

impl From<BootstrapError> for Error {
  fn from(e: BootstrapError) -> Self {
    Error::Bootstrap(e)
  }
}

impl From<ShaderError> for Error {
  fn from(e: ShaderError) -> Self {
    Error::Shader(e)
  }
}

/// Print the credits and the key bindings of a sketch.
pub fn banner(usage: &str) {
  log::info!("created by Justin Thoreson");
  log::info!("-------------------------------------------------------");
  log::info!("usage:{}", usage);
}
