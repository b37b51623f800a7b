use gl::types::{GLint, GLsizei, GLuint};
use std::error::Error;
use std::fmt;
use std::os::raw::c_void;
use std::path::{Path, PathBuf};

/// Error that might occur while loading a texture.
#[derive(Clone, Debug, PartialEq)]
pub enum TextureError {
  /// The image couldn’t be opened or decoded.
  LoadFailed(PathBuf, String),
}

impl fmt::Display for TextureError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureError::LoadFailed(ref path, ref reason) =>
        write!(f, "cannot load texture {}: {}", path.display(), reason),
    }
  }
}

impl Error for TextureError {}

/// A mipmapped 2D RGB texture.
#[derive(Debug)]
pub struct Texture {
  handle: GLuint,
}

impl Texture {
  /// Load a texture from an image on disk.
  ///
  /// Rows are flipped so that the first texel row is the bottom of the image, as OpenGL expects.
  pub fn load<P>(path: P) -> Result<Self, TextureError> where P: AsRef<Path> {
    let path = path.as_ref();

    log::info!("loading texture image: \x1b[35m{}", path.display());

    let image = image::open(path)
      .map_err(|e| TextureError::LoadFailed(path.to_owned(), e.to_string()))?
      .flipv()
      .into_rgb8();
    let (w, h) = image.dimensions();
    let texels = image.into_raw();

    let mut handle = 0;

    unsafe {
      gl::GenTextures(1, &mut handle);
      gl::BindTexture(gl::TEXTURE_2D, handle);

      gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
      gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::RGB as GLint,
        w as GLsizei,
        h as GLsizei,
        0,
        gl::RGB,
        gl::UNSIGNED_BYTE,
        texels.as_ptr() as *const c_void,
      );
      gl::GenerateMipmap(gl::TEXTURE_2D);

      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR_MIPMAP_LINEAR as GLint);
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);

      gl::BindTexture(gl::TEXTURE_2D, 0);
    }

    log::debug!("texture {} is {}×{}", path.display(), w, h);

    Ok(Texture { handle })
  }

  /// Bind the texture to texture unit `unit`.
  pub fn bind(&self, unit: u32) {
    unsafe {
      gl::ActiveTexture(gl::TEXTURE0 + unit);
      gl::BindTexture(gl::TEXTURE_2D, self.handle);
    }
  }
}

impl Drop for Texture {
  fn drop(&mut self) {
    unsafe { gl::DeleteTextures(1, &self.handle) }
  }
}
