//! Sketch configuration.
//!
//! Each sketch starts from its own defaults; values from an optional JSON file, then from the
//! command line, are layered on top with [`Config::apply`].

use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Resolved configuration of a sketch.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  /// Root directory assets are looked up in.
  pub assets: PathBuf,
  pub width: u32,
  pub height: u32,
  /// Vertical field of view, in degrees.
  pub fovy: f32,
}

impl Config {
  pub fn new<P>(assets: P, width: u32, height: u32, fovy: f32) -> Self where P: Into<PathBuf> {
    Config {
      assets: assets.into(),
      width,
      height,
      fovy,
    }
  }

  /// Layer `overrides` on top of this configuration.
  pub fn apply(mut self, overrides: Overrides) -> Self {
    if let Some(assets) = overrides.assets {
      self.assets = assets;
    }

    if let Some(width) = overrides.width {
      self.width = width;
    }

    if let Some(height) = overrides.height {
      self.height = height;
    }

    if let Some(fovy) = overrides.fovy {
      self.fovy = fovy;
    }

    self
  }

  /// Path of an asset, relative to the asset root.
  pub fn asset<P>(&self, relative: P) -> PathBuf where P: AsRef<Path> {
    self.assets.join(relative)
  }
}

/// Partial configuration, as found in a configuration file or on the command line.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
  #[serde(default)]
  pub assets: Option<PathBuf>,
  #[serde(default)]
  pub width: Option<u32>,
  #[serde(default)]
  pub height: Option<u32>,
  #[serde(default)]
  pub fovy: Option<f32>,
}

impl Overrides {
  pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError::ParseFailed(None, e.to_string()))
  }

  pub fn from_file<P>(path: P) -> Result<Self, ConfigError> where P: AsRef<Path> {
    let path = path.as_ref();

    log::info!("loading configuration {}", path.display());

    let file = File::open(path).map_err(|e| ConfigError::FileNotFound(path.to_owned(), e.to_string()))?;
    serde_json::from_reader(BufReader::new(file))
      .map_err(|e| ConfigError::ParseFailed(Some(path.to_owned()), e.to_string()))
  }
}

/// Error that might occur while loading a configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
  /// The configuration file couldn’t be opened.
  FileNotFound(PathBuf, Reason),
  /// The configuration isn’t valid JSON or has unexpected fields.
  ParseFailed(Option<PathBuf>, Reason),
}

/// Reason of a load failure.
pub type Reason = String;

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ConfigError::FileNotFound(ref path, ref reason) =>
        write!(f, "cannot open configuration {}: {}", path.display(), reason),

      ConfigError::ParseFailed(Some(ref path), ref reason) =>
        write!(f, "cannot parse configuration {}: {}", path.display(), reason),

      ConfigError::ParseFailed(None, ref reason) =>
        write!(f, "cannot parse configuration: {}", reason),
    }
  }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
  use super::*;

  fn defaults() -> Config {
    Config::new("assets", 800, 600, 30.)
  }

  #[test]
  fn partial_overrides() {
    let o = Overrides::from_json_str(r#"{ "width": 1024, "assets": "/srv/art" }"#).unwrap();
    let config = defaults().apply(o);

    assert_eq!(config, Config::new("/srv/art", 1024, 600, 30.));
  }

  #[test]
  fn empty_overrides_keep_defaults() {
    let o = Overrides::from_json_str("{}").unwrap();
    assert_eq!(defaults().apply(o), defaults());
  }

  #[test]
  fn unknown_fields_are_rejected() {
    let err = Overrides::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed(None, _)));
  }

  #[test]
  fn missing_file() {
    let err = Overrides::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(..)));
    assert!(err.to_string().contains("/definitely/not/here.json"));
  }

  #[test]
  fn assets_resolve_against_root() {
    let config = defaults();
    assert_eq!(config.asset("textures/earth.jpg"), PathBuf::from("assets/textures/earth.jpg"));
  }
}
