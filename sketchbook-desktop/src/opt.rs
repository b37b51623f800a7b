use std::path::PathBuf;
use structopt::StructOpt;

use sketchbook::config::{Config, ConfigError, Overrides};

/// Command line options shared by both sketches.
#[derive(Clone, Debug, Default, StructOpt)]
pub struct Opt {
  /// JSON configuration file; its values are overridden by the other options.
  #[structopt(short = "c", long = "config", parse(from_os_str))]
  pub config: Option<PathBuf>,

  /// Directory the textures and soundtracks are looked up in.
  #[structopt(short = "a", long = "assets", parse(from_os_str))]
  pub assets: Option<PathBuf>,

  /// Width of the window.
  #[structopt(short = "w", long = "width")]
  pub width: Option<u32>,

  /// Height of the window.
  #[structopt(short = "h", long = "height")]
  pub height: Option<u32>,

  /// Vertical field of view, in degrees.
  #[structopt(long = "fovy")]
  pub fovy: Option<f32>,
}

impl Opt {
  /// Layer the configuration file, then the command line, on top of `defaults`.
  pub fn resolve(&self, defaults: Config) -> Result<Config, ConfigError> {
    let config = match self.config {
      Some(ref path) => defaults.apply(Overrides::from_file(path)?),
      None => defaults,
    };

    Ok(config.apply(self.overrides()))
  }

  fn overrides(&self) -> Overrides {
    Overrides {
      assets: self.assets.clone(),
      width: self.width,
      height: self.height,
      fovy: self.fovy,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn command_line_overrides_defaults() {
    let opt = Opt::from_iter(&["earth-tess", "-w", "1024", "--assets", "/srv/art"]);
    let config = opt.resolve(Config::new("assets", 800, 600, 30.)).unwrap();

    assert_eq!(config, Config::new("/srv/art", 1024, 600, 30.));
  }

  #[test]
  fn missing_configuration_file_is_an_error() {
    let opt = Opt::from_iter(&["okay-to-cry", "--config", "/definitely/not/here.json"]);
    assert!(opt.resolve(Config::new("assets", 750, 750, 30.)).is_err());
  }
}
