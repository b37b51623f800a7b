//! Looping soundtrack.

use alto::{self, Mono, Source as _, Stereo};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vorbis::Decoder;

/// Error that might occur while opening a soundtrack.
#[derive(Debug)]
pub enum AudioError {
  /// OpenAL couldn’t be loaded, or no device or context could be created.
  DeviceUnavailable(String),
  /// The soundtrack file couldn’t be opened.
  FileNotFound(PathBuf, String),
  /// The soundtrack isn’t valid Ogg Vorbis, or has an unsupported layout.
  DecodingFailed(PathBuf, String),
}

impl fmt::Display for AudioError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      AudioError::DeviceUnavailable(ref reason) => write!(f, "no audio device: {}", reason),
      AudioError::FileNotFound(ref path, ref reason) =>
        write!(f, "cannot open soundtrack {}: {}", path.display(), reason),
      AudioError::DecodingFailed(ref path, ref reason) =>
        write!(f, "cannot decode soundtrack {}: {}", path.display(), reason),
    }
  }
}

impl Error for AudioError {}

/// A soundtrack fully decoded in memory and played on a loop.
pub struct Soundtrack {
  // the source must go before the context, and the context before the device
  source: alto::StaticSource,
  _context: alto::Context,
  _device: alto::OutputDevice,
}

impl Soundtrack {
  pub fn open<P>(path: P) -> Result<Self, AudioError> where P: AsRef<Path> {
    let path = path.as_ref();

    log::debug!("initializing OpenAL");

    let device_err = |e: alto::AltoError| AudioError::DeviceUnavailable(format!("{:?}", e));
    let alto = alto::Alto::load_default().map_err(device_err)?;
    let device = alto.open(None).map_err(device_err)?;
    let context = device.new_context(None).map_err(device_err)?;

    log::info!("loading soundtrack \x1b[35m{}", path.display());

    let file = File::open(path).map_err(|e| AudioError::FileNotFound(path.to_owned(), e.to_string()))?;
    let decoding_err = |reason: String| AudioError::DecodingFailed(path.to_owned(), reason);
    let decoder = Decoder::new(file).map_err(|e| decoding_err(format!("{:?}", e)))?;

    let mut pcm = Vec::new();
    let mut channels = 0;
    let mut rate = 0;

    for packet in decoder.into_packets() {
      let packet = packet.map_err(|e| decoding_err(format!("{:?}", e)))?;
      channels = packet.channels;
      rate = packet.rate;
      pcm.extend(packet.data);
    }

    let buffer = match channels {
      1 => {
        let frames: Vec<_> = pcm.iter().map(|&center| Mono { center }).collect();
        context.new_buffer::<Mono<i16>, _>(&frames[..], rate as i32)
      }

      2 => {
        let frames: Vec<_> = pcm.chunks_exact(2).map(|s| Stereo { left: s[0], right: s[1] }).collect();
        context.new_buffer::<Stereo<i16>, _>(&frames[..], rate as i32)
      }

      n => return Err(decoding_err(format!("unsupported channel count {}", n))),
    }.map_err(device_err)?;

    let mut source = context.new_static_source().map_err(device_err)?;
    source.set_buffer(Arc::new(buffer)).map_err(device_err)?;
    source.set_looping(true);

    Ok(Soundtrack {
      source,
      _context: context,
      _device: device,
    })
  }

  pub fn play(&mut self) {
    let _ = self.source.play();
  }

  pub fn stop(&mut self) {
    let _ = self.source.stop();
  }
}
