use std::fmt;
use std::time::Instant;

/// Absolute time, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Time(f64);

impl Time {
  /// Convert into seconds.
  pub fn as_secs(self) -> f64 {
    self.0
  }

  /// Seconds as a shader-friendly float.
  pub fn as_f32(self) -> f32 {
    self.0 as f32
  }
}

impl fmt::Display for Time {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    self.0.fmt(f)
  }
}

/// Monotonic time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monotonic(Instant);

impl Monotonic {
  pub fn now() -> Self {
    Monotonic(Instant::now())
  }

  /// Time elapsed since this instant was taken.
  pub fn elapsed_secs(&self) -> Time {
    Time(self.0.elapsed().as_secs_f64())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn elapsed_is_monotonic() {
    let start = Monotonic::now();
    let a = start.elapsed_secs();
    let b = start.elapsed_secs();

    assert!(a.as_secs() >= 0.);
    assert!(b >= a);
  }
}
