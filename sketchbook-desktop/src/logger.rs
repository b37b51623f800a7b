//! Logger.

use env_logger::{Builder, Env};
use log::Level;
use std::io::Write as _;

/// Install the global logger.
///
/// Logs at `info` and above unless `RUST_LOG` says otherwise.
pub fn init() {
  Builder::from_env(Env::default().default_filter_or("info"))
    .format(|buf, record| {
      let color = match record.level() {
        Level::Error => 31,
        Level::Warn => 33,
        _ => 34,
      };

      writeln!(buf, "\x1b[90m{} \x1b[{}m> {}\x1b[0m", buf.timestamp_millis(), color, record.args())
    })
    .init();
}
