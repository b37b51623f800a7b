use std::process;
use structopt::StructOpt;

use sketchbook::Config;
use sketchbook_desktop::earth_tess::{self, EarthTess};
use sketchbook_desktop::{banner, logger, run, Error, Opt, WindowOpt};

fn main() {
  logger::init();

  if let Err(e) = start(Opt::from_args()) {
    log::error!("{}", e);
    process::exit(1);
  }
}

fn start(opt: Opt) -> Result<(), Error> {
  let defaults = Config::new(
    "assets",
    earth_tess::DEFAULT_WIDTH,
    earth_tess::DEFAULT_HEIGHT,
    earth_tess::DEFAULT_FOVY,
  );
  let config = opt.resolve(defaults)?;
  let win = WindowOpt {
    title: earth_tess::TITLE,
    width: config.width,
    height: config.height,
    gl_version: earth_tess::GL_VERSION,
  };

  run(win, |viewport| {
    let sketch = EarthTess::new(&config, viewport)?;
    banner(earth_tess::USAGE);
    Ok(sketch)
  })
}
