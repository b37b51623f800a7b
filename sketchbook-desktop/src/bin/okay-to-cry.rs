use std::process;
use structopt::StructOpt;

use sketchbook::Config;
use sketchbook_desktop::okay_to_cry::{self, OkayToCry};
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
    okay_to_cry::DEFAULT_WIDTH,
    okay_to_cry::DEFAULT_HEIGHT,
    okay_to_cry::DEFAULT_FOVY,
  );
  let config = opt.resolve(defaults)?;
  let win = WindowOpt {
    title: okay_to_cry::TITLE,
    width: config.width,
    height: config.height,
    gl_version: okay_to_cry::GL_VERSION,
  };

  run(win, |viewport| {
    let sketch = OkayToCry::new(&config, viewport)?;
    banner(okay_to_cry::USAGE);
    Ok(sketch)
  })
}
