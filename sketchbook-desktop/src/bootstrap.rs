//! Window creation and the event/render loop.

use glfw::{Action, Context as _, Key, Modifiers, MouseButton, WindowEvent};
use std::error::Error;
use std::fmt;

use sketchbook::input::wheel_forward;
use sketchbook::linear::V2;
use sketchbook::{Monotonic, Time, Viewport};

/// Class of sketches that can be driven by [`run`].
///
/// Cursor positions are in screen coordinates with the origin at the lower-left corner.
pub trait Sketch {
  fn on_key(&mut self, key: Key, action: Action, mods: Modifiers);

  fn on_mouse_button(&mut self, button: MouseButton, action: Action, cursor: V2<f32>);

  fn on_cursor_move(&mut self, cursor: V2<f32>, shift: bool);

  fn on_scroll(&mut self, forward: bool, shift: bool);

  /// The window was resized; `viewport` is in screen coordinates, like the cursor.
  fn on_resize(&mut self, viewport: Viewport);

  /// Render a frame, `t` being the time elapsed since the loop started.
  fn draw(&mut self, t: Time);
}

/// Error that might occur while opening the window.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BootstrapError {
  /// GLFW couldn’t be initialized.
  InitFailed(String),
  /// The window or its OpenGL context couldn’t be created.
  WindowCreationFailed(u32, u32),
}

impl fmt::Display for BootstrapError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      BootstrapError::InitFailed(ref reason) => write!(f, "cannot initialize GLFW: {}", reason),
      BootstrapError::WindowCreationFailed(major, minor) =>
        write!(f, "cannot create an OpenGL {}.{} core window", major, minor),
    }
  }
}

impl Error for BootstrapError {}

/// Window settings.
#[derive(Clone, Debug)]
pub struct WindowOpt<'a> {
  pub title: &'a str,
  pub width: u32,
  pub height: u32,
  /// Major and minor version of the core OpenGL context to ask for.
  pub gl_version: (u32, u32),
}

/// GLFW error callback.
///
/// Errors are only logged; failing calls are then reported through their return values.
fn log_glfw_error(error: glfw::Error, description: String) {
  log::error!("GLFW error {:?}: {}", error, description);
}

/// Open a window, build the sketch with `init` and run it until the window is closed or escape
/// is pressed.
pub fn run<S, F, E>(opt: WindowOpt, init: F) -> Result<(), E>
    where S: Sketch,
          F: FnOnce(Viewport) -> Result<S, E>,
          E: From<BootstrapError> {
  log::info!("{} starting", opt.title);
  log::info!("window mode: windowed ({}×{})", opt.width, opt.height);

  let mut glfw = glfw::init(log_glfw_error).map_err(|e| BootstrapError::InitFailed(format!("{:?}", e)))?;

  let (major, minor) = opt.gl_version;
  glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
  glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
  glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
  glfw.window_hint(glfw::WindowHint::Samples(Some(4)));

  let (mut window, events) = glfw
    .create_window(opt.width, opt.height, opt.title, glfw::WindowMode::Windowed)
    .ok_or(BootstrapError::WindowCreationFailed(major, minor))?;

  log::debug!("opened window");

  window.set_pos(100, 100);
  window.make_current();
  window.set_key_polling(true);
  window.set_cursor_pos_polling(true);
  window.set_mouse_button_polling(true);
  window.set_scroll_polling(true);
  window.set_size_polling(true);
  window.set_framebuffer_size_polling(true);

  log::debug!("initializing OpenGL pointers");
  gl::load_with(|s| window.get_proc_address(s) as *const _);
  glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

  let (w, h) = window.get_size();
  let mut viewport = Viewport::new(w.max(0) as u32, h.max(0) as u32);
  let (fw, fh) = window.get_framebuffer_size();

  unsafe {
    gl::Viewport(0, 0, fw, fh);
  }

  let mut sketch = init(viewport)?;
  let start = Monotonic::now();

  log::info!("initialized; running…");

  while !window.should_close() {
    glfw.poll_events();

    let shift = window.get_key(Key::LeftShift) == Action::Press || window.get_key(Key::RightShift) == Action::Press;

    for (_, event) in glfw::flush_messages(&events) {
      match event {
        WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
          window.set_should_close(true);
        }

        WindowEvent::Key(key, _, action, mods) => sketch.on_key(key, action, mods),

        WindowEvent::MouseButton(button, action, _) => {
          let (x, y) = window.get_cursor_pos();
          sketch.on_mouse_button(button, action, viewport.flip_y([x, y]));
        }

        WindowEvent::CursorPos(x, y) => sketch.on_cursor_move(viewport.flip_y([x, y]), shift),

        WindowEvent::Scroll(_, y) => sketch.on_scroll(wheel_forward(y), shift),

        WindowEvent::Size(w, h) => {
          viewport = Viewport::new(w.max(0) as u32, h.max(0) as u32);
          sketch.on_resize(viewport);
        }

        WindowEvent::FramebufferSize(w, h) => unsafe {
          gl::Viewport(0, 0, w, h);
        },

        _ => (),
      }
    }

    sketch.draw(start.elapsed_secs());
    window.swap_buffers();
  }

  log::info!("{} closing", opt.title);

  Ok(())
}
