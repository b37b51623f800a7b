//! The crying face sketch.

use glfw::{Action, Key, Modifiers, MouseButton};
use rand::rngs::ThreadRng;

use sketchbook::face::{AudioCue, FaceScene};
use sketchbook::linear::V2;
use sketchbook::{Config, Time, Viewport};

use crate::audio::Soundtrack;
use crate::bootstrap::Sketch;
use crate::mesh::CubeMesh;
use crate::shader::Program;
use crate::Error;

pub const TITLE: &str = "It's Okay to Cry";
pub const DEFAULT_WIDTH: u32 = 750;
pub const DEFAULT_HEIGHT: u32 = 750;
pub const DEFAULT_FOVY: f32 = 30.;
/// Plain triangles only need a 3.3 core context.
pub const GL_VERSION: (u32, u32) = (3, 3);

/// Soundtrack played while crying, relative to the asset root.
pub const SOUNDTRACK_PATH: &str = "audio/untitled001.ogg";
const SOUNDTRACK_NAME: &str = "EXULGOR - Untitled001";

pub const USAGE: &str = "
                        SPACE: cry/play music
            LEFT-CLICK + DRAG: rotate view
    SHIFT + LEFT-CLICK + DRAG: move objects
                F & SHIFT + F: change field of view
                       SCROLL: rotate view
               SHIFT + SCROLL: zoom in and out
";

const FLAT_VS: &str = r#"
#version 330 core

layout (location = 0) in vec3 point;

uniform mat4 view;

void main() {
  gl_Position = view * vec4(point, 1.);
}
"#;

const FLAT_FS: &str = r#"
#version 330 core

uniform vec4 color;

out vec4 frag;

void main() {
  frag = color;
}
"#;

pub struct OkayToCry {
  scene: FaceScene,
  program: Program,
  cube: CubeMesh,
  soundtrack: Option<Soundtrack>,
  rng: ThreadRng,
}

impl OkayToCry {
  pub fn new(config: &Config, viewport: Viewport) -> Result<Self, Error> {
    log::info!("compiling face shaders");

    let program = Program::new(FLAT_VS, None, FLAT_FS)?;

    let soundtrack = match Soundtrack::open(config.asset(SOUNDTRACK_PATH)) {
      Ok(soundtrack) => Some(soundtrack),
      Err(e) => {
        log::warn!("{}; crying will be silent", e);
        None
      }
    };

    Ok(OkayToCry {
      scene: FaceScene::new(viewport, config.fovy),
      program,
      cube: CubeMesh::new(),
      soundtrack,
      rng: rand::thread_rng(),
    })
  }

  fn cue(&mut self, cue: AudioCue) {
    match cue {
      AudioCue::Play => log::info!("playing: {}", SOUNDTRACK_NAME),
      AudioCue::Stop => log::info!("audio silenced"),
    }

    if let Some(ref mut soundtrack) = self.soundtrack {
      match cue {
        AudioCue::Play => soundtrack.play(),
        AudioCue::Stop => soundtrack.stop(),
      }
    }
  }
}

impl Sketch for OkayToCry {
  fn on_key(&mut self, key: Key, action: Action, mods: Modifiers) {
    match (key, action) {
      (Key::Space, Action::Press) | (Key::Space, Action::Release) => {
        if let Some(cue) = self.scene.set_crying(action == Action::Press) {
          self.cue(cue);
        }
      }

      (Key::F, Action::Press) => {
        self.scene.step_fov(mods.contains(Modifiers::Shift));
        log::debug!("field of view: {}°", self.scene.camera.fov());
      }

      _ => (),
    }
  }

  fn on_mouse_button(&mut self, button: MouseButton, action: Action, cursor: V2<f32>) {
    if button != MouseButton::Button1 {
      return;
    }

    match action {
      Action::Press => self.scene.mouse_press(cursor),
      Action::Release => self.scene.mouse_release(),
      Action::Repeat => (),
    }
  }

  fn on_cursor_move(&mut self, cursor: V2<f32>, shift: bool) {
    self.scene.cursor_move(cursor, shift);
  }

  fn on_scroll(&mut self, forward: bool, shift: bool) {
    self.scene.scroll(forward, shift);
  }

  fn on_resize(&mut self, viewport: Viewport) {
    self.scene.resize(viewport);
  }

  fn draw(&mut self, _: Time) {
    unsafe {
      gl::ClearColor(0., 0., 0., 1.);
      gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
      gl::Enable(gl::DEPTH_TEST);
      gl::Disable(gl::BLEND);
    }

    self.program.bind();

    let program = &self.program;
    let cube = &self.cube;

    self.scene.render(|view, color| {
      program.set_mat4("view", view);
      program.set_vec4("color", color);
      cube.draw();
    });

    self.scene.emit(&mut self.rng);
  }
}
