//! The crying face.
//!
//! A face made of five red cubes (two eyes, two cheeks and a mouth) that frowns and sheds tears
//! while the cry key is held. Tears are particles drawn as tiny cubes, in two mirrored groups of
//! rows under the eyes.

use rand::Rng;

use crate::camera::Camera;
use crate::input::{DragState, DragTarget};
use crate::linear::{scale, scale3, translate, Color, M44, V2, V3};
use crate::particle::ParticlePool;
use crate::projection::Viewport;

/// Particles revived per frame while crying.
pub const SPAWN_BURST: usize = 5;
/// Rows of tears under each eye.
pub const TEAR_ROWS: i32 = 6;
/// Step of the field of view keys, in degrees.
pub const FOV_STEP: f32 = 5.;

const FACE_SCALE: f32 = 0.3;
const FEATURE_SCALE: f32 = 0.1;
const EYE_X: f32 = 0.5;
const EYE_Y: f32 = 0.3;
const TEAR_SCALE: f32 = 0.005;
const TEAR_ANCHOR_Y: f32 = 0.2;
const TEAR_DEPTH: f32 = 0.1;
const TEAR_ROW_SPACING: f32 = 35.;

/// Shape of the mouth and cheeks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expression {
  Smile,
  Frown,
}

impl Expression {
  /// Vertical offset of the cheeks.
  pub fn cheek_y(self) -> f32 {
    match self {
      Expression::Smile => -0.3,
      Expression::Frown => -0.5,
    }
  }

  /// Vertical offset of the mouth.
  pub fn mouth_y(self) -> f32 {
    match self {
      Expression::Smile => -0.5,
      Expression::Frown => -0.3,
    }
  }
}

/// What the soundtrack should do after an expression change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AudioCue {
  Play,
  Stop,
}

/// Whole state of the face sketch.
#[derive(Clone, Debug)]
pub struct FaceScene {
  pub camera: Camera,
  expression: Expression,
  crying: bool,
  tears: ParticlePool,
  drag: DragState,
}

impl FaceScene {
  pub fn new(viewport: Viewport, fovy: f32) -> Self {
    FaceScene {
      camera: Camera::new(viewport, V3::new(0., 0., 0.), V3::new(0., 0., -1.), fovy),
      expression: Expression::Smile,
      crying: false,
      tears: ParticlePool::default(),
      drag: DragState::Idle,
    }
  }

  pub fn expression(&self) -> Expression {
    self.expression
  }

  pub fn is_crying(&self) -> bool {
    self.crying
  }

  pub fn tears(&self) -> &ParticlePool {
    &self.tears
  }

  pub fn drag_state(&self) -> DragState {
    self.drag
  }

  /// The cry key went down (`true`) or up (`false`).
  ///
  /// Only actual transitions yield an audio cue; pressing again while already crying changes
  /// nothing.
  pub fn set_crying(&mut self, pressed: bool) -> Option<AudioCue> {
    if pressed == self.crying {
      return None;
    }

    self.crying = pressed;

    if pressed {
      self.expression = Expression::Frown;
      Some(AudioCue::Play)
    } else {
      self.expression = Expression::Smile;
      Some(AudioCue::Stop)
    }
  }

  /// Widen the field of view, or narrow it with `shift`.
  pub fn step_fov(&mut self, shift: bool) {
    let step = if shift { -FOV_STEP } else { FOV_STEP };
    let fov = self.camera.fov() + step;
    self.camera.set_fov(fov);
  }

  pub fn mouse_press(&mut self, cursor: V2<f32>) {
    self.drag.press(DragTarget::Camera);
    self.camera.mouse_down(cursor);
  }

  pub fn mouse_release(&mut self) {
    self.drag.release();
    self.camera.mouse_up();
  }

  pub fn cursor_move(&mut self, cursor: V2<f32>, shift: bool) {
    if let Some(DragTarget::Camera) = self.drag.target() {
      self.camera.mouse_drag(cursor, shift);
    }
  }

  pub fn scroll(&mut self, forward: bool, shift: bool) {
    self.camera.mouse_wheel(forward, shift);
  }

  pub fn resize(&mut self, viewport: Viewport) {
    self.camera.resize(viewport);
  }

  /// Shed a burst of tears if crying.
  pub fn emit<R>(&mut self, rng: &mut R) where R: Rng {
    if self.crying {
      self.tears.spawn(SPAWN_BURST, V3::new(0., 0., 0.), rng);
    }
  }

  /// Walk the scene in drawing order, handing each cube’s full transform and color to `draw`.
  ///
  /// Tears are stepped as they are drawn, once per row they appear in, so the simulation runs at
  /// `2 * TEAR_ROWS` steps per rendered frame.
  pub fn render<F>(&mut self, mut draw: F) where F: FnMut(&M44<f32>, Color) {
    let red = Color::new(1., 0., 0., 1.);
    let view = *self.camera.fullview() * scale(FACE_SCALE);
    let feature = scale(FEATURE_SCALE);
    let cheek_y = self.expression.cheek_y();

    // eyes
    draw(&(view * translate(-EYE_X, EYE_Y, 0.) * feature), red);
    draw(&(view * translate(EYE_X, EYE_Y, 0.) * feature), red);

    // cheeks and mouth
    draw(&(view * translate(-EYE_X, cheek_y, 0.) * feature), red);
    draw(&(view * translate(EYE_X, cheek_y, 0.) * feature), red);
    draw(&(view * translate(0., self.expression.mouth_y(), 0.) * scale3(0.4, 0.1, 0.1)), red);

    // tears, under the left eye then under the right one
    let tear = scale(TEAR_SCALE);

    for &anchor_x in &[-EYE_X, EYE_X] {
      for i in -TEAR_ROWS / 2..TEAR_ROWS / 2 {
        let shift = translate(anchor_x, TEAR_ANCHOR_Y, 0.) * translate(i as f32 / TEAR_ROW_SPACING, 0., TEAR_DEPTH);
        let row = view * shift;

        for p in self.tears.particles_mut().iter_mut().filter(|p| p.is_alive()) {
          p.step();
          draw(&(row * M44::from_translation(p.pos) * tear), p.color);
        }
      }
    }
  }
}
