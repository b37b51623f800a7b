//! The tessellated globe sketch.

use glfw::{Action, Key, Modifiers, MouseButton};

use sketchbook::globe::{GlobeScene, PATCH_VERTICES, TESS_LEVEL};
use sketchbook::linear::V2;
use sketchbook::{Config, Time, Viewport};

use crate::bootstrap::Sketch;
use crate::disk::DiskRenderer;
use crate::mesh::AttributelessVao;
use crate::shader::Program;
use crate::texture::Texture;
use crate::Error;

pub const TITLE: &str = "Earth Tessellation";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FOVY: f32 = 30.;
/// Tessellation stages need a 4.0 core context.
pub const GL_VERSION: (u32, u32) = (4, 0);

/// Texture of the globe, relative to the asset root.
pub const TEXTURE_PATH: &str = "textures/earth.jpg";

pub const USAGE: &str = "
                 DRAG RED DOT: move light source
            LEFT-CLICK + DRAG: rotate view
    SHIFT + LEFT-CLICK + DRAG: move objects
                       SCROLL: rotate view
               SHIFT + SCROLL: zoom in and out
";

const GLOBE_VS: &str = r#"
#version 400 core

void main() {
  gl_Position = vec4(0.);
}
"#;

// Keep in sync with sketchbook::globe::{surface_point, surface_normal}.
const GLOBE_TES: &str = r#"
#version 400 core

layout (quads, equal_spacing, ccw) in;

uniform mat4 modelview;
uniform mat4 persp;
uniform float dt;

out vec3 point;
out vec3 normal;
out vec2 uv;

const float PI = 3.14159265;

vec3 surface(float u, float v, float b) {
  float elevation = PI * v - PI / 2.;
  float y = sin(elevation);
  float angle = 2. * PI * (1. - u);
  float r = cos(b * elevation);

  return vec3(r * cos(angle), y, r * sin(angle));
}

void main() {
  float b = cos(dt);

  uv = gl_TessCoord.st;

  vec3 p = surface(uv.s, uv.t, b);
  vec3 n = vec3(p.x, abs(b) * p.y, p.z);

  point = (modelview * vec4(p, 1.)).xyz;
  normal = (modelview * vec4(n, 0.)).xyz;
  gl_Position = persp * vec4(point, 1.);
}
"#;

const GLOBE_FS: &str = r#"
#version 400 core

in vec3 point;
in vec3 normal;
in vec2 uv;

uniform sampler2D textureMap;
uniform int textured;
uniform vec3 light;

out vec4 frag;

void main() {
  vec3 n = normalize(normal);
  vec3 l = normalize(light - point);
  vec3 e = normalize(point);
  vec3 r = reflect(l, n);

  float dif = max(0., dot(n, l));
  float spec = pow(max(0., dot(e, r)), 50.);
  float ad = clamp(.15 + dif, 0., 1.);
  vec3 albedo = textured != 0 ? texture(textureMap, uv).rgb : vec3(1.);

  frag = vec4(ad * albedo + vec3(spec), 1.);
}
"#;

/// Texture unit the globe texture is bound to.
const TEXTURE_UNIT: u32 = 0;

pub struct EarthTess {
  scene: GlobeScene,
  program: Program,
  patch: AttributelessVao,
  texture: Option<Texture>,
  disk: DiskRenderer,
}

impl EarthTess {
  pub fn new(config: &Config, viewport: Viewport) -> Result<Self, Error> {
    log::info!("compiling globe shaders");

    let program = Program::new(GLOBE_VS, Some(GLOBE_TES), GLOBE_FS)?;
    let disk = DiskRenderer::new()?;

    let texture = match Texture::load(config.asset(TEXTURE_PATH)) {
      Ok(texture) => Some(texture),
      Err(e) => {
        log::warn!("{}; the globe will be untextured", e);
        None
      }
    };

    Ok(EarthTess {
      scene: GlobeScene::new(viewport, config.fovy),
      program,
      patch: AttributelessVao::new(),
      texture,
      disk,
    })
  }
}

impl Sketch for EarthTess {
  fn on_key(&mut self, _: Key, _: Action, _: Modifiers) {}

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

  fn draw(&mut self, t: Time) {
    let dt = t.as_f32();
    let outer = [TESS_LEVEL; 4];
    let inner = [TESS_LEVEL; 2];

    unsafe {
      gl::ClearColor(0.6, 0.6, 0.6, 1.);
      gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
      gl::Enable(gl::BLEND);
      gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
      gl::Enable(gl::DEPTH_TEST);
    }

    self.program.bind();
    self.program.set_mat4("modelview", &self.scene.modelview(dt));
    self.program.set_mat4("persp", self.scene.camera.persp());
    self.program.set_f32("dt", dt);
    self.program.set_vec3("light", self.scene.light_eye());
    self.program.set_i32("textureMap", TEXTURE_UNIT as i32);
    self.program.set_i32("textured", self.texture.is_some() as i32);

    if let Some(ref texture) = self.texture {
      texture.bind(TEXTURE_UNIT);
    }

    self.patch.bind();

    unsafe {
      gl::PatchParameteri(gl::PATCH_VERTICES, PATCH_VERTICES);
      gl::PatchParameterfv(gl::PATCH_DEFAULT_OUTER_LEVEL, outer.as_ptr());
      gl::PatchParameterfv(gl::PATCH_DEFAULT_INNER_LEVEL, inner.as_ptr());
      gl::DrawArrays(gl::PATCHES, 0, PATCH_VERTICES);

      // the light marker is always visible
      gl::Disable(gl::DEPTH_TEST);
    }

    let light = &self.scene.light;
    self.disk.draw(light.position, light.marker_size, light.marker_color, self.scene.camera.fullview());
  }
}
