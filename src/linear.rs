pub use cgmath::{Deg, Matrix4, Point3, Vector2, Vector3, Vector4};

// some useful aliases
pub type V2<T> = Vector2<T>;
pub type V3<T> = Vector3<T>;
pub type V4<T> = Vector4<T>;
pub type M44<T> = Matrix4<T>;

/// RGBA color, as sent to the flat shaders.
pub type Color = V4<f32>;

pub fn translate(x: f32, y: f32, z: f32) -> M44<f32> {
  Matrix4::from_translation(V3::new(x, y, z))
}

pub fn scale(s: f32) -> M44<f32> {
  Matrix4::from_scale(s)
}

pub fn scale3(x: f32, y: f32, z: f32) -> M44<f32> {
  Matrix4::from_nonuniform_scale(x, y, z)
}

/// Rotation around the X axis, in degrees.
pub fn rotate_x(deg: f32) -> M44<f32> {
  Matrix4::from_angle_x(Deg(deg))
}

/// Rotation around the Y axis, in degrees.
pub fn rotate_y(deg: f32) -> M44<f32> {
  Matrix4::from_angle_y(Deg(deg))
}

/// Rotation around the Z axis, in degrees.
pub fn rotate_z(deg: f32) -> M44<f32> {
  Matrix4::from_angle_z(Deg(deg))
}
