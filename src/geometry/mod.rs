//! .
//!
//! Three coordinate bases are involved in drawing a rack:
//! - [`TableSpace`], where cups live. Origin in the center of the front cup, y grows up,
//!   one unit is one cup radius.
//! - [`WorldSpace`], normalized drawing coordinates. Origin in the top-left corner, y grows
//!   down, the visible area is the unit square.
//! - [`PixelSpace`], raster coordinates.
//!
//! Shapes are represented by signed distance functions, and are usually defined in the
//! interval `[-1, 1]` with the center in the origin.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;
#[cfg(test)] mod tests;

/// Rack coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct TableSpace;
/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate<T>(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, WorldSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Outline of the shape, `width` thick, centered on the boundary.
  fn stroke(self, width: f32) -> Stroke<Self> where Self: Sized {
    Stroke { shape: self, width }
  }
  /// Cut the shape into `dashes` equal angular sectors around the center of its
  /// bounding box, keeping every other one.
  fn dashed(self, dashes: u32) -> Dashed<Self> where Self: Sized {
    Dashed { shape: self, dashes }
  }
  #[cfg(feature = "drawing")]
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Stroke<S> {
  pub shape: S,
  pub width: f32
}
impl <S> BoundingBox<f32, WorldSpace> for Stroke<S>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box()
      .inflate(self.width / 2.0, self.width / 2.0)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Dashed<S> {
  pub shape: S,
  pub dashes: u32
}
impl <S> BoundingBox<f32, WorldSpace> for Dashed<S>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box()
  }
}

pub fn to_pixel_space(
  point: Point2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Point2D<u32, PixelSpace> {
  point.to_vector().component_mul(resolution.to_vector().to_f32().cast_unit())
    .cast_unit()
    .to_point()
    .to_u32()
}
