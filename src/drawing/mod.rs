//! Rasterization of shapes, and the rack diagram built on top of it.
//!
//! Every layer of a diagram is a [`Shape`] paired with a [`Texture`]. Shapes are described
//! by their signed distance function, so edges are antialiased for free: a pixel is
//! covered in proportion to how far inside the shape its distance places it.

use {
  crate::{
    geometry::{BoundingBox, Shape, PixelSpace, WorldSpace},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2}
};

mod impl_draw_rgbaimage;
pub mod figure;
pub mod label;
#[cfg(test)] mod tests;
pub use {
  figure::{layers, render, RenderConfig, ViewBounds, Viewport},
  label::Label
};

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, WorldSpace> for Texture<S, T> where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> { self.shape.bounding_box() } }

// try to fit world in the center of image, preserving aspect ratio
fn rescale_bounding_box(
  bounding_box: Box2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> (
  Option<Box2D<u32, PixelSpace>>, // bounding_box,
  V2<f32, PixelSpace>, // offset
  f32 // min_side
) {
  let min_side = resolution.width.min(resolution.height) as f32;
  let offset = (resolution.to_vector().to_f32() - V2::splat(min_side)) / 2.0;
  let bounding_box = bounding_box
    .scale(min_side, min_side).cast_unit()
    .round_out()
    .translate(offset)
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32());
  (bounding_box, offset, min_side)
}
