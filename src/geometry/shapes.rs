use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Closed polygon, vertices in either winding order.
#[derive(Debug, Clone)]
pub struct Polygon {
  pub vertices: Vec<Point2D<f32, WorldSpace>>
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl BoundingBox<f32, WorldSpace> for Polygon {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::from_points(self.vertices.iter().copied())
  }
}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f32> for Polygon {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let v = &self.vertices;
    let Some(first) = v.first() else {
      return f32::MAX / 2.0
    };
    let mut dist = (pixel - *first).square_length();
    let mut sign = 1.0;
    for (i, j) in (0..v.len()).zip((0..v.len()).cycle().skip(v.len() - 1)) {
      let edge = v[j] - v[i];
      let w = pixel - v[i];
      let t = if edge.square_length() > 0.0 {
        (w.dot(edge) / edge.square_length()).clamp(0.0, 1.0)
      } else { 0.0 };
      dist = dist.min((w - edge * t).square_length());
      // crossing number, flips on every edge crossed by a ray towards +x
      let c = [
        pixel.y >= v[i].y,
        pixel.y < v[j].y,
        edge.x * w.y > edge.y * w.x
      ];
      if c.iter().all(|&c| c) || c.iter().all(|&c| !c) {
        sign = -sign;
      }
    }
    sign * dist.sqrt()
  }
}
