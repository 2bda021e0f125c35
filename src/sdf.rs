use {
  std::f32::consts::TAU,
  euclid::Point2D,
  crate::geometry::{WorldSpace, Shape, Scale, Translation, Stroke, Dashed}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.min(self.scale.y)
  }
}

impl <S> SDF<f32> for Stroke<S>
  where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    self.shape.sdf(pixel).abs() - self.width / 2.0
  }
}

impl <S> SDF<f32> for Dashed<S>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    if self.dashes == 0 {
      return self.shape.sdf(pixel);
    }
    let v = pixel - self.shape.bounding_box().center();
    let sector = self.dashes as f32 * v.y.atan2(v.x).rem_euclid(TAU) / TAU;
    let f = sector.fract();
    // distance to the nearest "on" sector, measured in sectors
    let gap = if f < 0.5 {
      -f.min(0.5 - f)
    } else {
      (f - 0.5).min(1.0 - f)
    };
    let arc = TAU / self.dashes as f32 * v.length();
    self.shape.sdf(pixel).max(gap * arc)
  }
}
