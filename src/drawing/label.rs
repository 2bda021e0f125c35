//! Text rendered from the 8x8 bitmap glyphs of `font8x8`.
//!
//! Every set bit of a glyph is a square cell, so the distance to a label is the distance
//! to the nearest lit cell. Only the 3x3 cell neighbourhood is searched: farther points
//! are reported one cell away, which is enough for the antialiasing band.

use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS},
  crate::{
    geometry::{BoundingBox, WorldSpace},
    sdf::SDF
  }
};

const GLYPH: usize = 8;

/// A line of text, `cell` is the side of one glyph bit.
#[derive(Debug, Clone)]
pub struct Label {
  glyphs: Vec<[u8; GLYPH]>,
  origin: Point2D<f32, WorldSpace>,
  cell: f32
}

impl Label {
  /// Characters without a glyph are drawn as blanks.
  pub fn new(text: &str, origin: Point2D<f32, WorldSpace>, cell: f32) -> Self {
    let glyphs = text.chars()
      .map(|c| BASIC_FONTS.get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or([0; GLYPH]))
      .collect();
    Self { glyphs, origin, cell }
  }

  /// Largest label that fits into `area` with its height limited to `fill` of the area,
  /// centered.
  pub fn fit(text: &str, area: Box2D<f32, WorldSpace>, fill: f32) -> Self {
    let columns = (text.chars().count().max(1) * GLYPH) as f32;
    let size = area.size();
    let cell = (size.height * fill / GLYPH as f32).min(size.width * fill / columns);
    let text_size = Size2D::new(columns, GLYPH as f32) * cell;
    let origin = area.min + (size - text_size).to_vector() / 2.0;
    Self::new(text, origin, cell)
  }

  fn lit(&self, x: i64, y: i64) -> bool {
    if x < 0 || y < 0 || y >= GLYPH as i64 {
      return false;
    }
    let (glyph, bit) = (x as usize / GLYPH, x as usize % GLYPH);
    self.glyphs.get(glyph)
      .map_or(false, |rows| rows[y as usize] >> bit & 1 == 1)
  }
}

impl BoundingBox<f32, WorldSpace> for Label {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let size = Size2D::new((self.glyphs.len() * GLYPH) as f32, GLYPH as f32) * self.cell;
    Box2D::from_origin_and_size(self.origin, size)
  }
}

impl SDF<f32> for Label {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    let local = (pixel - self.origin) / self.cell;
    let (cx, cy) = (local.x.floor() as i64, local.y.floor() as i64);
    let distance = itertools::iproduct!(-1..=1, -1..=1)
      .map(|(dy, dx)| (cx + dx, cy + dy))
      .filter(|&(x, y)| self.lit(x, y))
      .map(|(x, y)| {
        // square cell sdf
        let center = V2::new(x as f32, y as f32) + V2::splat(0.5);
        let d = (local - center).abs() - V2::splat(0.5);
        d.max(V2::zero()).length() + d.x.max(d.y).min(0.0)
      })
      .fold(1.0, f32::min);
    distance * self.cell
  }
}
