//! Rack diagrams.
//!
//! A diagram is drawn back to front: the frame around the visible area, the dotted rack
//! boundary, one layer per cup, and the title in a band above the view. Real cups are
//! filled discs, phantom cups are dashed outlines.

use {
  std::{
    path::{Path, PathBuf},
    process::ExitStatus
  },
  euclid::{Box2D, Point2D, Transform2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  serde::Deserialize,
  crate::{
    drawing::{Draw, Label},
    error::{Error, Result},
    geometry::{Circle, Polygon, Shape, TableSpace, WorldSpace},
    rack::{self, Color, Cup, Formation, ROW_SPACING}
  }
};

/// Visible part of the table.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct ViewBounds {
  pub x_min: f32,
  pub x_max: f32,
  pub y_min: f32,
  pub y_max: f32
}

impl Default for ViewBounds {
  fn default() -> Self {
    Self {
      x_min: -6.0,
      x_max: 6.0,
      y_min: -8.0,
      y_max: 1.5 * ROW_SPACING
    }
  }
}

impl ViewBounds {
  pub fn to_box(&self) -> Box2D<f32, TableSpace> {
    Box2D::new(
      Point2D::new(self.x_min, self.y_min),
      Point2D::new(self.x_max, self.y_max)
    )
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
  /// Side of the square image, in pixels.
  pub resolution: u32,
  pub view: ViewBounds,
  pub background: Color,
  /// `None` disables the frame.
  pub frame: Option<Color>,
  pub boundary: Color,
  pub phantom: Color,
  /// Width of every outline, in table units.
  pub line_width: f32,
  pub cup_dashes: u32,
  pub boundary_dashes: u32,
  /// Color of the title, `None` leaves the title out and gives its band to the view.
  pub title: Option<Color>,
  /// Height of the title band, as a fraction of the image.
  pub title_band: f32
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      resolution: 640,
      view: ViewBounds::default(),
      background: Color::WHITE,
      frame: Some(Color::BLACK),
      boundary: Color::GREY,
      phantom: Color::GREY,
      line_width: 0.06,
      cup_dashes: 16,
      boundary_dashes: 96,
      title: Some(Color::BLACK),
      title_band: 0.08
    }
  }
}

impl RenderConfig {
  fn band(&self) -> f32 {
    match self.title {
      Some(_) => self.title_band.clamp(0.0, 1.0),
      None => 0.0
    }
  }

  /// Area of the image the title is drawn in.
  pub fn title_area(&self) -> Box2D<f32, WorldSpace> {
    Box2D::new(Point2D::origin(), Point2D::new(1.0, self.band()))
  }

  /// Viewport of the view bounds, below the title band.
  pub fn viewport(&self) -> Viewport {
    let area = Box2D::new(Point2D::new(0.0, self.band()), Point2D::new(1.0, 1.0));
    Viewport::fit(self.view.to_box(), area)
  }
}

/// Maps [`TableSpace`] into [`WorldSpace`]: flips the y axis, and fits the view into an
/// area of the unit square, centered.
#[derive(Debug, Copy, Clone)]
pub struct Viewport {
  transform: Transform2D<f32, TableSpace, WorldSpace>,
  scale: f32
}

impl Viewport {
  /// Fit into the whole unit square.
  pub fn new(view: Box2D<f32, TableSpace>) -> Self {
    Self::fit(view, Box2D::new(Point2D::origin(), Point2D::new(1.0, 1.0)))
  }

  pub fn fit(view: Box2D<f32, TableSpace>, area: Box2D<f32, WorldSpace>) -> Self {
    let (size, area_size) = (view.size(), area.size());
    let scale = (area_size.width / size.width).min(area_size.height / size.height);
    let margin = area.min.to_vector()
      + (area_size.to_vector() - size.to_vector().cast_unit() * scale) / 2.0;
    let transform = Transform2D::translation(-view.min.x, -view.max.y)
      .then_scale(scale, -scale)
      .then_translate(margin);
    Self { transform, scale }
  }

  pub fn to_world(&self, point: Point2D<f32, TableSpace>) -> Point2D<f32, WorldSpace> {
    self.transform.transform_point(point)
  }

  pub fn to_world_length(&self, length: f32) -> f32 {
    length * self.scale
  }

  fn polygon(&self, points: &[Point2D<f32, TableSpace>]) -> Polygon {
    Polygon {
      vertices: points.iter().map(|&p| self.to_world(p)).collect()
    }
  }
}

fn rgba(color: Color) -> Rgba<u8> {
  Rgba(color.0)
}

/// Shapes of a diagram, back to front.
pub fn layers(formation: &Formation, config: &RenderConfig) -> Vec<Box<dyn Draw<RgbaImage>>> {
  let view = config.view.to_box();
  let viewport = config.viewport();
  let line_width = viewport.to_world_length(config.line_width);
  let mut layers: Vec<Box<dyn Draw<RgbaImage>>> = vec![];

  if let Some(frame) = config.frame {
    let corners = [
      view.min,
      Point2D::new(view.max.x, view.min.y),
      view.max,
      Point2D::new(view.min.x, view.max.y)
    ];
    layers.push(Box::new(viewport.polygon(&corners)
      .stroke(line_width)
      .texture(rgba(frame))));
  }

  layers.push(Box::new(viewport.polygon(&rack::boundary())
    .stroke(line_width)
    .dashed(config.boundary_dashes)
    .texture(rgba(config.boundary))));

  layers.extend(formation.cups().iter()
    .map(|cup| cup_layer(cup, &viewport, config)));

  if let Some(color) = config.title {
    layers.push(Box::new(Label::fit(formation.title(), config.title_area(), 0.6)
      .texture(rgba(color))));
  }
  layers
}

fn cup_layer(cup: &Cup, viewport: &Viewport, config: &RenderConfig) -> Box<dyn Draw<RgbaImage>> {
  let disc = Circle
    .translate(viewport.to_world(cup.position().point()).to_vector())
    .scale(V2::splat(viewport.to_world_length(cup.radius())));
  if cup.is_phantom() {
    Box::new(disc
      .stroke(viewport.to_world_length(config.line_width))
      .dashed(config.cup_dashes)
      .texture(rgba(config.phantom)))
  } else {
    Box::new(disc.texture(rgba(cup.color())))
  }
}

pub fn render(formation: &Formation, config: &RenderConfig) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(
    config.resolution,
    config.resolution,
    rgba(config.background)
  );
  layers(formation, config).iter()
    .for_each(|layer| layer.draw(&mut image));
  image
}

impl Formation {
  /// Render with the default [`RenderConfig`] into `<directory>/<title>.png`.
  pub fn save(&self, directory: impl AsRef<Path>) -> Result<PathBuf> {
    self.save_with(directory, &RenderConfig::default())
  }

  /// The directory must already exist.
  pub fn save_with(&self, directory: impl AsRef<Path>, config: &RenderConfig) -> Result<PathBuf> {
    let directory = directory.as_ref();
    let title = self.title();
    if title.is_empty() || title.contains(['/', '\\']) {
      return Err(Error::InvalidTitle(title.to_string()));
    }
    if !directory.is_dir() {
      return Err(Error::MissingDirectory(directory.to_path_buf()));
    }
    let path = directory.join(format!("{}.png", title));
    render(self, config).save(&path)?;
    log::debug!("{:?}: {} cups -> {}", title, self.cups().len(), path.display());
    Ok(path)
  }

  /// Render into the temporary directory and open the result in the system viewer.
  pub fn show(&self) -> Result<()> {
    let path = self.save(std::env::temp_dir())?;
    viewer_succeeded(&path, open::that(&path)?);
    Ok(())
  }
}

pub(super) fn viewer_succeeded(path: &Path, status: ExitStatus) -> bool {
  if !status.success() {
    log::warn!("viewer failed to open {}: {}", path.display(), status);
  }
  status.success()
}
