use {
  super::*,
  crate::{
    error::Error,
    geometry::to_pixel_space,
    rack::{self, Color, Formation, Position}
  },
  anyhow::Result,
  image::{Rgba, RgbaImage}
};

fn close(a: Rgba<u8>, b: Color) -> bool {
  a.0.iter().zip(b.0).all(|(&a, b)| a.abs_diff(b) <= 1)
}

fn pixel_at(image: &RgbaImage, config: &RenderConfig, point: Point2D<f32, crate::geometry::TableSpace>) -> Rgba<u8> {
  let viewport = config.viewport();
  let pixel = to_pixel_space(viewport.to_world(point), Size2D::new(config.resolution, config.resolution));
  *image.get_pixel(pixel.x, pixel.y)
}

#[test] fn viewport_flips_and_centers() {
  let view = ViewBounds::default();
  let viewport = Viewport::new(view.to_box());
  let top = viewport.to_world(Point2D::new(0.0, view.y_max));
  let bottom = viewport.to_world(Point2D::new(0.0, view.y_min));
  assert!(top.y < bottom.y);
  assert!((top.x - 0.5).abs() < 1e-6);
  assert!(((top.y + bottom.y) / 2.0 - 0.5).abs() < 1e-6);
  assert!((viewport.to_world_length(view.x_max - view.x_min) - 1.0).abs() < 1e-6);
}

#[test] fn real_cups_are_filled() -> Result<()> {
  let config = RenderConfig { resolution: 256, ..Default::default() };
  let formation = Formation::builder("Wenzent")
    .indices([4, 5, 6, 8, 9])
    .build()?;
  let image = render(&formation, &config);
  for index in [4, 5, 6, 8, 9] {
    let center = Position::from_index(index)?.point();
    assert!(close(pixel_at(&image, &config, center), Color::RED), "cup {}", index);
  }
  // removed cup stays empty
  let removed = Position::from_index(1)?.point();
  assert!(close(pixel_at(&image, &config, removed), Color::WHITE));
  Ok(())
}

#[test] fn phantom_cups_are_dashed_outlines() -> Result<()> {
  let config = RenderConfig {
    resolution: 512,
    line_width: 0.2,
    frame: None,
    ..Default::default()
  };
  let formation = Formation::builder("Phantom")
    .phantoms([5u8])
    .build()?;
  let image = render(&formation, &config);
  let center = Position::from_index(5)?.point();
  assert!(close(pixel_at(&image, &config, center), Color::WHITE));

  let (mut dashes, mut gaps) = (0, 0);
  for step in 0..360 {
    let angle = (step as f32).to_radians();
    let point = center + euclid::Vector2D::new(angle.cos(), angle.sin()) * rack::CUP_RADIUS;
    let pixel = pixel_at(&image, &config, point);
    if close(pixel, Color::WHITE) { gaps += 1 }
    if pixel.0[0] < 200 { dashes += 1 }
  }
  assert!(dashes > 30, "{} dashes", dashes);
  assert!(gaps > 30, "{} gaps", gaps);
  Ok(())
}

#[test] fn layer_count() -> Result<()> {
  let formation = Formation::builder("Full Table").build()?;
  assert_eq!(layers(&formation, &RenderConfig::default()).len(), 13);
  let config = RenderConfig { frame: None, ..Default::default() };
  assert_eq!(layers(&formation, &config).len(), 12);
  let config = RenderConfig { frame: None, title: None, ..Default::default() };
  assert_eq!(layers(&formation, &config).len(), 11);
  Ok(())
}

#[test] fn save_writes_title_png() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let config = RenderConfig { resolution: 64, ..Default::default() };
  let formation = Formation::builder("Empty Table")
    .phantoms(1..=10u8)
    .build()?;
  let path = formation.save_with(dir.path(), &config)?;
  assert_eq!(path, dir.path().join("Empty Table.png"));
  let image = image::open(&path)?.to_rgba8();
  assert_eq!(image.dimensions(), (64, 64));
  Ok(())
}

#[test] fn save_requires_directory() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let formation = Formation::builder("Full Table").build()?;
  let err = formation.save(dir.path().join("missing")).unwrap_err();
  assert!(matches!(err, Error::MissingDirectory(_)), "{}", err);
  Ok(())
}

#[test] fn save_rejects_path_titles() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let formation = Formation::builder("../escape").build()?;
  assert!(matches!(formation.save(dir.path()), Err(Error::InvalidTitle(_))));
  Ok(())
}

#[test] fn config_from_json() -> Result<()> {
  let config: RenderConfig = serde_json::from_str(r#"{
    "resolution": 128,
    "frame": null,
    "phantom": [0, 0, 255, 255],
    "view": { "x_min": -5, "x_max": 5, "y_min": -7, "y_max": 3 }
  }"#)?;
  assert_eq!(config.resolution, 128);
  assert_eq!(config.frame, None);
  assert_eq!(config.phantom, Color([0, 0, 255, 255]));
  assert_eq!(config.view.x_min, -5.0);
  assert_eq!(config.background, Color::WHITE);
  Ok(())
}

fn band_pixels<'a>(image: &'a RgbaImage, config: &RenderConfig) -> impl Iterator<Item = Rgba<u8>> + 'a {
  let rows = (config.title_band * config.resolution as f32) as u32;
  image.rows().take(rows as usize).flatten().copied()
}

#[test] fn title_is_drawn_above_the_view() -> Result<()> {
  let config = RenderConfig { resolution: 320, frame: None, ..Default::default() };
  let formation = Formation::builder("Wenzent").indices([4, 5, 6, 8, 9]).build()?;
  let image = render(&formation, &config);
  let ink = band_pixels(&image, &config)
    .filter(|&pixel| pixel.0[0] < 128)
    .count();
  assert!(ink > 50, "{} title pixels", ink);

  let top = config.viewport().to_world(Point2D::new(0.0, config.view.y_max));
  assert!(top.y >= config.title_band - 1e-6, "{:?}", top);
  Ok(())
}

#[test] fn untitled_band_is_empty() -> Result<()> {
  let config = RenderConfig { resolution: 320, frame: None, title: None, ..Default::default() };
  let formation = Formation::builder("Wenzent").indices([4, 5, 6, 8, 9]).build()?;
  let image = render(&formation, &config);
  assert!(band_pixels(&image, &config).all(|pixel| close(pixel, Color::WHITE)));
  Ok(())
}

#[test] fn label_glyph_cells() {
  // the stem of "I" occupies bits 2 and 3 of the middle rows
  let label = Label::new("I", Point2D::origin(), 0.1);
  assert!(label.sdf(Point2D::new(0.35, 0.35)) < 0.0);
  assert!(label.sdf(Point2D::new(0.05, 0.35)) > 0.0);
  assert!(label.sdf(Point2D::new(2.0, 2.0)) > 0.0);
  let bbox = label.bounding_box();
  assert!((bbox.width() - 0.8).abs() < 1e-6 && (bbox.height() - 0.8).abs() < 1e-6);
}

#[test] fn label_fits_area() {
  let area = Box2D::new(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.1));
  for text in ["Full Table", "a much longer title than the band can hold at full size"] {
    let bbox = Label::fit(text, area, 0.6).bounding_box();
    assert!(area.contains_box(&bbox), "{}: {:?}", text, bbox);
    assert!((bbox.center().x - 0.5).abs() < 1e-5);
  }
}

#[cfg(unix)]
#[test] fn failing_viewer_is_reported() {
  use std::{os::unix::process::ExitStatusExt, process::ExitStatus};
  let path = std::path::Path::new("Full Table.png");
  assert!(figure::viewer_succeeded(path, ExitStatus::from_raw(0)));
  assert!(!figure::viewer_succeeded(path, ExitStatus::from_raw(1 << 8)));
}
