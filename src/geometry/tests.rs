use {
  super::*,
  std::f32::consts::PI
};

fn triangle() -> Polygon {
  Polygon {
    vertices: vec![
      Point2D::new(0.0, 0.0),
      Point2D::new(1.0, 0.0),
      Point2D::new(0.0, 1.0)
    ]
  }
}

#[test] fn polygon_sign() {
  let triangle = triangle();
  assert!(triangle.sdf(Point2D::new(0.25, 0.25)) < 0.0);
  assert!(triangle.sdf(Point2D::new(1.0, 1.0)) > 0.0);
  assert!((triangle.sdf(Point2D::new(0.5, -0.5)) - 0.5).abs() < 1e-6);
  assert!((triangle.sdf(Point2D::new(0.1, 0.5)) + 0.1).abs() < 1e-6);
}

#[test] fn polygon_winding_is_irrelevant() {
  let mut reversed = triangle();
  reversed.vertices.reverse();
  let p = Point2D::new(0.2, 0.3);
  assert!((reversed.sdf(p) - triangle().sdf(p)).abs() < 1e-6);
}

#[test] fn placed_circle() {
  let circle = Circle
    .translate(V2::new(0.5, 0.25))
    .scale(V2::splat(0.125));
  assert!((circle.sdf(Point2D::new(0.5, 0.25)) + 0.125).abs() < 1e-6);
  assert!(circle.sdf(Point2D::new(0.5, 0.375)).abs() < 1e-6);
  let bounding_box = circle.bounding_box();
  assert!((bounding_box.min.x - 0.375).abs() < 1e-6);
  assert!((bounding_box.max.y - 0.375).abs() < 1e-6);
}

#[test] fn stroke_is_hollow() {
  let ring = Circle.stroke(0.2);
  assert!(ring.sdf(Point2D::new(0.0, 0.0)) > 0.0);
  assert!(ring.sdf(Point2D::new(1.0, 0.0)) < 0.0);
  assert!(ring.sdf(Point2D::new(1.2, 0.0)) > 0.0);
  assert!((ring.bounding_box().max.x - 1.1).abs() < 1e-6);
}

#[test] fn dashes_alternate() {
  let dashes = 8;
  let ring = Circle.stroke(0.2).dashed(dashes);
  let sector = 2.0 * PI / dashes as f32;
  let at = |angle: f32| ring.sdf(Point2D::new(angle.cos(), angle.sin()));
  for i in 0..dashes {
    let start = i as f32 * sector;
    assert!(at(start + sector * 0.25) < 0.0, "dash {}", i);
    assert!(at(start + sector * 0.75) > 0.0, "gap {}", i);
  }
}

#[test] fn pixel_space() {
  let pixel = to_pixel_space(Point2D::new(0.5, 0.25), Size2D::new(200, 100));
  assert_eq!(pixel, Point2D::new(100, 25));
}
