use {
  serde::Deserialize,
  crate::{
    error::Error,
    rack::{Position, CUP_RADIUS}
  }
};

/// RGBA color. The named constants use the CSS color keyword values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color(pub [u8; 4]);

impl Color {
  pub const RED: Self = Self([255, 0, 0, 255]);
  pub const BLUE: Self = Self([0, 0, 255, 255]);
  pub const GREEN: Self = Self([0, 128, 0, 255]);
  pub const ORANGE: Self = Self([255, 165, 0, 255]);
  pub const GREY: Self = Self([128, 128, 128, 255]);
  pub const BLACK: Self = Self([0, 0, 0, 255]);
  pub const WHITE: Self = Self([255, 255, 255, 255]);

  pub fn from_name(name: &str) -> Option<Self> {
    Some(match name.to_ascii_lowercase().as_str() {
      "red" => Self::RED,
      "blue" => Self::BLUE,
      "green" => Self::GREEN,
      "orange" => Self::ORANGE,
      "grey" | "gray" => Self::GREY,
      "black" => Self::BLACK,
      "white" => Self::WHITE,
      _ => return None
    })
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
  Name(String),
  Rgba([u8; 4])
}

impl TryFrom<ColorRepr> for Color {
  type Error = Error;

  fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
    match repr {
      ColorRepr::Name(name) => Self::from_name(&name).ok_or(Error::UnknownColor(name)),
      ColorRepr::Rgba(rgba) => Ok(Self(rgba))
    }
  }
}

/// A cup placed on the table.
///
/// Phantom cups mark where a cup used to stand; they are drawn as a dashed
/// outline, and otherwise behave exactly like real cups.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cup {
  position: Position,
  radius: f32,
  color: Color,
  phantom: bool
}

impl Cup {
  pub fn new(position: Position) -> Self {
    Self {
      position,
      radius: CUP_RADIUS,
      color: Color::RED,
      phantom: false
    }
  }

  pub fn with_radius(self, radius: f32) -> Self {
    Self { radius, ..self }
  }

  pub fn with_color(self, color: Color) -> Self {
    Self { color, ..self }
  }

  pub fn set_phantom(&mut self, phantom: bool) {
    self.phantom = phantom;
  }

  pub fn position(&self) -> &Position {
    &self.position
  }

  pub fn radius(&self) -> f32 {
    self.radius
  }

  pub fn color(&self) -> Color {
    self.color
  }

  pub fn is_phantom(&self) -> bool {
    self.phantom
  }
}
