use {
  std::fmt,
  serde::Deserialize,
  crate::{
    error::{Error, Result},
    rack::{Color, Cup, Position, RowColumn, SlotIndex, SLOTS}
  }
};

/// Where to put a cup: a slot index, or a `(row, column)` position.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Placement {
  Index(u8),
  Position(f32, f32)
}

impl Placement {
  pub fn resolve(self) -> Result<Position> {
    match self {
      Placement::Index(index) => Position::from_index(index),
      Placement::Position(row, column) => Position::from_row_column((row, column))
    }
  }

  fn is_index(&self) -> bool {
    matches!(self, Placement::Index(_))
  }
}

impl From<u8> for Placement {
  fn from(index: u8) -> Self { Placement::Index(index) }
}
impl From<(f32, f32)> for Placement {
  fn from((row, column): (f32, f32)) -> Self { Placement::Position(row, column) }
}
impl From<RowColumn> for Placement {
  fn from(rc: RowColumn) -> Self { Placement::Position(rc.row, rc.column) }
}

/// Suspicious cup count. Reported, never rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CupCountWarning {
  NoCups,
  TooManyCups(usize)
}

impl fmt::Display for CupCountWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CupCountWarning::NoCups => write!(f, "no cups were created"),
      CupCountWarning::TooManyCups(n) => write!(f, "more than {} cups were created: {}", SLOTS, n)
    }
  }
}

/// A titled set of cups, drawn as one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
  title: String,
  cups: Vec<Cup>
}

impl Formation {
  pub fn builder(title: impl Into<String>) -> FormationBuilder {
    FormationBuilder {
      title: title.into(),
      ..Default::default()
    }
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn cups(&self) -> &[Cup] {
    &self.cups
  }

  pub fn count_warning(&self) -> Option<CupCountWarning> {
    match self.cups.len() {
      0 => Some(CupCountWarning::NoCups),
      n if n > SLOTS as usize => Some(CupCountWarning::TooManyCups(n)),
      _ => None
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct FormationBuilder {
  title: String,
  indices: Option<Vec<u8>>,
  positions: Option<Vec<RowColumn>>,
  phantoms: Option<Vec<Placement>>,
  color: Option<Color>
}

impl FormationBuilder {
  pub fn indices(mut self, indices: impl IntoIterator<Item = u8>) -> Self {
    self.indices = Some(indices.into_iter().collect());
    self
  }

  pub fn positions<P: Into<RowColumn>>(mut self, positions: impl IntoIterator<Item = P>) -> Self {
    self.positions = Some(positions.into_iter().map(Into::into).collect());
    self
  }

  /// Either all indices, or all positions.
  pub fn phantoms<P: Into<Placement>>(mut self, phantoms: impl IntoIterator<Item = P>) -> Self {
    self.phantoms = Some(phantoms.into_iter().map(Into::into).collect());
    self
  }

  /// Color of the real cups.
  pub fn color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }

  pub fn build(self) -> Result<Formation> {
    let FormationBuilder { title, indices, positions, phantoms, color } = self;
    let color = color.unwrap_or(Color::RED);
    let real = |position| Cup::new(position).with_color(color);
    let mut cups = vec![];

    if let Some(indices) = &indices {
      for &index in indices {
        cups.push(real(Position::from_index(index)?));
      }
    }

    if let Some(positions) = &positions {
      for &position in positions {
        cups.push(real(Position::from_row_column(position)?));
      }
    }

    if let Some(phantoms) = &phantoms {
      if let Some(first) = phantoms.first() {
        if phantoms.iter().any(|p| p.is_index() != first.is_index()) {
          return Err(Error::MixedPhantoms);
        }
      }
      for &placement in phantoms {
        let mut cup = Cup::new(placement.resolve()?);
        cup.set_phantom(true);
        cups.push(cup);
      }
    }

    if indices.is_none() && positions.is_none() && phantoms.is_none() {
      // full rack, all cups real
      for index in SlotIndex::all() {
        cups.push(real(Position::from_index(index.get())?));
      }
    }

    let formation = Formation { title, cups };
    if let Some(warning) = formation.count_warning() {
      log::warn!("{}: {}", formation.title, warning);
    }
    Ok(formation)
  }
}

/// Declarative form of [`FormationBuilder`].
///
/// ```
/// # use pong_rack::rack::FormationSpec;
/// let spec: FormationSpec = serde_json::from_str(r#"{
///   "title": "Wenzent",
///   "indices": [4, 5, 6, 8, 9],
///   "phantoms": [[1.5, 1.5]]
/// }"#).unwrap();
/// assert_eq!(spec.build().unwrap().cups().len(), 6);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormationSpec {
  pub title: String,
  #[serde(default)]
  pub indices: Option<Vec<u8>>,
  #[serde(default)]
  pub positions: Option<Vec<(f32, f32)>>,
  #[serde(default)]
  pub phantoms: Option<Vec<Placement>>,
  #[serde(default)]
  pub color: Option<Color>
}

impl FormationSpec {
  pub fn build(self) -> Result<Formation> {
    let mut builder = Formation::builder(self.title);
    if let Some(indices) = self.indices {
      builder = builder.indices(indices);
    }
    if let Some(positions) = self.positions {
      builder = builder.positions(positions);
    }
    if let Some(phantoms) = self.phantoms {
      builder = builder.phantoms(phantoms);
    }
    if let Some(color) = self.color {
      builder = builder.color(color);
    }
    builder.build()
  }
}

/// Formations rendered by the `pong-rack` binary.
pub fn presets() -> Result<Vec<Formation>> {
  Ok(vec![
    Formation::builder("Full Table").build()?,
    Formation::builder("Empty Table").phantoms(1..=SLOTS).build()?,
    Formation::builder("Wenzent").indices([4, 5, 6, 8, 9]).build()?
  ])
}
