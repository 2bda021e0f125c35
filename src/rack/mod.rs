//! Slot geometry of a ten cup rack.
//!
//! ```text
//! Index:              Position (row, column):
//!       (1)                         (1, 1)
//!     (2)(3)                    (2, 1)(2, 2)
//!   (4)(5)(6)               (3, 1)(3, 2)(3, 3)
//! (7)(8)(9)(10)         (4, 1)(4, 2)(4, 3)(4, 4)
//! ```
//!
//! The front cup sits in the origin of [`TableSpace`], every row steps down by
//! [`ROW_SPACING`] and is centered horizontally, columns are [`COL_SPACING`] apart.
//!
//! Positions may use half steps, e.g. `(1.5, 1.5)` lies between the first and the second
//! row. Such positions are not slots: they are only checked against the rack bounds,
//! never against an index.

use {
  euclid::Point2D,
  crate::{
    error::{Error, Result},
    geometry::TableSpace
  }
};

pub mod cup;
pub mod formation;

pub use {
  cup::{Color, Cup},
  formation::{Formation, FormationBuilder, FormationSpec, Placement, CupCountWarning}
};

pub const ROWS: u8 = 4;
pub const SLOTS: u8 = 10;
pub const ROW_SPACING: f32 = 2.1;
pub const COL_SPACING: f32 = 2.1;
pub const CUP_RADIUS: f32 = 1.0;

const SLOT_TABLE: [(u8, u8); SLOTS as usize] = [
  (1, 1),
  (2, 1), (2, 2),
  (3, 1), (3, 2), (3, 3),
  (4, 1), (4, 2), (4, 3), (4, 4)
];

/// Index of a slot, `1..=10`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(u8);

impl SlotIndex {
  pub fn new(index: u8) -> Result<Self> {
    match index {
      1..=SLOTS => Ok(Self(index)),
      _ => Err(Error::IndexOutOfRange(index))
    }
  }

  pub fn get(self) -> u8 {
    self.0
  }

  pub fn all() -> impl Iterator<Item = Self> {
    (1..=SLOTS).map(Self)
  }

  pub fn row_column(self) -> RowColumn {
    let (row, column) = SLOT_TABLE[self.0 as usize - 1];
    RowColumn::new(row as f32, column as f32)
  }
}

/// `sum(1..row - 1) + column`
pub fn slot_index_of(row: u32, column: u32) -> u32 {
  (1..row).sum::<u32>() + column
}

/// Row and column of a position, half steps allowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RowColumn {
  pub row: f32,
  pub column: f32
}

impl RowColumn {
  pub fn new(row: f32, column: f32) -> Self {
    Self { row, column }
  }

  pub fn is_integral(&self) -> bool {
    self.row.fract() == 0.0 && self.column.fract() == 0.0
  }

  pub fn validate(&self) -> Result<()> {
    let Self { row, column } = *self;
    if !row.is_finite() || !column.is_finite() {
      return Err(Error::NonFinitePosition { row, column });
    }
    if row < 0.0 || column < 0.0 {
      return Err(Error::NegativePosition { row, column });
    }
    if column > ROWS as f32 {
      return Err(Error::ColumnOutOfRange(column));
    }
    if row < column {
      return Err(Error::ColumnExceedsRow { row, column });
    }
    if row > ROWS as f32 {
      return Err(Error::RowOutOfRange(row));
    }
    Ok(())
  }

  /// Closed form index of an integral position, `None` for half steps and
  /// positions outside of the rack.
  pub fn slot_index(&self) -> Option<SlotIndex> {
    if !self.is_integral() || self.validate().is_err() || self.column < 1.0 {
      return None;
    }
    let index = slot_index_of(self.row as u32, self.column as u32);
    u8::try_from(index).ok()
      .and_then(|index| SlotIndex::new(index).ok())
  }

  pub fn to_point(&self) -> Point2D<f32, TableSpace> {
    let row_width = (self.row - 1.0) * COL_SPACING;
    Point2D::new(
      -row_width / 2.0 + (self.column - 1.0) * COL_SPACING,
      -(self.row - 1.0) * ROW_SPACING
    )
  }
}

impl From<(f32, f32)> for RowColumn {
  fn from((row, column): (f32, f32)) -> Self {
    Self::new(row, column)
  }
}

/// A resolved position on the table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
  index: Option<SlotIndex>,
  row_column: RowColumn,
  point: Point2D<f32, TableSpace>
}

impl Position {
  pub fn from_index(index: u8) -> Result<Self> {
    let index = SlotIndex::new(index)?;
    let row_column = index.row_column();
    Ok(Self {
      index: Some(index),
      row_column,
      point: row_column.to_point()
    })
  }

  pub fn from_row_column(row_column: impl Into<RowColumn>) -> Result<Self> {
    let row_column = row_column.into();
    row_column.validate()?;
    Ok(Self {
      index: row_column.slot_index(),
      row_column,
      point: row_column.to_point()
    })
  }

  /// Both representations given; an integral position must be the slot named by the
  /// index. Half steps are not slots and keep no index.
  pub fn with_index(index: u8, row_column: impl Into<RowColumn>) -> Result<Self> {
    let row_column = row_column.into();
    row_column.validate()?;
    let given = SlotIndex::new(index)?;
    let index = if row_column.is_integral() {
      let expected = row_column.slot_index();
      if expected != Some(given) {
        return Err(Error::IndexMismatch {
          row: row_column.row,
          column: row_column.column,
          expected: expected.map(SlotIndex::get),
          given: index
        });
      }
      expected
    } else {
      None
    };
    Ok(Self {
      index,
      row_column,
      point: row_column.to_point()
    })
  }

  pub fn index(&self) -> Option<SlotIndex> {
    self.index
  }

  pub fn row_column(&self) -> RowColumn {
    self.row_column
  }

  pub fn point(&self) -> Point2D<f32, TableSpace> {
    self.point
  }

  pub fn x(&self) -> f32 {
    self.point.x
  }

  pub fn y(&self) -> f32 {
    self.point.y
  }
}

/// Dotted triangle drawn around the rack.
pub fn boundary() -> [Point2D<f32, TableSpace>; 3] {
  [
    Point2D::new(-2.3 * COL_SPACING, -3.5 * ROW_SPACING),
    Point2D::new(0.0, 1.1 * ROW_SPACING),
    Point2D::new(2.3 * COL_SPACING, -3.5 * ROW_SPACING)
  ]
}
