//! Crate error type.
//!
//! Validation failures of the position resolver and of formation assembly are
//! fatal to the construction call, so they share one enum with the foreign I/O
//! errors of the renderer.

use {
  std::path::PathBuf,
  thiserror::Error
};

#[derive(Error, Debug)]
pub enum Error {
  #[error("slot index must be in 1..=10, given index: {0}")]
  IndexOutOfRange(u8),
  #[error("position must be finite, given ({row}, {column})")]
  NonFinitePosition { row: f32, column: f32 },
  #[error("position must be positive, given ({row}, {column})")]
  NegativePosition { row: f32, column: f32 },
  #[error("the row must be greater than or equal to the column, given ({row}, {column})")]
  ColumnExceedsRow { row: f32, column: f32 },
  #[error("the row must be less than or equal to 4, given row: {0}")]
  RowOutOfRange(f32),
  #[error("the column must be less than or equal to 4, given column: {0}")]
  ColumnOutOfRange(f32),
  /// `expected` is `None` when the position is not a slot of the rack.
  #[error(
    "index does not match the position ({row}, {column}); expected index: {}, given index: {given}",
    .expected.map_or_else(|| "none".to_string(), |index| index.to_string())
  )]
  IndexMismatch { row: f32, column: f32, expected: Option<u8>, given: u8 },
  #[error("phantoms must be a list of indices or a list of positions, not both")]
  MixedPhantoms,
  #[error("unknown color name: {0:?}")]
  UnknownColor(String),
  #[error("title {0:?} can not be used as a file name")]
  InvalidTitle(String),
  #[error("output directory does not exist: {}", .0.display())]
  MissingDirectory(PathBuf),

  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[cfg(feature = "drawing")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
