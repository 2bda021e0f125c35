//! Geometry and diagrams of a ten cup beer pong rack.
//!
//! The crate is split into [`rack`], which resolves slot indices and `(row, column)`
//! positions into table coordinates and assembles cups into a [`Formation`](rack::Formation),
//! and [`drawing`], which renders formations into PNG images (requires `drawing` feature,
//! enabled by default).
//!
//! # Basic usage
//! ```no_run
//! # use pong_rack::{error::Result, rack::Formation};
//! # fn main() -> Result<()> {
//! // cups 4, 5, 6, 8 and 9 are left, the rest are drawn as phantoms
//! let formation = Formation::builder("Wenzent")
//!   .indices([4, 5, 6, 8, 9])
//!   .phantoms([1u8, 2, 3, 7, 10])
//!   .build()?;
//! formation.save("./configs/")?; // ./configs/Wenzent.png
//! #   Ok(())
//! # }
//! ```
//!
//! Positions between slots are allowed with half steps:
//! ```
//! # use pong_rack::rack::{Position, RowColumn, ROW_SPACING};
//! let between = Position::from_row_column(RowColumn::new(2.5, 1.5)).unwrap();
//! assert_eq!(between.index(), None);
//! assert_eq!(between.y(), -1.5 * ROW_SPACING);
//! ```

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod rack;
#[cfg(feature = "drawing")]
pub mod drawing;
