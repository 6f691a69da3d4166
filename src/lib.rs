pub mod numeric;
pub mod aabb;
pub mod bbox;
pub mod history;
pub mod json_parser;

pub mod prelude;

pub use crate::aabb::Bounds;
pub use crate::bbox::{MinMaxBounds, equals_bounds};
pub use crate::history::{HistoryBounds, HistoryBoundsSettings, HistoryError};
