//! Budget statistics to ring geometry.
//!
//! Pure arithmetic: four fields of a [`BudgetStat`](crate::stats::BudgetStat)
//! become three arc fractions, a deviation color and three labels.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::GeometryError;
pub use operations::{
    format_days, format_signed_whole, format_whole, transform, transform_or_placeholder,
};
pub use types::{ArcSpec, DeviationColor, DisplaySnapshot};
