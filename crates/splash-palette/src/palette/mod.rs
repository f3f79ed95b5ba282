//! Brand palette and the error types for color parsing and palette validation.

mod brand;
mod error;

pub use brand::BrandPalette;
pub use error::{PaletteError, ParseColorError};
