//! XML utilities and the typed element view used by the converter.

mod element;
mod utils;

pub use element::Element;
pub use utils::{parse_document, qualified_name};
