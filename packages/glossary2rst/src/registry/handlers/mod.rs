//! Element handlers for DocBook glossaries.

mod inline;
mod structural;

pub use inline::*;
pub use structural::*;
