//! Element registry system for DocBook-to-RST conversion.
//!
//! Element handlers are registered for specific tag names. The engine
//! dispatches each element to its handler, returns nothing for tags in the
//! skip set and rejects every other tag.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use config::create_docbook_registry;
pub use core::ElementRegistry;
pub use engine::ConvertEngine;
pub use handler::{concat, indent, ElementHandler, RecurseFn};
pub use types::{ConvertContext, ElementType};
