//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod page;
mod web_url;

pub use page::*;
pub use web_url::*;
