//! Service Ports
//!
//! Abstract interfaces for external services the domain calls out to.

mod url_validator;

pub use url_validator::*;
