//! Authentication: token codec and caller extractors

pub mod extract;
pub mod jwt;

pub use extract::{AdminUser, CurrentUser};
