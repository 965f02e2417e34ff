//! Request helpers shared by the HTTP handlers.
//!
//! - [`user_id`] - Path identifier parsing
//! - [`json_body`] - JSON body extraction

pub mod json_body;
pub mod user_id;
