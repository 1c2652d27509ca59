//! Domain layer
//!
//! Contains pure catalog business rules with no storage or transport concerns.
//! - `entities`: Category and Product with their field invariants
//! - `ports`: Gateway traits the use cases persist through

pub mod entities;
pub mod ports;
