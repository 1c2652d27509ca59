//! Authentication for catalog administration

mod api_key;

pub use api_key::{require_admin, AdminAuth};
