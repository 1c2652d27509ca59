//! Application layer
//!
//! Use cases coordinate domain entities and gateway ports.

pub mod category_use_case;
pub mod product_use_case;

pub use category_use_case::CategoryUseCase;
pub use product_use_case::ProductUseCase;
