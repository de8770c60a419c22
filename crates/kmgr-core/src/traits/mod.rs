//! Core traits for the CRUD surface the resource layer is written against.

mod primitives;

pub use primitives::Primitives;
