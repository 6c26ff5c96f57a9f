//! Service layer for business logic.

pub mod tag_generator;

pub use tag_generator::TagGenerator;
