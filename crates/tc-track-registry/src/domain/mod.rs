//! # Domain Layer
//!
//! Pure business logic for the track catalog: value objects, entities, and
//! the validation and authorization predicates that gate every mutation.

pub mod authorization;
pub mod entities;
pub mod validation;
pub mod value_objects;
