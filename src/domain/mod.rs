//! Domain Layer
//!
//! Pure arithmetic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Operation requests and their evaluations
//! - `value_objects/` - Immutable value types (Operator)
//! - `services/` - The stateless calculator

pub mod entities;
pub mod services;
pub mod value_objects;
