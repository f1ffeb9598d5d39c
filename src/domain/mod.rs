//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. Validation happens at
//! construction time, so an invalid phone number cannot be represented.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;
pub mod record_id;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
pub use record_id::RecordId;
