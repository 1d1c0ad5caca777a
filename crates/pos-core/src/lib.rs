#![deny(missing_docs)]
#![doc = "Core set types, error taxonomy and cyclic orders shared by the positroid crates."]

pub mod cyclic;
pub mod errors;
pub mod family;
pub mod schema;
mod set;

pub use cyclic::{compare_sets, cyclic_shift, gale_leq, min_under_offset};
pub use errors::{ErrorInfo, PosError};
pub use family::{is_in_range, is_non_empty, is_uniform_size};
pub use schema::SchemaVersion;
pub use set::{family_from, Element, ElementSet, SetFamily};
