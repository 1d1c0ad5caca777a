#![deny(missing_docs)]
#![doc = "Grassmann necklaces, decorated permutations and positroids built from \
matroids on {1, ..., n}."]

/// The validated necklace type.
pub mod necklace;
/// Decorated permutations and their necklaces.
pub mod permutation;
pub mod positroid;
/// JSON documents for necklaces.
#[path = "serde.rs"]
pub mod serde_io;

pub use necklace::{is_grassmann_necklace, GrassmannNecklace};
pub use permutation::DecoratedPermutation;
pub use positroid::{
    circuits_to_grassmann_necklace, is_positroid, matroid_to_grassmann_necklace,
    necklace_to_positroid_bases,
};
pub use serde_io::{necklace_from_json, necklace_to_json, NecklaceDocument};
