#![deny(missing_docs)]
#![doc = "Matroid axiom checkers, exhaustive enumeration and circuit closure over \
the ground set {1, ..., n}."]

/// Basis-exchange checker.
pub mod bases;
/// Circuit axiom checker.
pub mod circuits;
/// Fixed-point closure of circuit families.
pub mod closure;
pub mod convert;
/// Exhaustive enumeration of bases families.
pub mod enumerate;
/// Canonical content hashes for set families.
pub mod hash;
/// JSON documents for matroids and circuit families.
#[path = "serde.rs"]
pub mod serde_io;

pub use bases::{
    find_exchange_violation, has_basis_exchange_property, has_exchange, is_matroid_bases,
    ExchangeViolation,
};
pub use circuits::{
    find_circuit_violation, find_elimination_violation, find_minimality_violation,
    has_circuit_elimination, is_matroid_circuit, is_minimally_dependent, CircuitViolation,
};
pub use closure::{matroid_closure, matroid_closure_with, ClosureOpts, ClosureOutcome};
pub use convert::{bases_to_circuits, circuits_to_bases, is_independent, rank_of};
pub use enumerate::{
    enumerate_matroids, generate_matroids, generate_matroids_slice, par_generate_matroids,
    EnumerationOpts,
};
pub use hash::canonical_hash;
pub use serde_io::{CircuitDocument, MatroidDocument};
