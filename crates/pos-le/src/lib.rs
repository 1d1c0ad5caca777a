#![deny(missing_docs)]
#![doc = "Le-diagram enumeration and the bijection between Le-diagrams and \
Grassmann necklaces."]

pub mod bijection;
/// Le-diagrams and their enumeration.
pub mod diagram;
pub mod filling;
pub mod shape;

pub use bijection::{
    grassmann_necklace_to_le_diagram, le_diagram_to_decorated_permutation,
    le_diagram_to_grassmann_necklace, positroid_dimension,
};
pub use diagram::{has_plus_property, le_diagrams, next_le_diagram, Cell, LeDiagram, LeDiagrams};
pub use filling::{next_filled_tableau, next_plus_zero_row, Fillings, PlusZeroRows};
pub use shape::{next_young_diagram, YoungShapes};
