use std::collections::BTreeSet;

use pos_core::ElementSet;
use pos_le::{
    grassmann_necklace_to_le_diagram, le_diagram_to_decorated_permutation,
    le_diagram_to_grassmann_necklace, le_diagrams, positroid_dimension, Cell, LeDiagram,
};
use pos_matroid::{generate_matroids, is_matroid_bases};
use pos_necklace::{matroid_to_grassmann_necklace, GrassmannNecklace};

use Cell::{Plus as P, Zero as Z};

fn sets(raw: &[&[usize]]) -> Vec<ElementSet> {
    raw.iter().map(|set| set.iter().copied().collect()).collect()
}

#[test]
fn full_square_is_the_uniform_matroid() {
    let diagram = LeDiagram::new(4, 2, vec![vec![P, P], vec![P, P]]).unwrap();
    let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
    assert_eq!(
        necklace.entries(),
        sets(&[&[1, 2], &[2, 3], &[3, 4], &[1, 4]]).as_slice()
    );
    let permutation = le_diagram_to_decorated_permutation(&diagram).unwrap();
    assert_eq!(permutation.images(), &[3, 4, 1, 2]);
}

#[test]
fn empty_shape_is_a_torus_fixed_point() {
    let diagram = LeDiagram::new(4, 2, vec![Vec::new(), Vec::new()]).unwrap();
    let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
    assert_eq!(necklace.entries(), vec![ElementSet::from([3, 4]); 4].as_slice());
    let permutation = le_diagram_to_decorated_permutation(&diagram).unwrap();
    assert_eq!(permutation.coloops(), &ElementSet::from([3, 4]));
    assert_eq!(permutation.loops(), ElementSet::from([1, 2]));
}

#[test]
fn concrete_fillings() {
    let diagram = LeDiagram::new(4, 2, vec![vec![Z, P], vec![P, P]]).unwrap();
    let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
    assert_eq!(
        necklace.entries(),
        sets(&[&[1, 2], &[2, 3], &[1, 3], &[1, 4]]).as_slice()
    );
    assert_eq!(positroid_dimension(&necklace).unwrap(), 3);

    let diagram = LeDiagram::new(4, 2, vec![vec![P, Z], vec![P]]).unwrap();
    let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
    assert_eq!(
        necklace.entries(),
        sets(&[&[1, 3], &[3, 4], &[3, 4], &[1, 4]]).as_slice()
    );
    assert_eq!(grassmann_necklace_to_le_diagram(&necklace).unwrap(), diagram);
}

#[test]
fn round_trip_for_every_small_diagram() {
    for n in 0..=6 {
        for k in 0..=n {
            let mut necklaces = BTreeSet::new();
            for diagram in le_diagrams(n, k).unwrap() {
                let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
                assert_eq!(necklace.k(), k);
                assert_eq!(
                    grassmann_necklace_to_le_diagram(&necklace).unwrap(),
                    diagram,
                    "n={n} k={k}"
                );
                necklaces.insert(necklace.into_entries());
            }
            assert_eq!(necklaces.len(), le_diagrams(n, k).unwrap().count());
        }
    }
}

#[test]
fn le_necklaces_are_the_matroid_necklaces() {
    for n in 1..=4 {
        for k in 0..=n {
            let from_matroids: BTreeSet<GrassmannNecklace> = generate_matroids(n, k)
                .unwrap()
                .map(|matroid| matroid_to_grassmann_necklace(&matroid, n).unwrap())
                .collect();
            let from_diagrams: BTreeSet<GrassmannNecklace> = le_diagrams(n, k)
                .unwrap()
                .map(|diagram| le_diagram_to_grassmann_necklace(&diagram).unwrap())
                .collect();
            assert_eq!(from_matroids, from_diagrams, "n={n} k={k}");
        }
    }
}

#[test]
fn positroid_of_each_diagram_has_that_necklace() {
    for k in 0..=5 {
        for diagram in le_diagrams(5, k).unwrap() {
            let necklace = le_diagram_to_grassmann_necklace(&diagram).unwrap();
            let positroid = necklace.positroid_bases();
            assert!(is_matroid_bases(&positroid));
            assert_eq!(matroid_to_grassmann_necklace(&positroid, 5).unwrap(), necklace);
        }
    }
}

#[test]
fn degenerate_necklaces() {
    let nothing = GrassmannNecklace::new(0, 0, Vec::new()).unwrap();
    let diagram = grassmann_necklace_to_le_diagram(&nothing).unwrap();
    assert!(diagram.rows().is_empty());

    let loops = GrassmannNecklace::new(3, 0, vec![ElementSet::new(); 3]).unwrap();
    assert_eq!(positroid_dimension(&loops).unwrap(), 0);

    let coloops = GrassmannNecklace::new(2, 2, vec![ElementSet::from([1, 2]); 2]).unwrap();
    let diagram = grassmann_necklace_to_le_diagram(&coloops).unwrap();
    assert_eq!(diagram.rows(), &[Vec::<Cell>::new(), Vec::new()]);
}
