use pos_core::family::k_subsets;
use pos_core::SetFamily;
use pos_necklace::{
    matroid_to_grassmann_necklace, necklace_from_json, necklace_to_json, NecklaceDocument,
};

#[test]
fn document_carries_the_permutation() {
    let uniform: SetFamily = k_subsets(5, 2).collect();
    let necklace = matroid_to_grassmann_necklace(&uniform, 5).unwrap();
    let document = NecklaceDocument::new(necklace.clone()).unwrap();
    let json = necklace_to_json(&document).unwrap();
    assert!(json.contains("\"images\""));
    let parsed = necklace_from_json(&json).unwrap();
    assert_eq!(parsed.necklace, necklace);
    assert_eq!(parsed.permutation.unwrap().images(), &[3, 4, 5, 1, 2]);
}

#[test]
fn bare_necklace_is_accepted() {
    let json = r#"{"necklace":{"n":2,"k":1,"entries":[[1],[2]]}}"#;
    let document = necklace_from_json(json).unwrap();
    assert!(document.permutation.is_none());
    assert_eq!(document.necklace.k(), 1);
}

#[test]
fn mismatched_permutation_is_rejected() {
    let json = r#"{
        "necklace": {"n": 2, "k": 1, "entries": [[1], [2]]},
        "permutation": {"images": [1, 2], "coloops": []}
    }"#;
    let err = necklace_from_json(json).unwrap_err();
    assert_eq!(err.code(), "permutation-mismatch");
}

#[test]
fn unknown_schema_is_rejected() {
    let json = r#"{
        "schema_version": {"major": 2, "minor": 0, "patch": 0},
        "necklace": {"n": 1, "k": 1, "entries": [[1]]}
    }"#;
    assert_eq!(necklace_from_json(json).unwrap_err().code(), "schema-mismatch");

    let invalid = r#"{"necklace":{"n":2,"k":1,"entries":[[2],[1]]}}"#;
    assert_eq!(necklace_from_json(invalid).unwrap_err().code(), "necklace-deserialize");
}
