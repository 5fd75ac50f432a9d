use crate::errors::ReferenceError;
use crate::resolver::{is_difference_significant, similarity, RefToken};
use crate::tests::common::test_catalogs;
use pretty_assertions::assert_eq;

#[test]
fn exact_name_resolves_exactly() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .pokedex
        .resolve(&RefToken::Name("Bulbasaur".to_owned()))
        .expect("known species");
    assert_eq!(resolved.entity.name, "Bulbasaur");
    assert!(resolved.exact);
}

#[test]
fn index_token_resolves_positionally() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .pokedex
        .resolve(&RefToken::Index(2))
        .expect("index in range");
    assert_eq!(resolved.entity.name, "Typhlosion");
    assert!(resolved.exact);
}

#[test]
fn out_of_range_index_is_rejected() {
    let catalogs = test_catalogs();
    let err = catalogs
        .pokedex
        .resolve(&RefToken::Index(99))
        .expect_err("index out of range");
    assert!(matches!(err, ReferenceError::InvalidIndex { index: 99, .. }));
}

#[test]
fn null_token_finds_the_null_entry() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .abilities
        .resolve(&RefToken::Null)
        .expect("abilities have a null entry");
    assert_eq!(resolved.entity.name, None);
    assert!(resolved.exact);
}

#[test]
fn misspelled_name_is_autocorrected() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .pokedex
        .resolve(&RefToken::Name("Groundon".to_owned()))
        .expect("close enough to Groudon");
    assert_eq!(resolved.entity.name, "Groudon");
    assert!(!resolved.exact);
}

#[test]
fn lowercase_species_name_counts_as_exact() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .pokedex
        .resolve(&RefToken::Name("bulbasaur".to_owned()))
        .expect("case-folded match");
    assert_eq!(resolved.entity.name, "Bulbasaur");
    assert!(resolved.exact);
}

#[test]
fn ascii_gender_suffix_finds_glyph_name() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .pokedex
        .resolve(&RefToken::Name("nidoran-m".to_owned()))
        .expect("normalized match");
    assert_eq!(resolved.entity.name, "Nidoran♂");
}

#[test]
fn equally_close_candidates_are_ambiguous() {
    let catalogs = test_catalogs();
    let err = catalogs
        .moves
        .resolve(&RefToken::Name("Tockle".to_owned()))
        .expect_err("Tackle and Tickle are equally close");
    match err {
        ReferenceError::Ambiguous { candidates, .. } => {
            assert_eq!(candidates, vec!["Tackle".to_owned(), "Tickle".to_owned()]);
        }
        other => panic!("expected ambiguity, got {:?}", other),
    }
}

#[test]
fn unrecognizable_name_is_unknown() {
    let catalogs = test_catalogs();
    let err = catalogs
        .pokedex
        .resolve(&RefToken::Name("Foobar".to_owned()))
        .expect_err("nothing is close to Foobar");
    assert!(matches!(err, ReferenceError::Unknown { .. }));
}

#[test]
fn balls_are_referenced_without_suffix() {
    let catalogs = test_catalogs();
    let resolved = catalogs
        .balls
        .resolve(&RefToken::Name("Master".to_owned()))
        .expect("suffix-stripped match");
    assert_eq!(resolved.entity.name.as_deref(), Some("Master Ball"));
    assert!(resolved.exact);
}

#[test]
fn non_ball_in_ball_slot_is_rejected() {
    let catalogs = test_catalogs();
    let err = catalogs
        .balls
        .resolve(&RefToken::Name("Focus Band".to_owned()))
        .expect_err("not a ball");
    assert!(matches!(err, ReferenceError::NotInCategory { .. }));
}

#[test]
fn similarity_is_case_insensitive() {
    assert_eq!(similarity("Surf", "surf"), 1.0);
    assert!(similarity("Groundon", "Groudon") > 0.85);
}

#[test]
fn hyphens_and_spaces_are_insignificant() {
    assert!(!is_difference_significant("pokeball", "Poké Ball"));
    assert!(is_difference_significant("Thunder", "Thunderbolt"));
}
