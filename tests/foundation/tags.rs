//! Integration tests for Tag and TagSet

use gramcheck_foundation::{ErrorKind, Tag, TagSet};
use proptest::prelude::*;

// =============================================================================
// Tag Parsing
// =============================================================================

#[test]
fn penn_tags_parse() {
    assert_eq!("NN".parse::<Tag>().unwrap(), Tag::NN);
    assert_eq!("PRP$".parse::<Tag>().unwrap(), Tag::PRPS);
    assert_eq!("WP$".parse::<Tag>().unwrap(), Tag::WPS);
    assert_eq!("MD".parse::<Tag>().unwrap(), Tag::MD);
}

#[test]
fn punctuation_and_space_tags_fold() {
    for tag in [".", ",", ":", "''", "``", "-LRB-", "-RRB-", "HYPH", "NFP", "$", "#"] {
        assert_eq!(tag.parse::<Tag>().unwrap(), Tag::Punctuation, "{tag}");
    }
    assert_eq!("_SP".parse::<Tag>().unwrap(), Tag::Unclassified);
    assert_eq!("XX".parse::<Tag>().unwrap(), Tag::Unclassified);
}

#[test]
fn unknown_tag_is_an_error() {
    let err = "nn".parse::<Tag>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTag(ref t) if t == "nn"));
}

#[test]
fn every_tag_round_trips_through_its_string() {
    for tag in Tag::ALL {
        assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        assert_eq!(tag.to_string(), tag.as_str());
    }
}

// =============================================================================
// Tag Classes
// =============================================================================

#[test]
fn noun_classes() {
    assert!(Tag::NN.is_noun());
    assert!(Tag::NNPS.is_noun());
    assert!(!Tag::PRP.is_noun());
    assert!(Tag::NNP.is_proper_noun());
    assert!(!Tag::NN.is_proper_noun());
    assert!(Tag::MD.is_modal());
    assert!(!Tag::VB.is_modal());
}

// =============================================================================
// TagSet
// =============================================================================

#[test]
fn tagset_basics() {
    let set = TagSet::of(&[Tag::NN, Tag::VB, Tag::NN]);
    assert_eq!(set.len(), 2);
    assert!(set.contains(Tag::NN));
    assert!(!set.contains(Tag::VBZ));
    assert!(TagSet::EMPTY.is_empty());
    assert_eq!(TagSet::NOUNS.len(), 4);
}

#[test]
fn tagset_debug_lists_tags_in_order() {
    let set = TagSet::of(&[Tag::VB, Tag::NN]);
    assert_eq!(format!("{set:?}"), "{NN, VB}");
}

proptest! {
    #[test]
    fn tagset_contains_exactly_its_members(picks in proptest::collection::vec(0..Tag::ALL.len(), 0..10)) {
        let tags: Vec<Tag> = picks.iter().map(|&i| Tag::ALL[i]).collect();
        let set: TagSet = tags.iter().copied().collect();
        for tag in Tag::ALL {
            prop_assert_eq!(set.contains(tag), tags.contains(&tag));
        }
        prop_assert_eq!(set.iter().count(), set.len());
    }
}
