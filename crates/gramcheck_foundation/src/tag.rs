//! Part-of-speech tags.
//!
//! A closed, Penn-Treebank-style vocabulary. Taggers that speak a superset
//! (`HYPH`, `NFP`, LanguageTool's `PCT`, ...) are folded into the coarse
//! [`Tag::Punctuation`] and [`Tag::Unclassified`] buckets.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A part-of-speech tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[allow(clippy::upper_case_acronyms)]
pub enum Tag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Comparative adjective
    JJR,
    /// Superlative adjective
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Singular or mass noun
    NN,
    /// Plural noun
    NNS,
    /// Singular proper noun
    NNP,
    /// Plural proper noun
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PRPS,
    /// Adverb
    RB,
    /// Comparative adverb
    RBR,
    /// Superlative adverb
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun (`WP$`)
    WPS,
    /// Wh-adverb
    WRB,
    /// Any punctuation mark
    Punctuation,
    /// Tagger could not classify the token (`XX`, `ADD`, `AFX`)
    Unclassified,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 38] = [
        Tag::CC,
        Tag::CD,
        Tag::DT,
        Tag::EX,
        Tag::FW,
        Tag::IN,
        Tag::JJ,
        Tag::JJR,
        Tag::JJS,
        Tag::LS,
        Tag::MD,
        Tag::NN,
        Tag::NNS,
        Tag::NNP,
        Tag::NNPS,
        Tag::PDT,
        Tag::POS,
        Tag::PRP,
        Tag::PRPS,
        Tag::RB,
        Tag::RBR,
        Tag::RBS,
        Tag::RP,
        Tag::SYM,
        Tag::TO,
        Tag::UH,
        Tag::VB,
        Tag::VBD,
        Tag::VBG,
        Tag::VBN,
        Tag::VBP,
        Tag::VBZ,
        Tag::WDT,
        Tag::WP,
        Tag::WPS,
        Tag::WRB,
        Tag::Punctuation,
        Tag::Unclassified,
    ];

    /// Returns the canonical tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::CC => "CC",
            Tag::CD => "CD",
            Tag::DT => "DT",
            Tag::EX => "EX",
            Tag::FW => "FW",
            Tag::IN => "IN",
            Tag::JJ => "JJ",
            Tag::JJR => "JJR",
            Tag::JJS => "JJS",
            Tag::LS => "LS",
            Tag::MD => "MD",
            Tag::NN => "NN",
            Tag::NNS => "NNS",
            Tag::NNP => "NNP",
            Tag::NNPS => "NNPS",
            Tag::PDT => "PDT",
            Tag::POS => "POS",
            Tag::PRP => "PRP",
            Tag::PRPS => "PRP$",
            Tag::RB => "RB",
            Tag::RBR => "RBR",
            Tag::RBS => "RBS",
            Tag::RP => "RP",
            Tag::SYM => "SYM",
            Tag::TO => "TO",
            Tag::UH => "UH",
            Tag::VB => "VB",
            Tag::VBD => "VBD",
            Tag::VBG => "VBG",
            Tag::VBN => "VBN",
            Tag::VBP => "VBP",
            Tag::VBZ => "VBZ",
            Tag::WDT => "WDT",
            Tag::WP => "WP",
            Tag::WPS => "WP$",
            Tag::WRB => "WRB",
            Tag::Punctuation => ".",
            Tag::Unclassified => "XX",
        }
    }

    /// Returns true for the four noun tags.
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, Tag::NN | Tag::NNS | Tag::NNP | Tag::NNPS)
    }

    /// Returns true for proper nouns, singular or plural.
    #[must_use]
    pub const fn is_proper_noun(self) -> bool {
        matches!(self, Tag::NNP | Tag::NNPS)
    }

    /// Returns true for modal verbs.
    #[must_use]
    pub const fn is_modal(self) -> bool {
        matches!(self, Tag::MD)
    }

    const fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "CC" => Tag::CC,
            "CD" => Tag::CD,
            "DT" => Tag::DT,
            "EX" => Tag::EX,
            "FW" => Tag::FW,
            "IN" => Tag::IN,
            "JJ" => Tag::JJ,
            "JJR" => Tag::JJR,
            "JJS" => Tag::JJS,
            "LS" => Tag::LS,
            "MD" => Tag::MD,
            "NN" => Tag::NN,
            "NNS" => Tag::NNS,
            "NNP" => Tag::NNP,
            "NNPS" => Tag::NNPS,
            "PDT" => Tag::PDT,
            "POS" => Tag::POS,
            "PRP" => Tag::PRP,
            "PRP$" => Tag::PRPS,
            "RB" => Tag::RB,
            "RBR" => Tag::RBR,
            "RBS" => Tag::RBS,
            "RP" => Tag::RP,
            "SYM" => Tag::SYM,
            "TO" => Tag::TO,
            "UH" => Tag::UH,
            "VB" => Tag::VB,
            "VBD" => Tag::VBD,
            "VBG" => Tag::VBG,
            "VBN" => Tag::VBN,
            "VBP" => Tag::VBP,
            "VBZ" => Tag::VBZ,
            "WDT" => Tag::WDT,
            "WP" => Tag::WP,
            "WP$" => Tag::WPS,
            "WRB" => Tag::WRB,
            "." | "," | ":" | "''" | "``" | "\"" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" | "$"
            | "#" | "PCT" => Tag::Punctuation,
            "XX" | "ADD" | "AFX" | "_SP" | "SP" => Tag::Unclassified,
            other => return Err(Error::unknown_tag(other)),
        };
        Ok(tag)
    }
}

impl TryFrom<String> for Tag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of tags, stored as a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u64);

impl TagSet {
    /// The empty set.
    pub const EMPTY: TagSet = TagSet(0);

    /// The four noun tags.
    pub const NOUNS: TagSet = TagSet::of(&[Tag::NN, Tag::NNS, Tag::NNP, Tag::NNPS]);

    /// Builds a set from a slice of tags. Usable in constants.
    #[must_use]
    pub const fn of(tags: &[Tag]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < tags.len() {
            bits |= tags[i].bit();
            i += 1;
        }
        TagSet(bits)
    }

    /// Returns true if the tag is in the set.
    #[must_use]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Returns a new set with the tag added.
    #[must_use]
    pub const fn with(self, tag: Tag) -> Self {
        TagSet(self.0 | tag.bit())
    }

    /// Returns the number of tags in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the tags in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(TagSet::EMPTY, TagSet::with)
    }
}
