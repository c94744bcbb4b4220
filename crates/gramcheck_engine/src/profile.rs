//! Per-subject rule configuration.
//!
//! The three canonical subjects share one rule engine
//! ([`PronounRules`](crate::PronounRules)); everything that differs
//! between them lives in a [`SubjectProfile`].

use gramcheck_foundation::{Tag, TagSet};

/// Message templates for one subject. `{word}` is replaced with the
/// offending word.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    /// "been" directly after the subject.
    pub been: &'static str,
    /// Present participle directly after the subject.
    pub participle: &'static str,
    /// Next word is neither an allowed verb form nor a whitelisted auxiliary.
    pub verb_class: &'static str,
    /// Perfect auxiliary not followed by a past form.
    pub perfect_complement: &'static str,
    /// Perfect auxiliary + "been" not followed by a participle.
    pub perfect_progressive: &'static str,
    /// "have been" without a modal before it.
    pub modal_required: &'static str,
    /// "been" without a perfect auxiliary before it.
    pub been_without_auxiliary: &'static str,
    /// Copula followed by a bare noun or superlative.
    pub determiner: &'static str,
    /// Copula followed by something that is not a participle.
    pub continuous: &'static str,
    /// Modal followed by something that is not a verb.
    pub modal_complement: &'static str,
    /// Modal + "have been" not followed by a participle.
    pub modal_perfect: &'static str,
}

/// Everything the pronoun rules need to know about one canonical subject.
#[derive(Clone, Copy, Debug)]
pub struct SubjectProfile {
    /// Canonical lower-case subject (`i`, `he`, `you`).
    pub subject: &'static str,
    /// Auxiliary and modal verbs that may directly follow the subject.
    pub auxiliaries: &'static [&'static str],
    /// Tags allowed for the word directly after the subject.
    pub next_tags: TagSet,
    /// Auxiliaries forming the perfect ("have", "has", "had").
    pub perfect_auxiliaries: &'static [&'static str],
    /// Tags allowed after a perfect auxiliary.
    pub perfect_complement_tags: TagSet,
    /// Auxiliaries that, followed by "been", form the perfect progressive.
    pub perfect_been_auxiliaries: &'static [&'static str],
    /// Tags allowed after perfect auxiliary + "been".
    pub perfect_progressive_tags: TagSet,
    /// Copulas ("am", "is", "are", ...) that agree with the subject.
    pub copulas: &'static [&'static str],
    /// Tags after a copula that need a determiner.
    pub determiner_tags: TagSet,
    /// Tags allowed after a copula.
    pub continuous_tags: TagSet,
    /// Tags allowed after a modal.
    pub modal_complement_tags: TagSet,
    /// Tags allowed after modal + "have been".
    pub modal_perfect_tags: TagSet,
    /// Message templates.
    pub messages: Messages,
}

impl SubjectProfile {
    /// Returns true if `word` may directly follow the subject regardless of its tag.
    #[must_use]
    pub fn allows_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(&word)
    }

    /// The three built-in profiles, in orchestration order.
    #[must_use]
    pub fn all() -> [&'static SubjectProfile; 3] {
        [&YOU, &HE, &I]
    }
}

/// Tags allowed after a perfect auxiliary, shared by every subject.
const PERFECT_COMPLEMENT: TagSet = TagSet::of(&[Tag::VBD, Tag::VBN, Tag::DT, Tag::RB]);

/// First person singular.
pub static I: SubjectProfile = SubjectProfile {
    subject: "i",
    auxiliaries: &[
        "am", "could", "should", "have", "did", "had", "will", "was", "can", "shall", "may",
        "might", "must", "would",
    ],
    next_tags: TagSet::of(&[
        Tag::NN,
        Tag::VBN,
        Tag::VB,
        Tag::VBD,
        Tag::NNS,
        Tag::VBP,
        Tag::JJ,
        Tag::IN,
        Tag::UH,
    ]),
    perfect_auxiliaries: &["have", "had"],
    perfect_complement_tags: PERFECT_COMPLEMENT,
    perfect_been_auxiliaries: &["have"],
    perfect_progressive_tags: TagSet::of(&[
        Tag::JJ,
        Tag::VBG,
        Tag::RB,
        Tag::IN,
        Tag::UH,
        Tag::VBN,
        Tag::VBD,
    ]),
    copulas: &["am", "was"],
    determiner_tags: TagSet::of(&[Tag::NN, Tag::JJS]),
    continuous_tags: TagSet::of(&[
        Tag::NN,
        Tag::RB,
        Tag::JJ,
        Tag::VBN,
        Tag::IN,
        Tag::DT,
        Tag::NNP,
        Tag::VBP,
        Tag::PRPS,
    ]),
    modal_complement_tags: TagSet::of(&[Tag::NN, Tag::VBG, Tag::RB, Tag::VB]),
    modal_perfect_tags: TagSet::of(&[Tag::VBG, Tag::JJ, Tag::VBN, Tag::VBD]),
    messages: Messages {
        been: "'been' cannot come after 'I'.",
        participle: "Present participle form of the verb shouldn't be used ({word}).",
        verb_class: "Wrong usage of 'I'. 'I' should be used with a verb (work, play, etc.) \
                     or modals (would, could, etc).",
        perfect_complement: "With 'I have/had', second form of the verb should be used \
                             ({word}), like played, gone.",
        perfect_progressive: "With 'I have been', the verb form should be past tense or \
                              present participle ({word}), like playing, gone.",
        modal_required: "You should use modals (would, could, etc.) after the pronoun here.",
        been_without_auxiliary: "You should use have or had after the pronoun here.",
        determiner: "You should use a determiner (a, an, the, this, etc) before the noun \
                     or superlative adjective.",
        continuous: "Present or past participle form of the verb should be used ({word}), \
                     like playing, gone, etc.",
        modal_complement: "After 'I would', verb or adverb should be used like do, play, go, \
                           etc. ({word})",
        modal_perfect: "With sentence formations like 'I would have been' we use present or \
                        past participle form of the verb ({word}) like, playing, gone, etc.",
    },
};

/// Third person singular.
pub static HE: SubjectProfile = SubjectProfile {
    subject: "he",
    auxiliaries: &[
        "is", "could", "should", "did", "has", "will", "had", "was", "can", "shall", "may",
        "might", "must", "would",
    ],
    next_tags: TagSet::of(&[Tag::NNS, Tag::VBZ, Tag::VBD, Tag::VBN, Tag::IN]),
    perfect_auxiliaries: &["has", "had"],
    perfect_complement_tags: PERFECT_COMPLEMENT,
    perfect_been_auxiliaries: &["has", "had"],
    perfect_progressive_tags: TagSet::of(&[
        Tag::JJ,
        Tag::VBG,
        Tag::RB,
        Tag::IN,
        Tag::UH,
        Tag::VBD,
        Tag::VBN,
    ]),
    copulas: &["is", "was"],
    determiner_tags: TagSet::of(&[Tag::NN, Tag::JJS, Tag::NNP]),
    continuous_tags: TagSet::of(&[
        Tag::JJ,
        Tag::VBG,
        Tag::UH,
        Tag::JJR,
        Tag::RB,
        Tag::PRP,
        Tag::PRPS,
        Tag::DT,
        Tag::IN,
        Tag::VBP,
        Tag::NN,
    ]),
    modal_complement_tags: TagSet::of(&[Tag::NN, Tag::VB, Tag::IN]),
    modal_perfect_tags: TagSet::of(&[Tag::JJ, Tag::VBG, Tag::RB, Tag::VBN, Tag::VBD]),
    messages: Messages {
        been: "'been' should not be used here.",
        participle: "Present participle form of the verb shouldn't be used with the pronoun \
                     ({word}), like playing, singing, etc.",
        verb_class: "Pronoun should be used with a third form of verb like plays, works, etc., \
                     or modals like would, could, should, etc. ({word})",
        perfect_complement: "Second form of the verb should be used with has/had ({word}) \
                             like played, worked, etc.",
        perfect_progressive: "Wrong form of the verb is used here ({word}).",
        modal_required: "You should use modals after the pronoun like would, could, etc.",
        been_without_auxiliary: "One should use has or had.",
        determiner: "You should use a determiner before the noun or superlative adjective \
                     like a, an, the, this, etc.",
        continuous: "The present or past participle form of the verb should be used ({word}) \
                     like playing, done, etc.",
        modal_complement: "After a pronoun followed by 'would', a verb or an adverb should be \
                           used ({word}) like sleep, see, etc.",
        modal_perfect: "There is some mistake after the noun/pronoun and 'would have been' \
                        ({word}).",
    },
};

/// Second person, and plural subjects normalized to it.
pub static YOU: SubjectProfile = SubjectProfile {
    subject: "you",
    auxiliaries: &[
        "are", "had", "could", "should", "did", "have", "will", "were", "can", "shall", "may",
        "might", "must", "would",
    ],
    next_tags: TagSet::of(&[Tag::NN, Tag::VB, Tag::VBD, Tag::VBP, Tag::VBN, Tag::IN]),
    perfect_auxiliaries: &["have", "had"],
    perfect_complement_tags: PERFECT_COMPLEMENT,
    perfect_been_auxiliaries: &["have", "had"],
    perfect_progressive_tags: TagSet::of(&[Tag::JJ, Tag::VBG, Tag::RB, Tag::IN, Tag::UH]),
    copulas: &["are", "were"],
    determiner_tags: TagSet::of(&[Tag::NN, Tag::JJS]),
    continuous_tags: TagSet::of(&[
        Tag::JJ,
        Tag::VBG,
        Tag::UH,
        Tag::JJR,
        Tag::IN,
        Tag::VBN,
        Tag::RB,
        Tag::NNP,
        Tag::DT,
        Tag::JJS,
    ]),
    modal_complement_tags: TagSet::of(&[Tag::NN, Tag::VB]),
    modal_perfect_tags: TagSet::of(&[Tag::JJ, Tag::VBG]),
    messages: Messages {
        been: "'been' cannot come after the pronoun/noun.",
        participle: "Present participle form of the verb should NOT be used after the \
                     pronoun/noun ({word}) like play, work.",
        verb_class: "Pronouns/nouns should be used with a verb or modals ({word}) like you \
                     love, you sing.",
        perfect_complement: "With 'you have/had', second form of the verb should be used \
                             ({word}), like played, gone.",
        perfect_progressive: "With sentence formations like 'you have been' we use present or \
                              past participle form of the verb ({word}) like gone, singing.",
        modal_required: "You should use modals like would, could, etc here.",
        been_without_auxiliary: "You should use have or had after the pronoun.",
        determiner: "You should use a determiner (a, an, the, this, etc) before the noun or \
                     superlative adjective.",
        continuous: "The present or past participle form of the verb should be used ({word}) \
                     like reading, gone, etc.",
        modal_complement: "After 'you would', a noun, verb or adverb is used ({word}).",
        modal_perfect: "With sentence formations like 'you would have been' we use present \
                        or past participle form of the verb ({word}) like told, singing, \
                        gone, etc.",
    },
};
