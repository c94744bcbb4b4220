//! Pronoun rules.
//!
//! One engine walks the words after a canonical subject and applies an
//! ordered battery of independent checks. Every check that fails adds one
//! message; nothing short-circuits and nothing is deduplicated.
//!
//! Offsets below are relative to the subject: `+1` is the word right after
//! it ("next"), `+2` the one after that, and so on. A check whose words
//! run past the end of the sentence is skipped.

use gramcheck_foundation::{Result, Tag, Tagger};
use gramcheck_text::{Cursor, Sentence, Word};

use crate::profile::{self, SubjectProfile};
use crate::rule::{Findings, Rule, RuleResult, tag_word};

/// Words accepted after a modal regardless of their tag.
const MODAL_PASSTHROUGH: [&str; 2] = ["have", "not"];

/// Subject-verb agreement and tense rules for one canonical subject.
#[derive(Clone, Copy, Debug)]
pub struct PronounRules {
    profile: &'static SubjectProfile,
}

impl PronounRules {
    /// Creates rules for the given profile.
    #[must_use]
    pub const fn new(profile: &'static SubjectProfile) -> Self {
        Self { profile }
    }

    /// Rules for `i`.
    #[must_use]
    pub const fn first_person() -> Self {
        Self::new(&profile::I)
    }

    /// Rules for `he` (and everything normalized to it).
    #[must_use]
    pub const fn third_person() -> Self {
        Self::new(&profile::HE)
    }

    /// Rules for `you` (and everything normalized to it).
    #[must_use]
    pub const fn second_person() -> Self {
        Self::new(&profile::YOU)
    }

    /// The profile driving these rules.
    #[must_use]
    pub fn profile(&self) -> &'static SubjectProfile {
        self.profile
    }

    fn evaluate(&self, sentence: &Sentence, tagger: &dyn Tagger, out: &mut Findings) -> Result<()> {
        if sentence.is_question() {
            return Ok(());
        }
        let p = self.profile;
        if sentence.first().map(Word::lower) != Some(p.subject) {
            return Ok(());
        }
        let Some(cursor) = sentence.cursor_at(p.subject) else {
            return Ok(());
        };
        let Some(next) = cursor.at(1) else {
            return Ok(());
        };
        let next_tag = tag_word(tagger, next)?;
        let ctx = Context {
            profile: p,
            cursor,
            next,
            next_tag,
            tagger,
        };

        if next.is("been") {
            out.push(p.messages.been);
        }
        if next.ends_with_ing() {
            out.push(fill(p.messages.participle, next));
        }
        if !p.next_tags.contains(next_tag) && !p.allows_auxiliary(next.bare()) {
            out.push(fill(p.messages.verb_class, next));
        }

        ctx.perfect_complement(out)?;
        ctx.perfect_progressive(out)?;
        ctx.modal_required(out);
        ctx.been_without_auxiliary(out);
        ctx.copula_complement(out)?;
        ctx.modal_complement(out)?;
        ctx.modal_perfect(out)?;
        Ok(())
    }
}

impl Rule for PronounRules {
    fn name(&self) -> &'static str {
        match self.profile.subject {
            "i" => "pronoun-i",
            "he" => "pronoun-he",
            "you" => "pronoun-you",
            _ => "pronoun",
        }
    }

    fn apply(&self, sentence: &Sentence, tagger: &dyn Tagger) -> RuleResult {
        let mut findings = Findings::new();
        let outcome = self.evaluate(sentence, tagger, &mut findings);
        findings.conclude(outcome)
    }
}

/// State shared by the checks of one evaluation.
struct Context<'a> {
    profile: &'static SubjectProfile,
    cursor: Cursor<'a>,
    next: &'a Word,
    next_tag: Tag,
    tagger: &'a dyn Tagger,
}

impl Context<'_> {
    fn tag(&self, word: &Word) -> Result<Tag> {
        tag_word(self.tagger, word)
    }

    /// "I have played", "he had gone": a perfect auxiliary wants a past form.
    fn perfect_complement(&self, out: &mut Findings) -> Result<()> {
        let p = self.profile;
        if !self.next.is_any(p.perfect_auxiliaries) {
            return Ok(());
        }
        let Some(word) = self.cursor.at(2) else {
            return Ok(());
        };
        if !word.is("not") && !p.perfect_complement_tags.contains(self.tag(word)?) {
            out.push(fill(p.messages.perfect_complement, word));
        }
        Ok(())
    }

    /// "I have been playing": perfect auxiliary + "been" wants a participle.
    fn perfect_progressive(&self, out: &mut Findings) -> Result<()> {
        let p = self.profile;
        if !self.next.is_any(p.perfect_been_auxiliaries) || !self.cursor.is(2, "been") {
            return Ok(());
        }
        let Some(word) = self.cursor.at(3) else {
            return Ok(());
        };
        if !word.ends_with_ing() && !p.perfect_progressive_tags.contains(self.tag(word)?) {
            out.push(fill(p.messages.perfect_progressive, word));
        }
        Ok(())
    }

    /// "I ___ have been": the gap must be a modal.
    fn modal_required(&self, out: &mut Findings) {
        if self.cursor.is(2, "have") && self.cursor.is(3, "been") && !self.next_tag.is_modal() {
            out.push(self.profile.messages.modal_required);
        }
    }

    /// "I ___ been": the gap must be a perfect auxiliary.
    fn been_without_auxiliary(&self, out: &mut Findings) {
        let p = self.profile;
        if self.cursor.is(2, "been") && !self.next.is_any(p.perfect_auxiliaries) {
            out.push(p.messages.been_without_auxiliary);
        }
    }

    /// "I am a student", "he is playing": determiner and continuous checks.
    fn copula_complement(&self, out: &mut Findings) -> Result<()> {
        let p = self.profile;
        if !self.next.is_any(p.copulas) {
            return Ok(());
        }
        let Some(word) = self.cursor.at(2) else {
            return Ok(());
        };
        let tag = self.tag(word)?;
        if p.determiner_tags.contains(tag) {
            out.push(p.messages.determiner);
        }
        if !p.continuous_tags.contains(tag) && !word.ends_with_ing() {
            out.push(fill(p.messages.continuous, word));
        }
        Ok(())
    }

    /// "I would go": a modal wants a verb.
    fn modal_complement(&self, out: &mut Findings) -> Result<()> {
        let p = self.profile;
        if !self.next_tag.is_modal() {
            return Ok(());
        }
        let Some(word) = self.cursor.at(2) else {
            return Ok(());
        };
        if !word.is_any(&MODAL_PASSTHROUGH) && !p.modal_complement_tags.contains(self.tag(word)?) {
            out.push(fill(p.messages.modal_complement, word));
        }
        Ok(())
    }

    /// "I would have been sleeping": the deepest chain wants a participle.
    fn modal_perfect(&self, out: &mut Findings) -> Result<()> {
        let p = self.profile;
        if !self.next_tag.is_modal() || !self.cursor.is(2, "have") || !self.cursor.is(3, "been") {
            return Ok(());
        }
        let Some(word) = self.cursor.at(4) else {
            return Ok(());
        };
        if !word.ends_with_ing() && !p.modal_perfect_tags.contains(self.tag(word)?) {
            out.push(fill(p.messages.modal_perfect, word));
        }
        Ok(())
    }
}

fn fill(template: &str, word: &Word) -> String {
    template.replace("{word}", word.bare())
}
