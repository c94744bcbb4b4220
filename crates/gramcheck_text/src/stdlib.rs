//! Standard lexicon.
//!
//! Closed-class English words (pronouns, auxiliaries, modals, determiners,
//! prepositions, conjunctions) in [`Lexicon`](crate::Lexicon) source
//! format. Open-class words are left to a user-supplied lexicon file.

/// Closed-class words and auxiliary verb forms.
pub const CLOSED_CLASS: &str = r"
# Pronouns
PRP   i me you he him she her it we us they them myself yourself himself herself itself
PRP$  my your his its our their
EX    there

# Modals
MD    can could may might must shall should will would

# Auxiliary and copular verb forms
VB    be do
VBP   am are have
VBZ   is has does
VBD   was were had did
VBN   been done
VBG   being having doing

# Determiners
DT    a an the this that these those every each some any no another
PDT   all both half

# Prepositions and subordinating conjunctions
IN    of in on at by for with about against between into through during before after
IN    above below from up down over under again further because while if than
TO    to

# Conjunctions
CC    and or but nor yet so

# Common adverbs
RB    not never always often already also just still very too quite rather soon
RBR   more less
RBS   most least

# Wh-words
WDT   which whichever
WP    who whom what whoever
WP$   whose
WRB   when where why how

# Interjections
UH    oh yes hello please well
";
