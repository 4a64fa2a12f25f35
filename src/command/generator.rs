use crate::nlp::token::{PosTag, Token};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No ROOT token in parse: cannot determine the action")]
    NoRoot,
}

/// Diagnostic about how the preposition split point was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitNote {
    NoPreposition,
    MultiplePrepositions(usize),
}

impl fmt::Display for SplitNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitNote::NoPreposition => write!(f, "No preposition found"),
            SplitNote::MultiplePrepositions(count) => {
                write!(f, "Multiple prepositions found ({}), using the first", count)
            }
        }
    }
}

/// Candidate git commands generated from one parsed sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    /// The sentence's main verb
    pub action: String,
    /// Candidate command strings, each "<action> <arg1> <arg2>"
    pub commands: Vec<String>,
    /// Diagnostics for the caller to surface
    pub notes: Vec<SplitNote>,
}

/// Generate candidate git commands from a token table
///
/// The preposition (PRT token) splits the sentence: nouns governed by a
/// token before it become first arguments, nouns governed by a token
/// after it become second arguments, and each args2×args1 pair yields
/// one candidate. With no preposition the split point falls back to
/// level 0, which leaves args1 empty and the candidate list empty.
pub fn generate(tokens: &[Token]) -> Result<CandidateSet, GenerateError> {
    let mut notes = Vec::new();

    let prep_levels: Vec<u32> = tokens
        .iter()
        .filter(|t| t.pos == PosTag::Prt)
        .map(|t| t.level)
        .collect();

    let split = match prep_levels.as_slice() {
        [] => {
            notes.push(SplitNote::NoPreposition);
            0
        }
        [only] => *only,
        [first, ..] => {
            notes.push(SplitNote::MultiplePrepositions(prep_levels.len()));
            *first
        }
    };

    let action = tokens
        .iter()
        .find(|t| t.is_root())
        .ok_or(GenerateError::NoRoot)?
        .word
        .clone();

    let mut args1 = Vec::new();
    let mut args2 = Vec::new();
    for noun in tokens.iter().filter(|t| t.pos == PosTag::Noun) {
        if noun.parent < split {
            args1.push(noun.word.as_str());
        } else if noun.parent > split {
            args2.push(noun.word.as_str());
        }
        // parent == split joins neither side
    }

    let mut commands = Vec::with_capacity(args1.len() * args2.len());
    for a2 in &args2 {
        for a1 in &args1 {
            commands.push(format!("{} {} {}", action, a1, a2));
        }
    }

    Ok(CandidateSet {
        action,
        commands,
        notes,
    })
}
