/// Coarse part-of-speech tag as emitted by the dependency parser
///
/// Only the tags the command heuristic cares about get their own
/// variant; everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Verb,
    Noun,
    Prt,
    Other,
}

impl PosTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "VERB" => PosTag::Verb,
            "NOUN" => PosTag::Noun,
            "PRT" => PosTag::Prt,
            _ => PosTag::Other,
        }
    }
}

/// One word of the parsed sentence with its syntactic role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 1-based position in the linearized parse tree
    pub level: u32,
    /// Surface text of the word
    pub word: String,
    pub pos: PosTag,
    /// Fine-grained tag (e.g. VB, NN, TO); kept for display only
    pub fine: String,
    /// Level of the syntactic governor, 0 for the sentence root
    pub parent: u32,
    /// Dependency relation (ROOT, dobj, nn, aux, xcomp, ...)
    pub group: String,
}

impl Token {
    /// Whether this token is the sentence's main verb
    pub fn is_root(&self) -> bool {
        self.group == "ROOT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_parse() {
        assert_eq!(PosTag::parse("VERB"), PosTag::Verb);
        assert_eq!(PosTag::parse("NOUN"), PosTag::Noun);
        assert_eq!(PosTag::parse("PRT"), PosTag::Prt);
        assert_eq!(PosTag::parse("ADJ"), PosTag::Other);
        assert_eq!(PosTag::parse(""), PosTag::Other);
    }

    #[test]
    fn test_is_root() {
        let token = Token {
            level: 1,
            word: "push".to_string(),
            pos: PosTag::Verb,
            fine: "VB".to_string(),
            parent: 0,
            group: "ROOT".to_string(),
        };
        assert!(token.is_root());

        let token = Token {
            group: "dobj".to_string(),
            ..token
        };
        assert!(!token.is_root());
    }
}
