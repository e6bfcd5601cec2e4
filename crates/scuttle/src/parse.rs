//! Line parser.
//!
//! A program is one command per line: a verb (one or two words), an optional
//! preposition (`with` for `use`, `to` for `give`) splitting a direct object
//! from an indirect one. Everything else about the language lives above this
//! module; the parser only turns text into a [`Command`].

use crate::error::ScuttleError;

const SINGLE_WORD_VERBS: &[&str] = &["open", "close", "push", "pull", "give", "use"];
const TWO_WORD_VERBS: &[&str] = &[
    "walk to", "pick up", "talk to", "look at", "turn on", "turn off",
];

/// A parsed command: a verb plus its direct and (optional) indirect object names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub direct: String,
    pub indirect: Option<String>,
}

/// Parses a single non-empty, non-comment line into a [`Command`].
///
/// # Errors
/// Returns [`ScuttleError::Parse`] if the line's first word(s) don't name a
/// known verb.
pub fn parse_line(line: &str) -> Result<Command, ScuttleError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Err(ScuttleError::Parse(Vec::<String>::new()));
    }

    let (verb, rest): (&str, &[&str]) = if SINGLE_WORD_VERBS.contains(&words[0]) {
        (words[0], &words[1..])
    } else if words.len() >= 2 {
        let candidate = format!("{} {}", words[0], words[1]);
        if let Some(&known) = TWO_WORD_VERBS.iter().find(|v| **v == candidate) {
            (known, &words[2..])
        } else {
            return Err(ScuttleError::Parse(owned(&words)));
        }
    } else {
        return Err(ScuttleError::Parse(owned(&words)));
    };

    let preposition = match verb {
        "give" => Some("to"),
        "use" => Some("with"),
        _ => None,
    };

    let (direct, indirect) = match preposition.and_then(|p| rest.iter().position(|w| *w == p)) {
        Some(pos) => (rest[..pos].join(" "), Some(rest[pos + 1..].join(" "))),
        None => (rest.join(" "), None),
    };

    Ok(Command {
        verb: verb.to_owned(),
        direct,
        indirect,
    })
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_word_verb_with_preposition() {
        let cmd = parse_line("use chromatic triplicator with pieces o' eight").unwrap();
        assert_eq!(cmd.verb, "use");
        assert_eq!(cmd.direct, "chromatic triplicator");
        assert_eq!(cmd.indirect.as_deref(), Some("pieces o' eight"));
    }

    #[test]
    fn parses_two_word_verb() {
        let cmd = parse_line("look at inventory").unwrap();
        assert_eq!(cmd.verb, "look at");
        assert_eq!(cmd.direct, "inventory");
        assert_eq!(cmd.indirect, None);
    }

    #[test]
    fn use_without_preposition_has_no_indirect_object() {
        let cmd = parse_line("use shovel").unwrap();
        assert_eq!(cmd.verb, "use");
        assert_eq!(cmd.direct, "shovel");
        assert_eq!(cmd.indirect, None);
    }

    #[test]
    fn names_preserve_apostrophes_and_digits() {
        let cmd = parse_line("open block1").unwrap();
        assert_eq!(cmd.direct, "block1");
    }

    #[test]
    fn unknown_verb_is_a_parse_error() {
        let err = parse_line("dance wildly").unwrap_err();
        assert!(matches!(err, ScuttleError::Parse(_)));
    }

    #[test]
    fn no_op_verbs_parse_successfully() {
        for line in [
            "push rock",
            "pull lever",
            "walk to door",
            "pick up key",
            "talk to shopkeeper",
            "give gold to merchant",
            "turn on lamp",
            "turn off lamp",
        ] {
            parse_line(line).unwrap();
        }
    }
}
