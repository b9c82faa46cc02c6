//! Command parser for adventure inputs.
//!
//! Input is lower-cased and split on whitespace. The first token picks the
//! verb by exact match, the second token (if any) is the parameter, anything
//! after that is ignored.
//!
//! Examples:
//!   "go north"              -> Verb::Go, param="north"
//!   "Grab KEY now"          -> Verb::Collect, param="key"
//!   "examine"               -> Verb::Examine, param=None
//!   "dance"                 -> Verb::Unknown, raw_verb="dance"
//!   ""                      -> Verb::Blank

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Collect,
    Examine,
    Inventory,
    Help,
    Quit,
    /// Nothing was typed.
    Blank,
    /// Unrecognized; the raw verb is kept in `Intent::raw_verb`.
    Unknown,
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Go => "go",
            Verb::Collect => "get",
            Verb::Examine => "examine",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Quit => "quit",
            Verb::Blank => "blank",
            Verb::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    /// Normalized input line
    pub original: String,
    /// All tokens, verb included
    pub args: Vec<String>,
    /// The single parameter the verb acts on
    pub param: Option<String>,
    /// If we couldn't canonicalize the verb, keep it here.
    pub raw_verb: Option<String>,
}

impl Intent {
    pub fn param(&self) -> &str {
        self.param.as_deref().unwrap_or("")
    }
}

static VERBS: Lazy<HashMap<&'static str, Verb>> = Lazy::new(verb_map);

pub fn parse_command(input: &str) -> Intent {
    let original = normalize(input);
    let args: Vec<String> = original.split_whitespace().map(str::to_string).collect();

    let Some(first) = args.first() else {
        return Intent {
            verb: Verb::Blank,
            original,
            args,
            param: None,
            raw_verb: None,
        };
    };

    let (verb, raw_verb) = match VERBS.get(first.as_str()) {
        Some(v) => (*v, None),
        None => (Verb::Unknown, Some(first.clone())),
    };
    let param = args.get(1).cloned();

    Intent {
        verb,
        original,
        args,
        param,
        raw_verb,
    }
}

fn normalize(s: &str) -> String {
    // lowercase, trim, collapse spaces
    s.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn verb_map() -> HashMap<&'static str, Verb> {
    use Verb::*;
    let mut m = HashMap::new();
    for k in ["go", "move"] {
        m.insert(k, Go);
    }
    for k in ["get", "collect", "grab"] {
        m.insert(k, Collect);
    }
    for k in ["describe", "examine", "inspect"] {
        m.insert(k, Examine);
    }
    for k in ["inventory", "bag"] {
        m.insert(k, Inventory);
    }
    m.insert("help", Help);
    m.insert("quit", Quit);
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_synonym_groups() {
        let groups: [(&[&str], Verb); 4] = [
            (&["go", "move"], Verb::Go),
            (&["get", "collect", "grab"], Verb::Collect),
            (&["describe", "examine", "inspect"], Verb::Examine),
            (&["inventory", "bag"], Verb::Inventory),
        ];
        for (words, verb) in groups {
            for w in words {
                assert_eq!(parse_command(w).verb, verb, "{w}");
            }
        }
    }

    #[test]
    fn t_go_north() {
        let i = parse_command("go north");
        assert_eq!(i.verb, Verb::Go);
        assert_eq!(i.param.as_deref(), Some("north"));
        assert_eq!(i.args, vec!["go", "north"]);
    }

    #[test]
    fn t_case_and_spacing() {
        let i = parse_command("   GET    Key  ");
        assert_eq!(i.verb, Verb::Collect);
        assert_eq!(i.param(), "key");
        assert_eq!(i.original, "get key");
    }

    #[test]
    fn t_extra_tokens_ignored() {
        let i = parse_command("get key from the table");
        assert_eq!(i.verb, Verb::Collect);
        assert_eq!(i.param(), "key");
        assert_eq!(i.args.len(), 5);
    }

    #[test]
    fn t_blank_input() {
        for s in ["", "   ", "\t\n"] {
            let i = parse_command(s);
            assert_eq!(i.verb, Verb::Blank);
            assert!(i.param.is_none());
            assert!(i.raw_verb.is_none());
        }
    }

    #[test]
    fn t_unknown_verb_kept_raw() {
        let i = parse_command("dance wildly");
        assert_eq!(i.verb, Verb::Unknown);
        assert_eq!(i.raw_verb.as_deref(), Some("dance"));
        assert_eq!(i.param(), "wildly");
    }

    #[test]
    fn t_no_direction_shortcuts() {
        // movement always goes through a verb
        assert_eq!(parse_command("north").verb, Verb::Unknown);
        assert_eq!(parse_command("n").verb, Verb::Unknown);
    }

    #[test]
    fn t_missing_param() {
        let i = parse_command("examine");
        assert_eq!(i.verb, Verb::Examine);
        assert!(i.param.is_none());
        assert_eq!(i.param(), "");
    }

    #[test]
    fn t_help_and_quit() {
        assert_eq!(parse_command("help").verb, Verb::Help);
        assert_eq!(parse_command("QUIT").verb, Verb::Quit);
    }
}
