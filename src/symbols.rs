use std::fmt;

/// The reserved stand-in for the lexical token "identifier". Collapsing
/// "id" to a single symbol keeps table lookups keyed by literal terminal
/// text unambiguous.
pub const ID: &str = "#";

/// The end-of-input marker used by both parsing tables
pub const END: &str = "$";

/// The marker denoting an empty production body
pub const EPSILON: &str = "ϵ";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An atomic grammar token, terminal or non-terminal
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: &str) -> Symbol {
        Symbol(s.to_string())
    }

    /// The end-of-input marker as a symbol
    pub fn end() -> Symbol {
        Symbol(END.to_string())
    }

    pub fn is_end(&self) -> bool {
        self.0 == END
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collapses the lexical "id" token to its reserved symbol
pub fn collapse_id(text: &str) -> String {
    text.replace("id", ID)
}

/// Splits an input string into symbols, one per character, with the
/// identifier token collapsed first
pub fn tokenize(input: &str) -> Vec<Symbol> {
    collapse_id(input)
        .chars()
        .map(|c| Symbol(c.to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The right-hand side of a production rule. An empty body is the
/// ϵ-production. Never mutated after table load.
pub struct Production {
    body: Vec<Symbol>,
}

impl Production {
    /// Parses a production body from a table cell, one symbol per
    /// character. The ϵ marker produces an empty body.
    pub fn parse(text: &str) -> Production {
        if text.is_empty() || text == EPSILON {
            return Production { body: Vec::new() };
        }

        Production {
            body: text.chars().map(|c| Symbol(c.to_string())).collect(),
        }
    }

    /// Returns true for the ϵ-production
    pub fn is_e(&self) -> bool {
        self.body.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.body
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_e() {
            return write!(f, "{}", EPSILON);
        }

        for symbol in &self.body {
            write!(f, "{}", symbol)?;
        }

        Ok(())
    }
}
