use crate::symbols::Symbol;

/// A cursor over the remaining input symbols, with the end marker appended
pub struct Reader {
    symbols: Vec<Symbol>,
    cursor: usize,
}

impl Reader {
    pub fn new(input: &[Symbol]) -> Reader {
        let mut symbols = input.to_vec();
        symbols.push(Symbol::end());

        Reader { symbols, cursor: 0 }
    }

    /// The head of the remaining input. The end marker is never consumed,
    /// so a head symbol always exists.
    pub fn lookahead(&self) -> &Symbol {
        &self.symbols[self.cursor]
    }

    /// Consumes the head of the remaining input
    pub fn next(&mut self) {
        if self.cursor + 1 < self.symbols.len() {
            self.cursor += 1;
        }
    }

    /// The remaining input, serialized for a trace column
    pub fn view(&self) -> String {
        self.symbols[self.cursor..]
            .iter()
            .map(Symbol::as_str)
            .collect()
    }
}
