use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::symbols::{self, Production, Symbol};

/// An LL(1) parsing table: non-terminal rows, terminal lookahead columns.
/// Loaded once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Table {
    start_symbol: Symbol,
    start_rule: Production,
    rows: HashMap<Symbol, HashMap<Symbol, Production>>,
}

impl Table {
    /// Parses an LL(1) table from `;`-delimited text. The first row is the
    /// header naming the terminal columns; each later row holds the
    /// productions for one non-terminal. The first production cell in the
    /// file provides the grammar's start symbol and start rule.
    pub fn new(text: &str) -> Result<Table> {
        let lines: Vec<String> = super::clean_lines(text)
            .into_iter()
            .map(|l| symbols::collapse_id(&l))
            .filter(|l| !l.is_empty())
            .collect();

        let Some(header) = lines.first() else {
            return Err(Error::EmptyTable);
        };
        let terminals: Vec<Symbol> = header.split(';').skip(1).map(Symbol::new).collect();

        let mut start: Option<(Symbol, Production)> = None;
        let mut rows = HashMap::new();
        for line in &lines[1..] {
            let mut cells = line.split(';');
            let non_terminal = Symbol::new(cells.next().unwrap_or(""));

            let mut productions = HashMap::new();
            for (i, cell) in cells.enumerate() {
                if cell.is_empty() {
                    continue;
                }

                let Some(terminal) = terminals.get(i) else {
                    return Err(Error::ExtraCell(line.clone()));
                };

                // Cells may carry a redundant "NT->" prefix; only the body
                // matters
                let body = cell
                    .strip_prefix(&format!("{}->", non_terminal))
                    .unwrap_or(cell);
                let production = Production::parse(body);

                if start.is_none() {
                    start = Some((non_terminal.clone(), production.clone()));
                }
                productions.insert(terminal.clone(), production);
            }

            rows.insert(non_terminal, productions);
        }

        let Some((start_symbol, start_rule)) = start else {
            return Err(Error::NoStartRule);
        };

        Ok(Table {
            start_symbol,
            start_rule,
            rows,
        })
    }

    /// Parses an LL(1) table from a file with the given path
    pub fn new_from_file(path: &str) -> std::result::Result<Table, Box<dyn std::error::Error>> {
        Ok(Table::new(&std::fs::read_to_string(path)?)?)
    }

    pub fn start_symbol(&self) -> &Symbol {
        &self.start_symbol
    }

    pub fn start_rule(&self) -> &Production {
        &self.start_rule
    }

    /// Returns the lookahead row for a non-terminal, if the table has one
    pub fn row(&self, non_terminal: &Symbol) -> Option<&HashMap<Symbol, Production>> {
        self.rows.get(non_terminal)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EXPR: &str = "LL(1);id;+;*;(;);$
E;E->TX;;;E->TX;;
X;;X->+TX;;;X->ϵ;X->ϵ
T;T->FY;;;T->FY;;
Y;;Y->ϵ;Y->*FY;;Y->ϵ;Y->ϵ
F;F->id;;;F->(E);;
";

    #[test]
    fn test_new() -> Result<()> {
        let table = Table::new(EXPR)?;

        assert_eq!(table.start_symbol(), &Symbol::new("E"));
        assert_eq!(table.start_rule(), &Production::parse("TX"));

        // The identifier column collapses to its reserved symbol
        let f = table.row(&Symbol::new("F")).unwrap();
        assert_eq!(f.get(&Symbol::new("#")), Some(&Production::parse("#")));
        assert_eq!(f.get(&Symbol::new("(")), Some(&Production::parse("(E)")));
        assert_eq!(f.get(&Symbol::new("+")), None);

        let x = table.row(&Symbol::new("X")).unwrap();
        assert!(x.get(&Symbol::new("$")).unwrap().is_e());

        assert!(table.row(&Symbol::new("Z")).is_none());

        Ok(())
    }

    #[test]
    fn test_new_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = Table::new_from_file(&crate::test::test_file_path("tables/expr_ll.txt"))?;

        assert_eq!(table.start_symbol(), &Symbol::new("E"));
        assert_eq!(table.start_rule(), &Production::parse("TX"));

        Ok(())
    }

    #[test]
    fn test_new_without_prefixes() -> Result<()> {
        // The "NT->" cell prefix is optional
        let table = Table::new("LL(1);a\nS;a\n")?;

        assert_eq!(table.start_symbol(), &Symbol::new("S"));
        assert_eq!(table.start_rule(), &Production::parse("a"));

        Ok(())
    }

    #[test]
    fn test_new_fail() {
        assert!(matches!(Table::new(""), Err(Error::EmptyTable)));
        assert!(matches!(Table::new("LL(1);a;b\n"), Err(Error::NoStartRule)));
        assert!(matches!(
            Table::new("LL(1);a;b\nS;;\n"),
            Err(Error::NoStartRule)
        ));
        assert!(matches!(
            Table::new("LL(1);a\nS;S->a;S->aa\n"),
            Err(Error::ExtraCell(_))
        ));
    }
}
