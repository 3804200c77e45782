use std::collections::HashMap;
use std::fmt;

use crate::errors::{Error, Result};
use crate::symbols::{self, Production, Symbol};

/// The prefix distinguishing state names in table cells from other actions
pub const STATE_PREFIX: &str = "State_";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// An LR(1) automaton state, named as written in the table
pub struct StateId(String);

impl StateId {
    pub fn new(name: &str) -> StateId {
        StateId(name.to_string())
    }

    /// The state name with the reserved prefix dropped, as shown in trace
    /// state-stack columns
    pub fn display_name(&self) -> &str {
        self.0.strip_prefix(STATE_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A classified LR(1) table entry. Absence of an entry is modeled by
/// absence from the row map.
pub enum Action {
    Shift(StateId),
    Reduce { head: Symbol, body: Production },
    Accept,
}

impl Action {
    /// Classifies a raw table cell. Classification happens once at load
    /// time, so the simulator never inspects action strings.
    fn classify(cell: &str) -> Result<Action> {
        if cell.eq_ignore_ascii_case("accept") {
            Ok(Action::Accept)
        } else if cell.starts_with(STATE_PREFIX) {
            Ok(Action::Shift(StateId::new(cell)))
        } else if let Some((head, body)) = cell.split_once("->") {
            Ok(Action::Reduce {
                head: Symbol::new(head),
                body: Production::parse(body),
            })
        } else {
            Err(Error::InvalidAction(cell.to_string()))
        }
    }
}

/// An LR(1) parsing table: state rows, grammar symbol columns (terminals
/// and goto non-terminals alike). Loaded once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Table {
    start_state: StateId,
    rows: HashMap<StateId, HashMap<Symbol, Action>>,
}

impl Table {
    /// Parses an LR(1) table from `;`-delimited text. The first row is a
    /// title and is skipped; the second names the condition symbol columns;
    /// each later row holds the actions for one state. The first state row
    /// is the start state.
    pub fn new(text: &str) -> Result<Table> {
        let lines: Vec<String> = super::clean_lines(text)
            .into_iter()
            .map(|l| symbols::collapse_id(&l))
            .filter(|l| !l.is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(Error::EmptyTable);
        }
        let conditions: Vec<Symbol> = lines[1].split(';').skip(1).map(Symbol::new).collect();

        let mut start_state: Option<StateId> = None;
        let mut rows = HashMap::new();
        for line in &lines[2..] {
            let mut cells = line.split(';');
            let state = StateId::new(cells.next().unwrap_or(""));
            if start_state.is_none() {
                start_state = Some(state.clone());
            }

            let mut actions = HashMap::new();
            for (i, cell) in cells.enumerate() {
                if cell.is_empty() {
                    continue;
                }

                let Some(condition) = conditions.get(i) else {
                    return Err(Error::ExtraCell(line.clone()));
                };

                actions.insert(condition.clone(), Action::classify(cell)?);
            }

            rows.insert(state, actions);
        }

        let Some(start_state) = start_state else {
            return Err(Error::EmptyTable);
        };

        Ok(Table { start_state, rows })
    }

    /// Parses an LR(1) table from a file with the given path
    pub fn new_from_file(path: &str) -> std::result::Result<Table, Box<dyn std::error::Error>> {
        Ok(Table::new(&std::fs::read_to_string(path)?)?)
    }

    pub fn start_state(&self) -> &StateId {
        &self.start_state
    }

    /// Returns the action row for a state, if the table has one
    pub fn row(&self, state: &StateId) -> Option<&HashMap<Symbol, Action>> {
        self.rows.get(state)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SMALL: &str = "LR(1) PARSING TABLE;;;
;a;b;S
State_0;State_1;;State_2
State_1;;S->a;
State_2;;Accept;
";

    #[test]
    fn test_new() -> Result<()> {
        let table = Table::new(SMALL)?;

        assert_eq!(table.start_state(), &StateId::new("State_0"));

        let row = table.row(&StateId::new("State_0")).unwrap();
        assert_eq!(
            row.get(&Symbol::new("a")),
            Some(&Action::Shift(StateId::new("State_1")))
        );
        assert_eq!(
            row.get(&Symbol::new("S")),
            Some(&Action::Shift(StateId::new("State_2")))
        );
        assert_eq!(row.get(&Symbol::new("b")), None);

        let row = table.row(&StateId::new("State_1")).unwrap();
        assert_eq!(
            row.get(&Symbol::new("b")),
            Some(&Action::Reduce {
                head: Symbol::new("S"),
                body: Production::parse("a"),
            })
        );

        let row = table.row(&StateId::new("State_2")).unwrap();
        assert_eq!(row.get(&Symbol::new("b")), Some(&Action::Accept));

        assert!(table.row(&StateId::new("State_9")).is_none());

        Ok(())
    }

    #[test]
    fn test_new_from_file() -> Result<()> {
        let table = Table::new(&crate::test::read_test_file("tables/expr_lr.txt"))?;

        assert_eq!(table.start_state(), &StateId::new("State_0"));

        let row = table.row(&StateId::new("State_1")).unwrap();
        assert_eq!(row.get(&Symbol::new("$")), Some(&Action::Accept));
        assert_eq!(
            row.get(&Symbol::new("+")),
            Some(&Action::Shift(StateId::new("State_6")))
        );

        let row = table.row(&StateId::new("State_9")).unwrap();
        assert_eq!(
            row.get(&Symbol::new("$")),
            Some(&Action::Reduce {
                head: Symbol::new("E"),
                body: Production::parse("E+T"),
            })
        );

        Ok(())
    }

    #[test]
    fn test_new_collapses_id() -> Result<()> {
        let table = Table::new(";;\n;id;$\nState_0;State_1;F->id\n")?;

        let row = table.row(&StateId::new("State_0")).unwrap();
        assert_eq!(
            row.get(&Symbol::new("#")),
            Some(&Action::Shift(StateId::new("State_1")))
        );
        assert_eq!(
            row.get(&Symbol::new("$")),
            Some(&Action::Reduce {
                head: Symbol::new("F"),
                body: Production::parse("#"),
            })
        );

        Ok(())
    }

    #[test]
    fn test_new_fail() {
        assert!(matches!(Table::new(""), Err(Error::EmptyTable)));
        assert!(matches!(Table::new(";;\n;a;b\n"), Err(Error::EmptyTable)));
        assert!(matches!(
            Table::new(";;\n;a\nState_0;garbage\n"),
            Err(Error::InvalidAction(_))
        ));
        assert!(matches!(
            Table::new(";;\n;a\nState_0;State_1;State_2\n"),
            Err(Error::ExtraCell(_))
        ));
    }

    #[test]
    fn test_classify_epsilon_reduction() -> Result<()> {
        // A reduction with an ϵ body removes nothing from the stack
        let Action::Reduce { head, body } = Action::classify("A->ϵ")? else {
            panic!("not a reduction");
        };
        assert_eq!(head, Symbol::new("A"));
        assert!(body.is_e());

        Ok(())
    }

    #[test]
    fn test_display_name() {
        assert_eq!(StateId::new("State_12").display_name(), "12");
        assert_eq!(StateId::new("q0").display_name(), "q0");
    }
}
