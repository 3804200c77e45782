use super::reader::Reader;
use super::stack::Stack;
use super::{Action, Reject, Step, Trace};
use crate::symbols::Symbol;
use crate::tables::ll;

/// A top-down simulator driving a derivation stack against an LL(1)
/// parsing table to produce a leftmost derivation trace
pub struct Simulator<'s> {
    table: &'s ll::Table,
}

impl<'s> Simulator<'s> {
    /// Creates a simulator for a loaded LL(1) table
    pub fn new(table: &ll::Table) -> Simulator<'_> {
        Simulator { table }
    }

    /// Runs the table against an input string, producing the full trace of
    /// the attempted derivation. Always terminates: every branch either
    /// shrinks the remaining work or ends the run.
    pub fn simulate(&self, input: &[Symbol]) -> Trace {
        let mut reader = Reader::new(input);
        let mut stack = Stack::new();
        let mut trace = Trace::new();

        for no in 1.. {
            let stack_view = stack.view();
            let input_view = reader.view();

            let action = if no == 1 {
                self.start(&mut stack)
            } else {
                self.step(&mut stack, &mut reader)
            };
            let done = action.is_final();

            trace.push(Step {
                no,
                stack: stack_view,
                input: input_view,
                read: None,
                action,
            });

            if done {
                break;
            }
        }

        trace
    }

    /// Step 1 unconditionally expands the grammar's start rule
    fn start(&self, stack: &mut Stack) -> Action {
        stack.push_production(self.table.start_rule());

        Action::Apply {
            head: self.table.start_symbol().clone(),
            body: self.table.start_rule().clone(),
        }
    }

    /// Pops the top stack symbol and classifies it against the lookahead
    fn step(&self, stack: &mut Stack, reader: &mut Reader) -> Action {
        // The stack holds at least the end marker until a terminating step
        let top = stack.pop().unwrap();
        let lookahead = reader.lookahead().clone();

        if top.is_end() && lookahead.is_end() {
            return Action::Accept;
        }

        // The only step that advances the input
        if top == lookahead {
            reader.next();
            return Action::Match(lookahead);
        }

        let Some(row) = self.table.row(&top) else {
            return Action::Reject(Reject::NoRow(top));
        };

        match row.get(&lookahead) {
            Some(production) => {
                if !production.is_e() {
                    stack.push_production(production);
                }

                Action::Apply {
                    head: top,
                    body: production.clone(),
                }
            }
            None => Action::Reject(Reject::NoLookahead {
                non_terminal: top,
                lookahead,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::symbols::tokenize;

    #[test]
    fn test_simulate_single_identifier() {
        let table = ll::Table::new("LL(1);id;$\nS;S->id;\n").unwrap();
        let trace = Simulator::new(&table).simulate(&tokenize("id"));

        let steps = trace.steps();
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].stack, "$");
        assert_eq!(steps[0].input, "#$");
        assert_eq!(steps[0].action.to_string(), "S->#");

        assert_eq!(steps[1].stack, "#$");
        assert_eq!(steps[1].input, "#$");
        assert_eq!(steps[1].action, Action::Match(Symbol::new("#")));

        assert_eq!(steps[2].stack, "$");
        assert_eq!(steps[2].input, "$");
        assert_eq!(steps[2].action, Action::Accept);
        assert!(trace.accepted());
    }

    #[test]
    fn test_simulate_epsilon_expansion() {
        let table = ll::Table::new("LL(1);a;$\nS;S->aX;\nX;;X->ϵ\n").unwrap();
        let trace = Simulator::new(&table).simulate(&tokenize("a"));

        let steps = trace.steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2].stack, "X$");
        assert_eq!(steps[2].action.to_string(), "X->ϵ");

        // The ϵ-expansion pushes nothing
        assert_eq!(steps[3].stack, "$");
        assert!(trace.accepted());
    }

    #[test]
    fn test_simulate_empty_input() {
        // The start expansion is unconditional, so the empty string still
        // drives one expansion before rejecting
        let table = ll::Table::new("LL(1);a;$\nS;S->a;\n").unwrap();
        let trace = Simulator::new(&table).simulate(&[]);

        let steps = trace.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].action.to_string(), "S->a");
        assert_eq!(steps[1].stack, "a$");
        assert_eq!(trace.rejection(), Some(&Reject::NoRow(Symbol::new("a"))));
    }

    #[test]
    fn test_simulate_no_lookahead_entry() {
        let table = ll::Table::new("LL(1);a;b;$\nS;S->a;;\n").unwrap();
        let trace = Simulator::new(&table).simulate(&tokenize("b"));

        let steps = trace.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[1].action,
            Action::Reject(Reject::NoLookahead {
                non_terminal: Symbol::new("S"),
                lookahead: Symbol::new("b"),
            })
        );
        assert!(steps[1]
            .action
            .to_string()
            .contains("doesn't have an action/step"));
    }

    #[test]
    fn test_simulate_missing_row() {
        // B is reachable from the start rule but has no table row
        let table = ll::Table::new("LL(1);a;$\nS;S->B;\n").unwrap();
        let trace = Simulator::new(&table).simulate(&tokenize("a"));

        assert_eq!(trace.rejection(), Some(&Reject::NoRow(Symbol::new("B"))));
    }

    #[test]
    fn test_simulate_idempotent() {
        let table = ll::Table::new("LL(1);id;$\nS;S->id;\n").unwrap();
        let simulator = Simulator::new(&table);

        let input = tokenize("id");
        assert_eq!(simulator.simulate(&input), simulator.simulate(&input));
    }
}
