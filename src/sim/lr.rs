use super::{Action, Reject, Step, Trace};
use crate::symbols::{Production, Symbol};
use crate::tables::lr::{self, StateId};

#[derive(Debug, Clone, PartialEq)]
/// One slot in the unified LR run sequence. The settled prefix forms the
/// parse stack; the pending suffix is the remaining input.
enum Compound {
    /// Carries the state entered and the symbol that caused the transition
    /// into it; only the initial compound has no symbol
    Settled {
        state: StateId,
        symbol: Option<Symbol>,
    },
    /// A symbol awaiting classification
    Pending { symbol: Symbol },
}

impl Compound {
    fn symbol(&self) -> Option<&Symbol> {
        match self {
            Compound::Settled { symbol, .. } => symbol.as_ref(),
            Compound::Pending { symbol } => Some(symbol),
        }
    }
}

/// A bottom-up simulator driving shift/reduce steps against an LR(1)
/// parsing table
pub struct Simulator<'s> {
    table: &'s lr::Table,
}

impl<'s> Simulator<'s> {
    /// Creates a simulator for a loaded LR(1) table
    pub fn new(table: &lr::Table) -> Simulator<'_> {
        Simulator { table }
    }

    /// Runs the table against an input string, producing the full
    /// shift-reduce trace. No end marker is appended: acceptance is
    /// table-driven, so inputs carry their own end symbol when the table
    /// expects one. Terminates for any table free of reduction cycles that
    /// never shift or accept; that is a property of the supplied table,
    /// not enforced here.
    pub fn simulate(&self, input: &[Symbol]) -> Trace {
        let mut compounds: Vec<Compound> = Vec::with_capacity(input.len() + 1);
        compounds.push(Compound::Settled {
            state: self.table.start_state().clone(),
            symbol: None,
        });
        for symbol in input {
            compounds.push(Compound::Pending {
                symbol: symbol.clone(),
            });
        }

        let mut trace = Trace::new();
        for no in 1.. {
            let stack_view = state_view(&compounds);
            let input_view = symbol_view(&compounds);

            let (read, action) = self.step(&mut compounds);
            let done = action.is_final();

            trace.push(Step {
                no,
                stack: stack_view,
                input: input_view,
                read,
                action,
            });

            if done {
                break;
            }
        }

        trace
    }

    /// Finds the first pending compound and classifies its symbol against
    /// the table row of its settled predecessor's state
    fn step(&self, compounds: &mut Vec<Compound>) -> (Option<Symbol>, Action) {
        let pending = compounds.iter().enumerate().find_map(|(i, c)| match c {
            Compound::Pending { symbol } => Some((i, symbol.clone())),
            Compound::Settled { .. } => None,
        });
        let Some((at, read)) = pending else {
            return (None, Action::Reject(Reject::NoPendingSymbol));
        };

        let previous = at.checked_sub(1).map(|i| &compounds[i]);
        let Some(Compound::Settled { state, .. }) = previous else {
            return (Some(read), Action::Reject(Reject::NoPreviousState));
        };
        let state = state.clone();

        let Some(row) = self.table.row(&state) else {
            return (Some(read), Action::Reject(Reject::NoState(state)));
        };

        let Some(action) = row.get(&read) else {
            return (
                Some(read.clone()),
                Action::Reject(Reject::NoAction {
                    state,
                    symbol: read,
                }),
            );
        };

        match action {
            lr::Action::Accept => (Some(read), Action::Accept),
            lr::Action::Shift(target) => {
                compounds[at] = Compound::Settled {
                    state: target.clone(),
                    symbol: Some(read.clone()),
                };

                (Some(read), Action::Shift(target.clone()))
            }
            lr::Action::Reduce { head, body } => {
                if !body_matches(compounds, at, body) {
                    return (Some(read), Action::Reject(Reject::ReductionMismatch));
                }

                // Replace the matched settled run with one pending compound
                // carrying the head; it is re-scanned on a later iteration
                // and shifted to its goto state like any other symbol
                let k = body.symbols().len();
                compounds.drain(at - k..at);
                compounds.insert(
                    at - k,
                    Compound::Pending {
                        symbol: head.clone(),
                    },
                );

                (
                    Some(read),
                    Action::Reduce {
                        head: head.clone(),
                        body: body.clone(),
                    },
                )
            }
        }
    }
}

/// Verifies that the compounds immediately before the parse boundary spell
/// the production body, read left to right. The symbol-less initial
/// compound fails the comparison, so an ϵ body matches without any scan.
fn body_matches(compounds: &[Compound], at: usize, body: &Production) -> bool {
    let k = body.symbols().len();
    if at < k {
        return false;
    }

    body.symbols()
        .iter()
        .enumerate()
        .all(|(j, want)| compounds[at - k + j].symbol() == Some(want))
}

/// The settled states, reserved prefix dropped, space-joined
fn state_view(compounds: &[Compound]) -> String {
    compounds
        .iter()
        .filter_map(|c| match c {
            Compound::Settled { state, .. } => Some(state.display_name()),
            Compound::Pending { .. } => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every symbol in the sequence, settled and pending alike, concatenated
fn symbol_view(compounds: &[Compound]) -> String {
    compounds
        .iter()
        .filter_map(|c| c.symbol().map(Symbol::as_str))
        .collect()
}
