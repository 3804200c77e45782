pub mod ll;
pub mod lr;
mod reader;
mod stack;

use std::fmt;

use crate::symbols::{Production, Symbol};
use crate::tables::lr::StateId;

#[derive(Debug, Clone, PartialEq)]
/// One recorded simulation step. The stack and input columns show the
/// state the run was in when the step began; the action describes what
/// transforms that state into the next row's.
pub struct Step {
    pub no: usize,
    pub stack: String,
    pub input: String,
    pub read: Option<Symbol>,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
/// The action taken by a simulation step
pub enum Action {
    /// An LL(1) production applied to the non-terminal on top of the stack
    Apply { head: Symbol, body: Production },
    /// A terminal matched against the head of the input and consumed
    Match(Symbol),
    /// An LR(1) shift of the read symbol into the given state
    Shift(StateId),
    /// An LR(1) reduction replacing the production body with its head
    Reduce { head: Symbol, body: Production },
    Accept,
    Reject(Reject),
}

impl Action {
    /// Returns true for the two actions that terminate a run
    pub fn is_final(&self) -> bool {
        matches!(self, Action::Accept | Action::Reject(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Apply { head, body } => write!(f, "{}->{}", head, body),
            Action::Match(symbol) => write!(f, "Match and remove \"{}\"", symbol),
            Action::Shift(state) => write!(f, "Shift to \"{}\"", state),
            Action::Reduce { head, body } => write!(f, "Reduce by \"{}->{}\"", head, body),
            Action::Accept => write!(f, "ACCEPTED"),
            Action::Reject(cause) => write!(f, "REJECTED ({})", cause),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A cause for rejecting an input string. Every rejection is a terminal
/// step record, never an error; a failed run does not affect later runs.
pub enum Reject {
    /// The non-terminal's row has no entry for the lookahead (LL)
    NoLookahead {
        non_terminal: Symbol,
        lookahead: Symbol,
    },
    /// The stack symbol has no row in the LL(1) table
    NoRow(Symbol),
    /// The state's row has no entry for the read symbol (LR)
    NoAction { state: StateId, symbol: Symbol },
    /// The state has no row in the LR(1) table
    NoState(StateId),
    /// The symbols before the parse boundary do not spell the production
    /// body being reduced
    ReductionMismatch,
    /// No pending compound remains to classify (malformed run)
    NoPendingSymbol,
    /// The first pending compound has no settled predecessor (malformed run)
    NoPreviousState,
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reject::NoLookahead {
                non_terminal,
                lookahead,
            } => write!(
                f,
                "\"{}\" doesn't have an action/step for \"{}\"",
                non_terminal, lookahead
            ),
            Reject::NoRow(symbol) => {
                write!(f, "\"{}\" not found in the LL(1) parsing table", symbol)
            }
            Reject::NoAction { state, symbol } => write!(
                f,
                "\"{}\" doesn't have an action/step for \"{}\"",
                state, symbol
            ),
            Reject::NoState(state) => {
                write!(f, "\"{}\" not found in the LR(1) parsing table", state)
            }
            Reject::ReductionMismatch => write!(f, "reduction symbols do not match stack"),
            Reject::NoPendingSymbol => write!(f, "no pending symbol found"),
            Reject::NoPreviousState => write!(f, "previous state not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// The ordered record of a full simulation run, owned by the run that
/// produced it and handed off whole
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace { steps: Vec::new() }
    }

    /// Appends a step; records are immutable once appended
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final step of the run; every completed run has at least one
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Returns true if the run ended in ACCEPT
    pub fn accepted(&self) -> bool {
        matches!(self.last(), Some(step) if step.action == Action::Accept)
    }

    /// The rejection cause, if the run ended in REJECT
    pub fn rejection(&self) -> Option<&Reject> {
        match self.last() {
            Some(Step {
                action: Action::Reject(cause),
                ..
            }) => Some(cause),
            _ => None,
        }
    }
}
