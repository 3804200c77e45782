use crate::sim::Trace;
use crate::symbols::{Symbol, ID};

/// Renders an LL(1) trace as a console table
pub fn ll_trace(trace: &Trace) -> String {
    let rows: Vec<(String, String, String, String)> = trace
        .steps()
        .iter()
        .map(|s| {
            (
                s.no.to_string(),
                display(&s.stack),
                display(&s.input),
                display(&s.action.to_string()),
            )
        })
        .collect();

    let no_w = width("NO", rows.iter().map(|r| chars(&r.0)));
    let stack_w = width("STACK", rows.iter().map(|r| chars(&r.1)));
    let input_w = width("INPUT", rows.iter().map(|r| chars(&r.2)));

    let mut out = format!(
        "{:<no_w$} | {:<stack_w$} | {:<input_w$} | ACTION\n",
        "NO", "STACK", "INPUT",
    );
    for (no, stack, input, action) in &rows {
        out.push_str(&format!(
            "{:<no_w$} | {:<stack_w$} | {:>input_w$} | {}\n",
            no, stack, input, action,
        ));
    }

    out
}

/// Renders an LR(1) trace as a console table
pub fn lr_trace(trace: &Trace) -> String {
    let rows: Vec<(String, String, String, String, String)> = trace
        .steps()
        .iter()
        .map(|s| {
            (
                s.no.to_string(),
                display(&s.stack),
                s.read.as_ref().map(read_display).unwrap_or_default(),
                display(&s.input),
                display(&s.action.to_string()),
            )
        })
        .collect();

    let no_w = width("NO", rows.iter().map(|r| chars(&r.0)));
    let stack_w = width("STATE STACK", rows.iter().map(|r| chars(&r.1)));
    let read_w = width("READ", rows.iter().map(|r| chars(&r.2)));
    let input_w = width("INPUT", rows.iter().map(|r| chars(&r.3)));

    let mut out = format!(
        "{:<no_w$} | {:<stack_w$} | {:<read_w$} | {:<input_w$} | ACTION\n",
        "NO", "STATE STACK", "READ", "INPUT",
    );
    for (no, stack, read, input, action) in &rows {
        out.push_str(&format!(
            "{:<no_w$} | {:<stack_w$} | {:<read_w$} | {:>input_w$} | {}\n",
            no, stack, read, input, action,
        ));
    }

    out
}

/// Restores the display form of the reserved identifier symbol
fn display(text: &str) -> String {
    text.replace(ID, "id")
}

fn read_display(symbol: &Symbol) -> String {
    display(symbol.as_str())
}

/// The width of a column: its widest row, no narrower than its header
fn width<I: Iterator<Item = usize>>(header: &str, rows: I) -> usize {
    rows.fold(header.len(), usize::max)
}

fn chars(s: &str) -> usize {
    s.chars().count()
}
