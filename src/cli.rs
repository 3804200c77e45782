pub mod args;
pub mod output;

use crate::inputs::{InputFile, Method};
use crate::{sim, tables};

/// Loads both tables and the input file, evaluates every request, and
/// renders each trace to the console. Each input string is evaluated
/// independently; a rejection on one never affects the next.
pub fn run(options: &args::Options) {
    let ll_table = load(tables::ll::Table::new_from_file(&options.ll), &options.ll);
    println!(
        "[INFO] | Read LL(1) parsing table from file \"{}\".",
        options.ll
    );

    let lr_table = load(tables::lr::Table::new_from_file(&options.lr), &options.lr);
    println!(
        "[INFO] | Read LR(1) parsing table from file \"{}\".",
        options.lr
    );

    let input = load(InputFile::new_from_file(&options.input), &options.input);
    println!(
        "[INFO] | Read input strings from file \"{}\".",
        options.input
    );

    for method in &input.unsupported {
        println!(
            "[WARN] | Unsupported parsing method \"{}\" found in the file \"{}\" and ignored.",
            method, options.input
        );
    }

    for request in &input.requests {
        match request.method {
            Method::Ll => {
                println!();
                println!(
                    "[INFO] | Processing input string \"{}\" for LL(1) parsing table.",
                    request.raw
                );

                let trace = sim::ll::Simulator::new(&ll_table).simulate(&request.symbols);
                println!();
                print!("{}", output::ll_trace(&trace));
            }
            Method::Lr => {
                println!();
                println!(
                    "[INFO] | Processing input string \"{}\" for LR(1) parsing table.",
                    request.raw
                );

                let trace = sim::lr::Simulator::new(&lr_table).simulate(&request.symbols);
                println!();
                print!("{}", output::lr_trace(&trace));
            }
        }
    }
}

/// Unwraps a load result, or reports the failure and exits
fn load<T>(result: std::result::Result<T, Box<dyn std::error::Error>>, path: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("[FAIL] | Could not read \"{}\": {}", path, e);
            std::process::exit(1);
        }
    }
}
