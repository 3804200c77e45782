use crate::symbols::{self, Symbol};
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The parsing engine requested for an input string
pub enum Method {
    Ll,
    Lr,
}

#[derive(Debug, Clone, PartialEq)]
/// One input string and the engine to run it against
pub struct Request {
    pub method: Method,
    /// The string as written in the input file, for display
    pub raw: String,
    /// The tokenized form fed to the simulator
    pub symbols: Vec<Symbol>,
}

impl Request {
    fn new(method: Method, string: &str) -> Request {
        Request {
            method,
            raw: string.to_string(),
            symbols: symbols::tokenize(string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// The parsed contents of an input file
pub struct InputFile {
    pub requests: Vec<Request>,
    /// Method names the file asked for that no engine recognizes
    pub unsupported: Vec<String>,
}

impl InputFile {
    /// Parses `METHOD;string` rows. The first row is a header and skipped;
    /// unrecognized methods are collected rather than failing the file.
    pub fn parse(text: &str) -> InputFile {
        let mut input = InputFile::default();

        for line in tables::clean_lines(text).iter().skip(1) {
            if line.is_empty() {
                continue;
            }

            let mut cells = line.split(';');
            let method = cells.next().unwrap_or("");
            let string = cells.next().unwrap_or("");

            match method {
                "LL" => input.requests.push(Request::new(Method::Ll, string)),
                "LR" => input.requests.push(Request::new(Method::Lr, string)),
                _ => input.unsupported.push(method.to_string()),
            }
        }

        input
    }

    /// Parses an input file with the given path
    pub fn new_from_file(
        path: &str,
    ) -> std::result::Result<InputFile, Box<dyn std::error::Error>> {
        Ok(InputFile::parse(&std::fs::read_to_string(path)?))
    }
}
