pub mod cli;
pub mod errors;
pub mod inputs;
pub mod sim;
pub mod symbols;
pub mod tables;
