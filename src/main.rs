use clap::Parser;
use tablewalk::cli;
use tablewalk::cli::args::Options;

fn main() {
    cli::run(&Options::parse());
}
