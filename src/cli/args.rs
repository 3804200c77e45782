use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the tablewalk tool
pub struct Options {
    /// Path to the LL(1) parsing table file
    #[arg(long, default_value = "ll.txt")]
    pub ll: String,

    /// Path to the LR(1) parsing table file
    #[arg(long, default_value = "lr.txt")]
    pub lr: String,

    /// Path to the input strings file
    #[arg(long, default_value = "input.txt")]
    pub input: String,
}
