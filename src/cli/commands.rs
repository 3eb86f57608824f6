use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "An in-memory bank ledger driven by a CSV command file",
    long_about = None,
    after_help = "OUTPUT:\n    Final account state is printed to stdout in CSV format.\n    Use shell redirection to save to a file:\n\n    bank-ledger commands.csv > accounts.csv"
)]
pub struct Args {
    /// Path to the input commands CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: op, account, to, owner, kind, amount, description"
    )]
    pub input_file: PathBuf,
}
