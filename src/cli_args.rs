use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

use minmax_select::values::ValueKind;

/// Find the smallest and largest of a list of values
///
/// Uses a divide and conquer search, which needs about 3n/2 comparisons rather than the 2n of
/// looking for each separately.
///
/// Values are given as arguments (`minmax-select 3 7 1 9`), or read from a file with
/// `-i`/`--input-filename`. An empty list isn't an error, it has no min or max.
///
/// Negative numbers can be given directly. Other values starting with `-` (e.g. with `--kind
/// text`) need a `--` before them: `minmax-select -k text -- -foo bar`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Values to search. Put `--` first if any start with `-` and aren't numbers
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read values from this file, separated by any whitespace. `-` for stdin
    #[arg(short, long, value_name = "FILENAME", conflicts_with = "values")]
    pub input_filename: Option<PathBuf>,

    /// How to read & order the values
    ///   • `int` signed whole numbers
    ///   • `float` decimal numbers (NaN is larger than everything)
    ///   • `text` strings, in byte order
    #[arg(short, long, value_name = "KIND", default_value = "int")]
    pub kind: ValueKind,

    /// Run on some built in example lists, rather than any input
    #[arg(long)]
    pub demo: bool,

    /// Also show how many comparisons were needed, compared to the lower bound & a naive scan
    #[arg(short = 'c', long)]
    pub count_comparisons: bool,

    /// Print one JSON object per list, rather than text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
