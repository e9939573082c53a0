use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use num_format::{Locale, ToFormattedString};
use serde_json::json;
use std::io::{BufWriter, Write};
use std::path::Path;

use minmax_select::counting::{comparison_bound, naive_comparisons};
use minmax_select::values::{ValueKind, Values};

mod cli_args;

/// Lists run by `--demo`
const DEMO_LISTS: &[&[i64]] = &[
    &[3, 7, 1, 9, 5, 2, 8, 4, 6],
    &[10, 8, 6, 4, 2, 0],
    &[5, 2, 8, 2, 5, 8, 1],
    &[42],
    &[15, 7],
];

fn main() -> Result<()> {
    let args = cli_args::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    info!(
        "Starting minmax-select v{}. Source code: {}",
        std::env!("CARGO_PKG_VERSION"),
        std::env!("CARGO_PKG_REPOSITORY"),
    );

    let lists = if args.demo {
        if !args.values.is_empty() || args.input_filename.is_some() {
            error!("--demo can't be used with values or an input file");
            anyhow::bail!("--demo can't be used with values or an input file");
        }
        if args.kind != ValueKind::Int {
            warn!("The demo lists are all int, ignoring --kind {}", args.kind);
        }
        DEMO_LISTS
            .iter()
            .map(|l| Values::Int(l.to_vec()))
            .collect::<Vec<_>>()
    } else if let Some(path) = &args.input_filename {
        vec![read_values(path, args.kind)?]
    } else {
        if args.values.is_empty() {
            info!("No values given. Pass some as arguments, or use --input-filename or --demo");
        }
        vec![
            Values::parse(args.kind, &args.values)
                .context("Reading values from the command line")?,
        ]
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, values) in lists.iter().enumerate() {
        if args.json {
            write_json(&mut out, values, args.count_comparisons)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write_text(&mut out, values, args.count_comparisons)?;
        }
    }
    out.flush()?;

    Ok(())
}

fn read_values(path: &Path, kind: ValueKind) -> Result<Values> {
    let text = if path == Path::new("-") {
        debug!("Reading values from stdin");
        std::io::read_to_string(std::io::stdin()).context("Reading values from stdin")?
    } else {
        debug!("Reading values from {}", path.display());
        std::fs::read_to_string(path)
            .with_context(|| format!("Reading values from {}", path.display()))?
    };
    let values = Values::parse(kind, text.split_whitespace())
        .with_context(|| format!("Parsing values in {}", path.display()))?;
    Ok(values)
}

fn write_text(out: &mut impl Write, values: &Values, count_comparisons: bool) -> Result<()> {
    writeln!(out, "Values: {}", values)?;
    let comparisons = if count_comparisons {
        match values.min_max_counted() {
            Some(((lo, hi), comparisons)) => {
                writeln!(out, "Min: {}\nMax: {}", lo, hi)?;
                Some(comparisons)
            }
            None => {
                writeln!(out, "Min: none\nMax: none")?;
                Some(0)
            }
        }
    } else {
        match values.min_max() {
            Some((lo, hi)) => writeln!(out, "Min: {}\nMax: {}", lo, hi)?,
            None => writeln!(out, "Min: none\nMax: none")?,
        }
        None
    };

    if let Some(comparisons) = comparisons {
        let n = values.len();
        writeln!(
            out,
            "Comparisons: {} (lower bound {}, naive scan {})",
            comparisons.to_formatted_string(&Locale::en),
            comparison_bound(n).to_formatted_string(&Locale::en),
            naive_comparisons(n).to_formatted_string(&Locale::en),
        )?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, values: &Values, count_comparisons: bool) -> Result<()> {
    let ((lo, hi), comparisons) = if count_comparisons {
        let (pair, comparisons) = values.min_max_json_counted();
        (pair, Some(comparisons))
    } else {
        (values.min_max_json(), None)
    };
    let n = values.len();
    let mut obj = json!({
        "kind": values.kind().to_string(),
        "n": n,
        "min": lo,
        "max": hi,
    });
    if let Some(comparisons) = comparisons {
        obj["comparisons"] = json!(comparisons);
        obj["comparison_bound"] = json!(comparison_bound(n));
        obj["naive_comparisons"] = json!(naive_comparisons(n));
    }
    serde_json::to_writer(&mut *out, &obj)?;
    writeln!(out)?;
    Ok(())
}
