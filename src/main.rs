use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use strider::merge::inplace_merge;
use strider::permute::{next_permutation, prev_permutation};
use strider::select::{nth_element, partial_sort, sort, stable_sort};
use strider::seq::Slots;
use strider::Readable;

#[derive(Parser, Debug)]
#[command(name = "strider", about = "Sequence algorithms over capability-typed cursors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort whitespace-separated integers from a file.
    Sort {
        /// Input file of integers.
        file: PathBuf,
        /// Preserve the relative order of equal elements.
        #[arg(long)]
        stable: bool,
        /// Only sort the smallest K into the front of the output.
        #[arg(long)]
        partial: Option<usize>,
    },
    /// Print the NTH-smallest element without fully sorting.
    Select {
        /// Input file of integers.
        file: PathBuf,
        /// Zero-based order statistic to select.
        nth: usize,
    },
    /// Merge two already-sorted integer files into one sorted sequence.
    Merge {
        /// First sorted input.
        left: PathBuf,
        /// Second sorted input.
        right: PathBuf,
    },
    /// Step inline integers to their next (or previous) permutation.
    Permute {
        /// The sequence to step.
        values: Vec<i64>,
        /// Step backward instead of forward.
        #[arg(long)]
        prev: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            file,
            stable,
            partial,
        } => run_sort(file, stable, partial)?,
        Commands::Select { file, nth } => run_select(file, nth)?,
        Commands::Merge { left, right } => run_merge(left, right)?,
        Commands::Permute { values, prev } => run_permute(values, prev),
    }

    Ok(())
}

fn read_integers(path: &PathBuf) -> Result<Vec<i64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading integers from {}", path.display()))?;
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .with_context(|| format!("parsing integer {tok:?}"))
        })
        .collect()
}

fn print_values(values: &[i64]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
}

fn run_sort(file: PathBuf, stable: bool, partial: Option<usize>) -> Result<()> {
    let s = Slots::from(read_integers(&file)?);
    match partial {
        Some(k) => {
            let k = k.min(s.len());
            partial_sort(s.begin(), s.cursor_at(k), s.end());
            print_values(&s.snapshot()[..k]);
        }
        None => {
            if stable {
                stable_sort(s.begin(), s.end());
            } else {
                sort(s.begin(), s.end());
            }
            print_values(&s.snapshot());
        }
    }
    Ok(())
}

fn run_select(file: PathBuf, nth: usize) -> Result<()> {
    let s = Slots::from(read_integers(&file)?);
    if nth >= s.len() {
        bail!("nth = {nth} out of range for {} elements", s.len());
    }
    nth_element(s.begin(), s.cursor_at(nth), s.end());
    println!("{}", s.cursor_at(nth).read());
    Ok(())
}

fn run_merge(left: PathBuf, right: PathBuf) -> Result<()> {
    let mut values = read_integers(&left)?;
    let middle = values.len();
    values.extend(read_integers(&right)?);
    let s = Slots::from(values);
    inplace_merge(s.begin(), s.cursor_at(middle), s.end());
    print_values(&s.snapshot());
    Ok(())
}

fn run_permute(values: Vec<i64>, prev: bool) {
    let s = Slots::from(values);
    let stepped = if prev {
        prev_permutation(s.begin(), s.end())
    } else {
        next_permutation(s.begin(), s.end())
    };
    if !stepped {
        eprintln!("wrapped around");
    }
    print_values(&s.snapshot());
}
