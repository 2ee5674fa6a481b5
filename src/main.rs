//! A line-oriented command interpreter over an [`AvlSet`] of integers.
//!
//! Reads a command file one line at a time and applies each command to a
//! single tree of `i64` values:
//!
//! | Command | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `I <v>` | insert `v` (silent on duplicate)                        |
//! | `R <v>` | remove `v` (silent on absent)                           |
//! | `B <v>` | report whether `v` is in the tree                       |
//! | `P`     | report the pre-order traversal, space separated         |
//! | `F`     | report each value and its balance factor, one per line  |
//! | `H`     | report the tree height                                  |
//!
//! A malformed line (unknown command, missing or non-numeric operand) is
//! reported and skipped; it never aborts processing of subsequent lines.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use avlset::AvlSet;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "avlset", about = "Run a file of AVL tree set commands")]
struct Cli {
    /// Path to the command file, one command per line.
    input: PathBuf,
}

/// A single well-formed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Insert(i64),
    Remove(i64),
    Search(i64),
    PreOrder,
    BalanceFactors,
    Height,
}

/// The ways a command line can be malformed.
///
/// A parse failure only ever affects the line it occurred on.
#[derive(Debug, Error, PartialEq, Eq)]
enum ParseLineError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("command {0} requires a value")]
    MissingOperand(char),

    #[error("bad numeric operand {0:?}")]
    BadOperand(String),
}

/// Parse a single line into a [`Command`].
///
/// Returns `Ok(None)` for blank lines. Command letters are matched case
/// insensitively, and tokens beyond those a command consumes are ignored.
fn parse_line(line: &str) -> Result<Option<Command>, ParseLineError> {
    let mut tokens = line.split_whitespace();

    let letter = match tokens.next() {
        Some(v) => v,
        None => return Ok(None),
    };

    let command = match letter.to_ascii_uppercase().as_str() {
        "I" => Command::Insert(parse_operand('I', tokens.next())?),
        "R" => Command::Remove(parse_operand('R', tokens.next())?),
        "B" => Command::Search(parse_operand('B', tokens.next())?),
        "P" => Command::PreOrder,
        "F" => Command::BalanceFactors,
        "H" => Command::Height,
        other => return Err(ParseLineError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_operand(command: char, token: Option<&str>) -> Result<i64, ParseLineError> {
    let token = token.ok_or(ParseLineError::MissingOperand(command))?;
    token
        .parse()
        .map_err(|_| ParseLineError::BadOperand(token.to_string()))
}

/// Apply `command` to `tree`, writing any reported output to `out`.
fn apply<W>(tree: &mut AvlSet<i64>, command: Command, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    match command {
        Command::Insert(v) => {
            tree.insert(v);
        }
        Command::Remove(v) => {
            tree.remove(&v);
        }
        Command::Search(v) => {
            if tree.contains(&v) {
                writeln!(out, "{v} found")?;
            } else {
                writeln!(out, "{v} not found")?;
            }
        }
        Command::PreOrder => {
            let values = tree.pre_order().map(|v| v.to_string()).collect::<Vec<_>>();
            writeln!(out, "pre-order: {}", values.join(" "))?;
        }
        Command::BalanceFactors => {
            writeln!(out, "balance factors:")?;
            for (v, b) in tree.balance_factors() {
                writeln!(out, "node {v}: balance factor {b}")?;
            }
        }
        Command::Height => {
            writeln!(out, "height: {}", tree.height())?;
        }
    }

    Ok(())
}

/// Feed every line of `input` through the interpreter, reporting per-line
/// failures to `out` and carrying on with the next line.
fn run<R, W>(input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut tree = AvlSet::default();

    for line in input.lines() {
        let line = line.context("read command line")?;

        match parse_line(&line) {
            Ok(Some(command)) => apply(&mut tree, command, out)?,
            Ok(None) => {}
            Err(e) => writeln!(out, "error processing command {line:?}: {e}")?,
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open command file {}", cli.input.display()))?;

    run(BufReader::new(file), &mut io::stdout().lock())
}
