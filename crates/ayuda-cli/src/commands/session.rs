// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda session` command.
//!
//! A session keeps one portal alive while the operator types commands, so
//! queue changes, case decisions and scans accumulate until the process
//! exits. Lines use the same grammar as the binary without the `ayuda`
//! prefix.

use super::Command;
use crate::interrupt::{cancel_on_interrupt, listen_for_interrupts, Interrupts};
use crate::terminal::{print_info, print_warning};
use crate::OutputFormatter;
use ayuda_app::{AppError, Portal};
use ayuda_core::ScanDecoder;
use clap::Parser;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(name = "ayuda", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: Command,
}

/// Result of one session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line.
    Empty,
    /// The operator asked to leave.
    Exit,
    /// Rendered command output or error.
    Output(String),
}

/// Splits a session line into words.
///
/// Single or double quotes group words containing spaces; a backslash
/// escapes the next character.
///
/// # Errors
///
/// Returns an error if a quote is left open.
pub fn tokenize(line: &str) -> Result<Vec<String>, AppError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_word = true;
                }
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parses and runs one session line.
pub async fn apply_line<D: ScanDecoder>(
    portal: &mut Portal<D>,
    line: &str,
    formatter: &dyn OutputFormatter,
    token: &CancellationToken,
) -> LineOutcome {
    let words = match tokenize(line) {
        Ok(words) => words,
        Err(err) => return LineOutcome::Output(formatter.format_error(&err)),
    };

    match words.first().map(String::as_str) {
        None => LineOutcome::Empty,
        Some("exit" | "quit") => LineOutcome::Exit,
        Some(_) => match SessionLine::try_parse_from(&words) {
            Ok(parsed) => {
                match super::execute(portal, parsed.command, formatter, token).await {
                    Ok(output) => LineOutcome::Output(output),
                    Err(err) => LineOutcome::Output(formatter.format_error(&err)),
                }
            }
            Err(err) => LineOutcome::Output(err.to_string()),
        },
    }
}

/// Reads commands from `input` until EOF, `exit`, or Ctrl-C at the prompt.
///
/// Ctrl-C while a scan is running cancels the scan and keeps the session
/// open. Lines typed before the interrupt are still run.
///
/// # Errors
///
/// Returns an error if the interrupt listener cannot be installed, or if
/// reading input or writing output fails.
pub async fn run<D, R>(
    portal: &mut Portal<D>,
    formatter: &dyn OutputFormatter,
    input: R,
    interactive: bool,
) -> anyhow::Result<()>
where
    D: ScanDecoder,
    R: BufRead + Send + 'static,
{
    let interrupts = listen_for_interrupts()?;
    run_with(portal, formatter, read_lines(input), interrupts, interactive).await
}

/// Runs a session over already-split input lines and an interrupt feed.
///
/// # Errors
///
/// Returns an error if a line could not be read or the prompt cannot be
/// written.
pub async fn run_with<D: ScanDecoder>(
    portal: &mut Portal<D>,
    formatter: &dyn OutputFormatter,
    mut lines: mpsc::Receiver<std::io::Result<String>>,
    mut interrupts: Interrupts,
    interactive: bool,
) -> anyhow::Result<()> {
    if interactive {
        print_info("Session started. Type 'help' for commands, 'exit', Ctrl-D or Ctrl-C to leave.");
        prompt()?;
    }

    loop {
        let line = tokio::select! {
            biased;
            line = lines.recv() => match line {
                Some(line) => line?,
                None => break,
            },
            Some(()) = interrupts.recv() => {
                if interactive {
                    println!();
                }
                print_warning("Interrupted, leaving session.");
                break;
            }
        };

        let token = CancellationToken::new();
        let outcome = cancel_on_interrupt(
            apply_line(portal, &line, formatter, &token),
            &token,
            &mut interrupts,
        )
        .await;

        match outcome {
            LineOutcome::Empty => {}
            LineOutcome::Exit => break,
            LineOutcome::Output(text) => println!("{}", text.trim_end()),
        }

        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

/// Reads `input` on its own thread so the prompt can wait for a line and an
/// interrupt at the same time.
fn read_lines<R: BufRead + Send + 'static>(input: R) -> mpsc::Receiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in input.lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "ayuda> ")?;
    stdout.flush()
}
