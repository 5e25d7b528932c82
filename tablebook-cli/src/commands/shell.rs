//! `tablebook shell`: one command per stdin line against a single session.
//!
//! Filters set by `filter` or `person find` stay active until a later command
//! resets them, which one-shot invocations cannot do.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Result};
use clap::Parser;

use super::AppCommand;
use crate::session::Session;

const PROMPT: &str = "tablebook> ";

#[derive(Parser, Debug)]
#[command(name = "tablebook", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: AppCommand,
}

pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!(
            "Tablebook shell on {}. Type 'help' for commands, 'exit' to quit.",
            session.path().display()
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{PROMPT}");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        match words.first().map(String::as_str) {
            None => continue,
            Some("exit") | Some("quit") => break,
            Some(_) => {}
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(e) = session.run(parsed.command) {
                    eprintln!("error: {e:#}");
                }
            }
            Err(e) => {
                // clap renders help and usage errors itself
                let _ = e.print();
            }
        }
    }
    Ok(())
}

/// Split a line into words, honouring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        bail!("unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
