//! Interactive shell over one in-memory graph

use crate::{execute, Commands, Session};
use anyhow::Result;
use clap::Parser;
use std::io::Write;

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// Split a line on whitespace, keeping double-quoted runs together
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

pub fn run_shell(session: &mut Session) -> Result<()> {
    println!("Grafo Interactive Shell ({})", session.path.display());
    println!("Type help for commands, quit to exit. Changes stay in memory until save.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("grafo> ");
        std::io::stderr().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens = tokenize(line.trim());
        if tokens.is_empty() {
            continue;
        }

        match tokens[0].as_str() {
            "quit" | "exit" | "q" => break,
            "shell" => {
                eprintln!("Error: already in a shell");
                continue;
            }
            _ => {}
        }

        match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => {
                if let Err(e) = execute(session, parsed.command) {
                    eprintln!("Error: {:#}", e);
                }
            }
            // Usage errors and help requests both land here
            Err(e) => e.print()?,
        }
    }

    println!("Bye!");
    Ok(())
}
