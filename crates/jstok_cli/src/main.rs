//! jstok: Command-line driver for the tokenizer.
//!
//! Usage:
//!   jstok [options] [file...]
//!
//! Tokenizes each input and prints one token per line, or a JSON array with
//! `--json`. With no files and no `--eval`, reads source from stdin.

use clap::Parser as ClapParser;
use jstok_scanner::{Token, TokenKind};
use std::io::Read;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "jstok", about = "jstok - A lossless JavaScript tokenizer", version)]
struct Cli {
    /// Source files to tokenize.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Tokenize source text given directly on the command line.
    #[arg(short = 'e', long = "eval", value_name = "SOURCE")]
    eval: Option<String>,

    /// Emit tokens as a JSON array.
    #[arg(long)]
    json: bool,

    /// Omit whitespace tokens from the output.
    #[arg(long = "skipWhitespace")]
    skip_whitespace: bool,

    /// Enable colored output.
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    let sources = collect_sources(&cli);
    let use_color = cli.pretty && !cli.json && atty_is_terminal();

    for (name, source) in &sources {
        let mut tokens = jstok_scanner::tokenize(source);
        if cli.skip_whitespace {
            tokens.retain(|t| t.kind != TokenKind::Whitespace);
        }

        if sources.len() > 1 {
            if use_color {
                println!("{}{}{}:{}", BOLD, CYAN, name, RESET);
            } else {
                println!("{}:", name);
            }
        }

        if cli.json {
            match serde_json::to_string_pretty(&tokens) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    print_error(&format!("Failed to serialize tokens: {}", e));
                    process::exit(1);
                }
            }
        } else {
            for token in &tokens {
                print_token(token, use_color);
            }
        }
    }
}

/// Resolve the inputs to tokenize: --eval text, named files, or stdin.
fn collect_sources(cli: &Cli) -> Vec<(String, String)> {
    if let Some(ref source) = cli.eval {
        return vec![("<eval>".to_string(), source.clone())];
    }

    if cli.files.is_empty() {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            print_error(&format!("Failed to read stdin: {}", e));
            process::exit(1);
        }
        return vec![("<stdin>".to_string(), source)];
    }

    let mut sources = Vec::new();
    for file in &cli.files {
        match std::fs::read_to_string(file) {
            Ok(source) => sources.push((file.clone(), source)),
            Err(e) => {
                print_error(&format!("Failed to read '{}': {}", file, e));
                process::exit(1);
            }
        }
    }
    sources
}

fn print_token(token: &Token, use_color: bool) {
    if !use_color {
        println!("{}", token);
        return;
    }
    let color = match token.kind {
        TokenKind::Keyword => MAGENTA,
        TokenKind::Identifier => CYAN,
        TokenKind::Boolean | TokenKind::Null | TokenKind::Undefined => YELLOW,
        TokenKind::Number => YELLOW,
        TokenKind::String | TokenKind::TemplateString => GREEN,
        TokenKind::Comment | TokenKind::Whitespace => GRAY,
        TokenKind::Unknown => RED,
        _ => RESET,
    };
    println!(
        "{}{}{}({:?}) {}at {}:{}{}",
        color, token.kind, RESET, token.text, GRAY, token.line, token.column, RESET
    );
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
