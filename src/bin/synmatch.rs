//! Command-line interface for syntax-match
//!
//! Usage:
//!   synmatch tokenize `<text>`                 - Print the tokens of `<text>`
//!   synmatch match `<text>` [--show-grammar]   - Match `<text>` against the operator-chain grammar
//!   synmatch repl                            - Match lines read from stdin until `exit`
//!
//! Global flags: `--config <path>`, `--format pretty|json`, `--verbose`.
//! Without `--config`, `./synmatch.toml` is layered over the defaults if present.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, Write};
use std::process;

use syntax_match::config::{Loader, SynmatchConfig};
use syntax_match::formats::{FormatError, OutputFormat};
use syntax_match::{grammars, tokenize_with_config, Matcher, Value};

/// Picked up from the working directory when `--config` is not given
const LOCAL_CONFIG: &str = "synmatch.toml";

fn main() {
    let matches = Command::new("synmatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize text and enumerate grammar derivations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["pretty", "json"])
                .help("Output format (overrides output.format)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Print the tokens of a piece of text")
                .arg(Arg::new("text").help("Text to tokenize").required(true).index(1)),
        )
        .subcommand(
            Command::new("match")
                .about("Match text against the operator-chain grammar")
                .arg(Arg::new("text").help("Text to match").required(true).index(1))
                .arg(
                    Arg::new("show-grammar")
                        .long("show-grammar")
                        .action(ArgAction::SetTrue)
                        .help("Print the grammar before matching"),
                ),
        )
        .subcommand(Command::new("repl").about("Match lines read from stdin until `exit`"))
        .get_matches();

    let filter = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    match matches.subcommand() {
        Some(("tokenize", sub)) => handle_tokenize_command(text_arg(sub), &config),
        Some(("match", sub)) => {
            handle_match_command(text_arg(sub), sub.get_flag("show-grammar"), &config)
        }
        Some(("repl", _)) => handle_repl_command(&config),
        _ => unreachable!(),
    }
}

fn text_arg(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("text")
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<SynmatchConfig, config::ConfigError> {
    let mut loader = Loader::new();
    loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file(LOCAL_CONFIG),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the tokenize command
fn handle_tokenize_command(text: &str, config: &SynmatchConfig) {
    let tokens = tokenize_with_config(text, &config.tokenizer).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    match config.output.format.render_tokens(&tokens) {
        Ok(out) => print!("{}", ensure_newline(out)),
        Err(e) => fail(e),
    }
}

/// Handle the match command
fn handle_match_command(text: &str, show_grammar: bool, config: &SynmatchConfig) {
    let grammar = grammars::operator_chain();
    if show_grammar {
        println!("{}", grammar);
    }
    if let Err(message) = run_match(&grammar, text, config) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

/// Handle the repl command
fn handle_repl_command(config: &SynmatchConfig) {
    let grammar = grammars::operator_chain();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(">>> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
            None => break,
        };
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if let Err(message) = run_match(&grammar, line, config) {
            eprintln!("{}", message);
        }
    }
    println!();
}

/// Tokenize `text`, print every derivation, then the count.
fn run_match(grammar: &Matcher, text: &str, config: &SynmatchConfig) -> Result<(), String> {
    let tokens = tokenize_with_config(text, &config.tokenizer).map_err(|e| e.to_string())?;
    let format = config.output.format;
    if config.output.show_tokens {
        print!("{}", ensure_newline(format.render_tokens(&tokens).map_err(|e| e.to_string())?));
    }

    let mut cursor = tokens.cursor();
    let derivations: Vec<Value> = grammar.matches(&mut cursor).collect();
    for (i, value) in derivations.iter().enumerate() {
        println!("RESULT {} - {}", i, render(format, value)?);
    }
    println!("Number matches {}", derivations.len());
    Ok(())
}

fn render(format: OutputFormat, value: &Value) -> Result<String, String> {
    format.render_value(value).map_err(|e| e.to_string())
}

fn ensure_newline(mut out: String) -> String {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn fail(error: FormatError) -> ! {
    eprintln!("Error: {}", error);
    process::exit(1);
}
