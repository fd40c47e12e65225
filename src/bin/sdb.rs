//! Command-line debug monitor for the expression engine.
//!
//! Usage:
//!   sdb eval `<expr>`              - Evaluate an expression and print the value
//!   sdb tokens `<expr>` [--json]   - Dump the token sequence
//!   sdb repl                       - Interactive monitor loop
//!
//! Register and memory state lives in a built-in simulated machine; the repl
//! has `set` and `wm` commands to change it so dereference and register
//! expressions have something to read.

use clap::{Arg, ArgAction, Command};
use std::io::{self, BufRead, Write as _};

use sdb::expr::{self, dump_tokens, ExprError, ExprLimits, LexError};
use sdb::machine::SimMachine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("sdb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Debug-monitor expression evaluator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("limits")
                .long("limits")
                .global(true)
                .help("Path to a YAML file with expression limits"),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate an expression and print the value")
                .arg(
                    Arg::new("expression")
                        .help("The expression to evaluate")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token sequence of an expression")
                .arg(
                    Arg::new("expression")
                        .help("The expression to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the tokens as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("repl").about("Interactive monitor loop"))
        .get_matches();

    let limits = match load_limits(matches.get_one::<String>("limits")) {
        Ok(limits) => limits,
        Err(e) => {
            eprintln!("Error loading limits: {}", e);
            std::process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("eval", sub)) => {
            let expression = sub.get_one::<String>("expression").unwrap();
            handle_eval_command(expression, &limits);
        }
        Some(("tokens", sub)) => {
            let expression = sub.get_one::<String>("expression").unwrap();
            handle_tokens_command(expression, &limits, sub.get_flag("json"));
        }
        Some(("repl", _)) => {
            handle_repl_command(&limits);
        }
        _ => unreachable!(),
    }
}

fn load_limits(path: Option<&String>) -> Result<ExprLimits, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(serde_yaml::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(ExprLimits::default()),
    }
}

/// Handle the eval command
fn handle_eval_command(expression: &str, limits: &ExprLimits) {
    let machine = SimMachine::new();
    match expr::evaluate_with(expression, &machine, limits) {
        Ok(value) => println!("{} (0x{:x})", value, value),
        Err(e) => {
            report_error(expression, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(expression: &str, limits: &ExprLimits, json: bool) {
    match expr::tokenize(expression, limits) {
        Ok(tokens) => {
            if json {
                match serde_json::to_string_pretty(&tokens) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", dump_tokens(&tokens));
            }
        }
        Err(e) => {
            report_error(expression, &ExprError::Lex(e));
            std::process::exit(1);
        }
    }
}

/// Handle the repl command
fn handle_repl_command(limits: &ExprLimits) {
    let mut machine = SimMachine::new();
    let stdin = io::stdin();

    loop {
        print!("(sdb) ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }

        if let Some(rest) = line.strip_prefix("set ") {
            handle_set(rest, &mut machine, limits);
            continue;
        }
        if let Some(rest) = line.strip_prefix("wm ") {
            handle_write_memory(rest, &mut machine, limits);
            continue;
        }

        match expr::evaluate_with(line, &machine, limits) {
            Ok(value) => println!("{} (0x{:x})", value, value),
            Err(e) => report_error(line, &e),
        }
    }
}

/// `set <reg> <expr>`: the value operand goes through the evaluator, so
/// `set sp 0x1000+16` works.
fn handle_set(rest: &str, machine: &mut SimMachine, limits: &ExprLimits) {
    let Some((name, value_expr)) = rest.trim().split_once(' ') else {
        eprintln!("usage: set <reg> <expr>");
        return;
    };
    match expr::evaluate_with(value_expr.trim(), machine, limits) {
        Ok(value) => {
            if !machine.set_register(name, value) {
                eprintln!("unknown register: {}", name);
            }
        }
        Err(e) => report_error(value_expr, &e),
    }
}

/// `wm <addr-expr> <value-expr>`: write one word, little endian.
fn handle_write_memory(rest: &str, machine: &mut SimMachine, limits: &ExprLimits) {
    let Some((addr_expr, value_expr)) = rest.trim().split_once(' ') else {
        eprintln!("usage: wm <addr> <value>");
        return;
    };
    let addr = match expr::evaluate_with(addr_expr.trim(), machine, limits) {
        Ok(addr) => addr,
        Err(e) => {
            report_error(addr_expr, &e);
            return;
        }
    };
    match expr::evaluate_with(value_expr.trim(), machine, limits) {
        Ok(value) => machine.write_word(addr, value),
        Err(e) => report_error(value_expr, &e),
    }
}

/// Print an evaluation failure; lexing failures point at the offending byte.
fn report_error(expression: &str, err: &ExprError) {
    eprintln!("Error: {}", err);
    if let ExprError::Lex(LexError::NoMatch { position, .. }) = err {
        eprintln!("  {}", expression);
        eprintln!("  {:width$}^", "", width = *position);
    }
}
