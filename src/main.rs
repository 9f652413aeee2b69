use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use luma::{evaluate_source, interpreter::evaluator::core::Environment};

/// luma is an easy to use scripting language with Lua-like syntax.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells luma to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a luma script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the variable store after the run, one `name = value` line per
    /// live variable.
    #[arg(short, long)]
    dump_vars: bool,

    /// Reads lines from standard input instead, evaluating each one against
    /// a single shared variable store.
    #[arg(short, long)]
    interactive: bool,

    /// The script itself, or a path to it when --file is given.
    #[arg(required_unless_present = "interactive")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        run_interactive(args.dump_vars);
        return;
    }

    let Some(contents) = args.contents else {
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut env = Environment::new();
    match evaluate_source(&script, &mut env) {
        Ok(value) => {
            if args.pipe_mode && let Some(value) = value {
                println!("{value}");
            }
            if args.dump_vars {
                dump_vars(&env);
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}

/// Evaluates standard input line by line against one shared store.
///
/// Errors are reported and the loop keeps going with the next line; the
/// store survives failed lines, so earlier assignments stay visible.
fn run_interactive(dump_vars_after_line: bool) {
    let mut env = Environment::new();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        match evaluate_source(&line, &mut env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }

        if dump_vars_after_line {
            dump_vars(&env);
        }
    }
}

/// Prints the live variables in name order.
fn dump_vars(env: &Environment) {
    let mut entries: Vec<_> = env.variables().collect();
    entries.sort_by_key(|(name, _)| *name);

    for (name, value) in entries {
        println!("{name} = {value}");
    }
}
