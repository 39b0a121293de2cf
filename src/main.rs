// src/main.rs

// adv_calc
// Command-line host for the expression engine: one-shot, batch file, or REPL.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser as ClapParser;
use env_logger::Env;

use adv_calc::{Calculator, CalculatorConfig, EvaluationOutcome};

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluate arithmetic expressions", long_about = None)]
struct Cli {
    /// Expression to evaluate. If omitted (and no --file), launches the REPL.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Evaluate every non-empty line of this file as one batch.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print outcomes as JSON instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Decimals shown for non-integral results.
    #[arg(short, long, default_value_t = 2)]
    decimals: usize,

    /// Deepest nesting the parser accepts.
    #[arg(long, default_value_t = 256)]
    max_depth: usize,

    /// Log each normalized expression.
    #[arg(short, long)]
    verbose: bool,
}

fn show_examples() {
    println!("\n--- Example expressions ---\n");

    let examples = [
        ("Precedence", "2 + 3 * 4"),
        ("Grouping", "(2 + 3) * 4"),
        ("Right-associative power", "2^3^2"),
        ("Square root", "sqrt(16)"),
        ("Trigonometry", "sin(pi/2)"),
        ("Implicit multiplication", "2pi"),
        ("Base-10 logarithm", "log(100)"),
        ("Fahrenheit to Celsius", "(212 - 32) * 5 / 9"),
    ];

    for (description, code) in examples.iter() {
        println!("// {}", description);
        println!("{}\n", code);
    }
    println!("---------------------------\n");
}

fn show_functions(calc: &Calculator) {
    println!("\nSupported Functions:");
    for (i, name) in calc.registered_functions().iter().enumerate() {
        println!("{:2}. {}", i + 1, name);
    }
}

fn show_constants(calc: &Calculator) {
    println!("\nSupported Constants:");
    for (name, value) in calc.registered_constants() {
        println!("{}: {:.10}", name, value);
    }
}

fn show_history(calc: &Calculator, limit: Option<usize>) {
    let history = calc.history(limit);
    if history.is_empty() {
        println!("No calculation history.");
        return;
    }
    for (i, entry) in history.iter().enumerate() {
        println!("{:3}. {:30} = {}", i + 1, entry.input, calc.format_result(&entry.outcome));
    }
}

fn print_outcome(calc: &Calculator, outcome: &EvaluationOutcome, json: bool) {
    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize outcome: {}", e),
        }
    } else {
        println!("Result: {}", calc.format_result(outcome));
    }
}

// Simple REPL
pub fn repl(calc: &mut Calculator, json: bool) {
    println!("adv_calc REPL");
    println!(
        "Enter expressions, ':history [n]', ':clear', ':functions', ':constants', \
         ':examples' or 'quit'"
    );

    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input_str = input.trim();

        match input_str {
            "quit" | "exit" => break,
            "" => continue,
            ":examples" => show_examples(),
            ":functions" => show_functions(calc),
            ":constants" => show_constants(calc),
            ":clear" => {
                calc.clear_history();
                println!("History cleared.");
            }
            _ if input_str.starts_with(":history") => {
                let limit = input_str.trim_start_matches(":history").trim().parse::<usize>().ok();
                show_history(calc, limit);
            }
            _ => {
                let outcome = calc.evaluate(input_str);
                print_outcome(calc, &outcome, json);
            }
        }
    }
}

/// Evaluates every non-empty line of a file as one batch.
fn run_file(calc: &mut Calculator, path: &Path, json: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file '{}'", path.display()))?;

    let lines: Vec<&str> = content.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    log::info!("evaluating {} expressions from {}", lines.len(), path.display());

    let outcomes = calc.evaluate_batch(&lines);
    for (line, outcome) in lines.iter().zip(outcomes.iter()) {
        if json {
            print_outcome(calc, outcome, true);
        } else {
            println!("{:30} = {}", line, calc.format_result(outcome));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = CalculatorConfig::default()
        .with_decimal_places(cli.decimals)
        .with_max_depth(cli.max_depth)
        .with_verbose(cli.verbose);
    let mut calc = Calculator::with_config(config);

    if let Some(path) = cli.file {
        if let Err(e) = run_file(&mut calc, &path, cli.json) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    } else if !cli.expression.is_empty() {
        let expression = cli.expression.join(" ");
        let outcome = calc.evaluate(&expression);
        if !cli.json {
            println!("Input: {}", expression);
        }
        print_outcome(&calc, &outcome, cli.json);
        if outcome.is_error() {
            std::process::exit(2);
        }
    } else {
        repl(&mut calc, cli.json);
    }
}
