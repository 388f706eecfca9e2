use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use calc::{
    display_error, errors::errors::Error, evaluate_expression, evaluator::evaluator::Evaluator,
    lexer::lexer::tokenize, parser::parser::parse,
};
use clap::Parser;

/// calc evaluates integer arithmetic expressions built from `+ - * /`,
/// sign prefixes and parentheses.
///
/// With an expression argument it prints the result and exits; otherwise
/// it reads one expression per line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prompt printed before each line is read.
    #[arg(long, default_value = "calc> ")]
    prompt: String,

    /// Print the token stream of each expression.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree of each expression.
    #[arg(long)]
    ast: bool,

    /// Print how long each stage took to standard error.
    #[arg(long)]
    timings: bool,

    /// Expression to evaluate instead of starting the read loop.
    expression: Option<String>,
}

impl Args {
    fn is_instrumented(&self) -> bool {
        self.tokens || self.ast || self.timings
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(expression) = &args.expression {
        return match run(expression, &args) {
            Ok(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", display_error(&error, expression));
                ExitCode::FAILURE
            }
        };
    }

    let stdin = io::stdin();
    if let Err(error) = repl(stdin.lock(), &mut io::stdout(), &args) {
        eprintln!("Failed to read input: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Reads and evaluates lines from `input` until it runs out.
///
/// Prompts, results and errors go to `output`. A bad expression prints
/// its error and the loop carries on.
fn repl(input: impl BufRead, output: &mut impl Write, args: &Args) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", args.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match run(&line, args) {
            Ok(result) => writeln!(output, "{}", result)?,
            Err(error) => writeln!(output, "{}", display_error(&error, &line))?,
        }
    }
}

fn run(source: &str, args: &Args) -> Result<i64, Error> {
    if !args.is_instrumented() {
        return evaluate_expression(source);
    }

    let start = Instant::now();

    if args.tokens {
        for token in tokenize(source)? {
            println!("{}", token);
        }

        if args.timings {
            eprintln!("Tokenized in {:?}", start.elapsed());
        }
    }

    let parse_start = Instant::now();
    let ast = parse(source)?;

    if args.timings {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }

    if args.ast {
        println!("{}", ast);
    }

    let evaluate_start = Instant::now();
    let mut evaluator = Evaluator::new();
    let result = evaluator.evaluate(&ast)?;

    if args.timings {
        eprintln!(
            "Evaluated {} nodes in {:?}",
            evaluator.nodes_visited(),
            evaluate_start.elapsed()
        );
        eprintln!("Total time: {:?}", start.elapsed());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{repl, Args};

    fn session(input: &str) -> String {
        let args = Args::parse_from(["calc", "--prompt", "> "]);
        let mut output = Vec::new();

        repl(input.as_bytes(), &mut output, &args).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_repl_prints_each_result() {
        assert_eq!(session("1 + 2\n2 * 3\n"), "> 3\n> 6\n> \n");
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        assert_eq!(session("\n   \n7\n"), "> > > 7\n> \n");
    }

    #[test]
    fn test_repl_continues_after_an_error() {
        let output = session("1 / 0\n(1\n4 - 5\n");

        assert!(output.contains("Error: DivisionByZero\n  |\n1 | 1 / 0\n  | --^\n"));
        assert!(output.contains("Error: UnexpectedToken"));
        assert!(output.ends_with("> -1\n> \n"));
    }

    #[test]
    fn test_repl_stops_at_end_of_input() {
        assert_eq!(session(""), "> \n");
        // A last line without a newline is still evaluated
        assert_eq!(session("5"), "> 5\n> \n");
    }
}
