use std::io::{self, BufRead, Write};

use log::debug;

use crate::evaluate_expression;

/// Prompt written before every line is read.
pub const PROMPT: &str = "Enter expression (or 'q' to quit): ";

/// Runs an interactive read-evaluate-print loop until `q`, `quit` or end of
/// input.
///
/// Each non-blank line is evaluated independently and answered with either
/// the value or its `Error: ...` diagnostic. A failed expression never ends
/// the session.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use infixcalc::repl::{PROMPT, run};
///
/// let mut input = Cursor::new("2 + 3 * 4\n10 div 0\nquit\n");
/// let mut output = Vec::new();
/// run(&mut input, &mut output).unwrap();
///
/// let expected = format!("{PROMPT}14\n{PROMPT}Error: Division by zero\n{PROMPT}");
/// assert_eq!(String::from_utf8(output).unwrap(), expected);
/// ```
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let expression = line.trim();
        if is_quit_command(expression) {
            debug!("quit requested");
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match evaluate_expression(expression) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(message) => writeln!(output, "{message}")?,
        }
    }

    Ok(())
}

fn is_quit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}
