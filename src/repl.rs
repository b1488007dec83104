use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::synth::synth;

pub const PROMPT: &str = ">>";

#[derive(Clone, Debug)]
pub struct Options {
    pub prompt: String,
    /// Print the canonical form in front of the type tag.
    pub canonical: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            prompt: PROMPT.to_string(),
            canonical: false,
        }
    }
}

/// Checks one line and renders the result. Blank lines render as `None`.
pub fn eval_line(line: &str, options: &Options) -> Result<Option<String>> {
    debug!(line, "checking line");

    let value = match normalize(line) {
        Ok(value) => value,
        Err(Error::EmptyInput) => return Ok(None),
        Err(err) => return Err(err),
    };
    let ty = synth(&value)?;

    if options.canonical {
        Ok(Some(format!("{} : {}", value, ty)))
    } else {
        Ok(Some(ty.to_string()))
    }
}

/// Reads lines until EOF, printing one result or error per line.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, options: &Options) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match eval_line(&line, options) {
            Ok(Some(rendered)) => writeln!(output, "{}", rendered)?,
            Ok(None) => {}
            Err(err) => writeln!(output, "Error: {}", err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, options: &Options) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn should_print_types_and_errors() {
        let output = run_session("1\n'a'\n+ true false\n", &Options::default());
        assert_eq!(
            output,
            ">>number\n>>single-quote-string\n>>Error: invalid binary operation\n>>"
        );
    }

    #[test]
    fn should_skip_empty_lines_silently() {
        let output = run_session("\n   \nnil\n", &Options::default());
        assert_eq!(output, ">>>>>>nil\n>>");
    }

    #[test]
    fn should_continue_after_errors() {
        let output = run_session("[1, 2\n+ x 1\n{\"a\": 1}\n", &Options::default());
        let lines: Vec<&str> = output.split('\n').collect();

        assert!(lines[0].starts_with(">>Error: syntax error: "));
        assert_eq!(lines[1], ">>Error: invalid left operand");
        assert_eq!(lines[2], ">>object");
        assert_eq!(lines[3], ">>");
    }

    #[test]
    fn should_handle_crlf_and_missing_trailing_newline() {
        let output = run_session("+ 1 2\r\n\"x\"", &Options::default());
        assert_eq!(output, ">>number\n>>double-quote-string\n>>");
    }

    #[test]
    fn should_use_custom_prompt() {
        let options = Options {
            prompt: "typc> ".to_string(),
            canonical: false,
        };
        assert_eq!(run_session("1\n", &options), "typc> number\ntypc> ");
    }

    #[test]
    fn should_render_canonical_form() {
        let options = Options {
            canonical: true,
            ..Options::default()
        };
        let cases = vec![
            ("(+ 1 2)", "(+ 1 2) : number"),
            ("[\"+\", \"a\", \"b\"]", "(+ \"a\" \"b\") : double-quote-string"),
            ("[1, 2.5]", "[1, 2.5] : array"),
            ("null", "nil : nil"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                eval_line(input, &options),
                Ok(Some(expected.to_string())),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn should_report_eval_errors() {
        assert_eq!(eval_line("", &Options::default()), Ok(None));
        assert_eq!(
            eval_line("?", &Options::default()),
            Err(Error::UnrecognizedInput)
        );
    }
}
