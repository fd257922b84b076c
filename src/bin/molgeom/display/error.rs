use std::io::{self, Write};

use anyhow::Error;
use molgeom::ModelError;
use molgeom::io::{Error as IoError, Format};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<IoError>() {
        io_hints(io_err, &mut hints);
    } else if let Some(model_err) = err.downcast_ref::<ModelError>() {
        model_hints(model_err, &mut hints);
    } else {
        fallback_hints(err, &mut hints);
    }

    hints
}

fn io_hints(err: &IoError, hints: &mut Vec<String>) {
    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { format, line, .. } => {
            hints.push(format!("Check line {} of the {} input", line, format));
            format_hints(*format, hints);
        }

        IoError::MalformedInput { format, line, .. } => {
            hints.push(format!(
                "The {} input is truncated or malformed near line {}",
                format, line
            ));
            format_hints(*format, hints);
        }

        IoError::Toml(_) => {
            hints.push("The TOML description has invalid syntax or keys".into());
            hints.push("Expected keys: molecule, elements, atoms".into());
        }

        IoError::Model(model_err) => model_hints(model_err, hints),
    }
}

fn model_hints(err: &ModelError, hints: &mut Vec<String>) {
    match err {
        ModelError::UnknownElement { atom, symbol } => {
            hints.push(format!(
                "Atom {} is declared as '{}', which is missing from the element list",
                atom, symbol
            ));
            hints.push("Add the symbol to elem_list and raise elem_num".into());
        }
    }
}

fn format_hints(format: Format, hints: &mut Vec<String>) {
    match format {
        Format::Description => {
            hints.push("Declare elem_num before elem_list and atom_num before atom_list".into());
            hints.push("Lines starting with '#' or whitespace are ignored".into());
        }
        Format::DescriptionToml => {
            hints.push("Pass --desc-format kv if the file is not TOML".into());
        }
        Format::Record => {
            hints.push("Each record is a count line, an energy line and one line per atom".into());
            hints.push("Verify the description lists as many atoms as each record".into());
        }
        Format::Coordinates => {
            hints.push("Each atom needs a label followed by three coordinates".into());
        }
    }
}

fn std_io_hints(source: &io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("The input is not valid UTF-8 text".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("The output consumer exited early (e.g. `head`)".into());
        }
        _ => {
            hints.push("Check file paths, permissions and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let text = err
        .chain()
        .map(|c| c.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("stdin") || text.contains("terminal") {
        hints.push("Provide records via -i/--input or pipe them to stdin".into());
    } else if text.contains("no such file") || text.contains("not found") {
        hints.push("Check that the file path is correct".into());
    } else if text.contains("threshold") {
        hints.push("Use a non-negative --threshold".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn malformed_record_hints_mention_line_and_layout() {
        let err: Error = IoError::malformed(Format::Record, 12, "short record").into();
        let hints = hints_for(&err);
        assert!(hints[0].contains("line 12"));
        assert!(hints.iter().any(|h| h.contains("count line")));
    }

    #[test]
    fn unknown_element_hints_through_context() {
        let err = Error::from(IoError::from(ModelError::unknown_element(3, "N")))
            .context("Invalid molecule description in water.in");
        let hints = hints_for(&err);
        assert!(hints[0].contains("'N'"));
    }

    #[test]
    fn plain_errors_fall_back_to_message_hints() {
        let err = anyhow!("No input file specified and stdin is a terminal");
        assert_eq!(hints_for(&err).len(), 1);
        assert!(hints_for(&anyhow!("something else")).is_empty());
    }
}
