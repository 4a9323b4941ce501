//! Terminal output for substring search results

use memchr::memmem;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print the records matching `query`, one per line, with the first
/// occurrence of the query highlighted
pub fn print_matches(query: &str, matches: &[&String], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    // Query header with the match count
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(stdout, "{}", query)?;
    stdout.reset()?;
    writeln!(stdout, ": {} match(es)", matches.len())?;

    let folded_query = query.to_lowercase();
    for record in matches {
        print_match_line(&mut stdout, record, &folded_query)?;
    }

    Ok(())
}

/// Print one matching record with the query span highlighted
fn print_match_line(
    stdout: &mut StandardStream,
    record: &str,
    folded_query: &str,
) -> io::Result<()> {
    write!(stdout, "  ")?;

    // Case folding can shift byte offsets, so highlight only when the
    // folded span is still a valid slice of the original record
    let folded = record.to_lowercase();
    let span = memmem::find(folded.as_bytes(), folded_query.as_bytes()).and_then(|start| {
        let end = start + folded_query.len();
        record.get(start..end).map(|_| (start, end))
    });

    match span {
        Some((start, end)) => {
            write!(stdout, "{}", &record[..start])?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(stdout, "{}", &record[start..end])?;
            stdout.reset()?;
            writeln!(stdout, "{}", &record[end..])?;
        }
        None => {
            writeln!(stdout, "{}", record)?;
        }
    }

    Ok(())
}
