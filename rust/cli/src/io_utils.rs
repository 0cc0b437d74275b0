//! Line input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line from `stdin`, trimmed.
///
/// Returns `Ok(None)` on EOF.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}
