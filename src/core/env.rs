//! Dotenv codec.
//!
//! Parses and serializes `KEY="VALUE"` documents. Both the vault container
//! and the decrypted plaintext go through this module.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use tracing::trace;

use crate::core::types::EnvMap;
use crate::error::{CodecError, Result};

/// Parse a dotenv document.
///
/// Skips blank lines and `#` comments, accepts an optional `export` prefix
/// and either `=` or `:` as separator. Double-quoted values support escapes
/// and may span lines; single-quoted values are literal. Unquoted values are
/// trimmed and lose any trailing ` #` comment. Later definitions win.
///
/// # Errors
///
/// Returns `CodecError` on an invalid name, a missing separator or an
/// unterminated quote.
pub fn parse(src: &str) -> std::result::Result<EnvMap, CodecError> {
    let mut vars = EnvMap::new();
    let mut lines = src.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line_no, raw)) = lines.next() {
        let line = raw.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(line);

        let sep = line
            .find(|ch: char| ch == '=' || ch == ':')
            .ok_or(CodecError::MissingSeparator { line: line_no })?;
        let name = line[..sep].trim();
        if !is_valid_name(name) {
            return Err(CodecError::InvalidName {
                line: line_no,
                name: name.to_string(),
            });
        }

        let rest = line[sep + 1..].trim_start();
        let value = match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let mut body = rest[1..].to_string();
                let end = loop {
                    if let Some(end) = closing_quote(&body, quote) {
                        break end;
                    }
                    match lines.next() {
                        Some((_, next)) => {
                            body.push('\n');
                            body.push_str(next);
                        }
                        None => return Err(CodecError::UnterminatedQuote { line: line_no }),
                    }
                };
                if quote == '"' {
                    unescape_double_quoted(&body[..end])
                } else {
                    body[..end].to_string()
                }
            }
            _ => strip_inline_comment(rest).trim_end().to_string(),
        };

        vars.insert(name.to_string(), value);
    }

    trace!(vars = vars.len(), "parsed dotenv document");
    Ok(vars)
}

/// Parse a dotenv document from raw bytes.
///
/// # Errors
///
/// Returns `CodecError::InvalidUtf8` for non UTF-8 input, otherwise as
/// [`parse`].
pub fn parse_bytes(src: &[u8]) -> std::result::Result<EnvMap, CodecError> {
    let src = std::str::from_utf8(src).map_err(|_| CodecError::InvalidUtf8)?;
    parse(src)
}

/// Serialize variables as a dotenv document.
///
/// One `KEY="VALUE"` line per variable, sorted by name, joined with `\n`.
/// Integer values are written unquoted.
pub fn marshal(vars: &EnvMap) -> String {
    vars.iter()
        .map(|(key, value)| {
            if value.parse::<i64>().is_ok() {
                format!("{}={}", key, value)
            } else {
                format!("{}=\"{}\"", key, escape_env_value(value))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize variables and write them to `path`.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write(vars: &EnvMap, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut content = marshal(vars);
    content.push('\n');

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        // Also tighten permissions on a file that already existed.
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-'))
}

/// Byte offset of the closing quote in `body`, skipping escaped quotes in
/// double-quoted values.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, ch) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' && quote == '"' {
            escaped = true;
        } else if ch == quote {
            return Some(i);
        }
    }
    None
}

fn strip_inline_comment(value: &str) -> &str {
    match value.find(" #") {
        Some(i) => &value[..i],
        None if value.starts_with('#') => "",
        None => value,
    }
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('$') => out.push('$'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '$' => escaped.push_str("\\$"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
