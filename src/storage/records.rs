//! Text formats of the credential and favorites files.
//!
//! Credential file: one record per line, `name<TAB>ciphertext`. Favorites file:
//! one entry name per line, most recently used first.

/// One parsed line of the credential file, borrowing from the file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialRecord<'a> {
    /// One-based line number.
    pub line: usize,
    /// Plaintext display name (text before the first tab).
    pub name: &'a str,
    /// Sealed secret (text after the first tab, up to the next tab).
    pub ciphertext: &'a str,
}

/// Parses credential records in file order.
///
/// Blank lines are skipped and a trailing `\r` is stripped. A line without a
/// tab yields a record with an empty ciphertext.
///
/// # Examples
///
/// ```
/// use passvault::storage::records::parse_credentials;
///
/// let records = parse_credentials("Amazon\tAAA\n\nBank\tBBB");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].name, "Bank");
/// assert_eq!(records[1].line, 3);
/// ```
#[must_use]
pub fn parse_credentials(contents: &str) -> Vec<CredentialRecord<'_>> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                return None;
            }
            let mut fields = line.split('\t');
            let name = fields.next().unwrap_or_default();
            let ciphertext = fields.next().unwrap_or_default();
            Some(CredentialRecord {
                line: i + 1,
                name,
                ciphertext,
            })
        })
        .collect()
}

/// Length in bytes of the longest line.
#[must_use]
pub fn longest_line(contents: &str) -> usize {
    contents.lines().map(str::len).max().unwrap_or(0)
}

/// Formats a credential line, including the trailing newline.
#[must_use]
pub fn format_credential(name: &str, token: &str) -> String {
    format!("{name}\t{token}\n")
}

/// Parses the favorites file into names, most recent first.
#[must_use]
pub fn parse_favorites(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(|raw| raw.strip_suffix('\r').unwrap_or(raw))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Serializes favorite names, one per line.
#[must_use]
pub fn format_favorites(names: &[&str]) -> String {
    names.iter().fold(String::new(), |mut out, name| {
        out.push_str(name);
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_missing_final_newline() {
        let records = parse_credentials("a\tx\r\nb\ty");
        assert_eq!(records[0].ciphertext, "x");
        assert_eq!(records[1].ciphertext, "y");
    }

    #[test]
    fn line_without_tab_has_empty_ciphertext() {
        let records = parse_credentials("lonely\n");
        assert_eq!(records[0].name, "lonely");
        assert_eq!(records[0].ciphertext, "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let records = parse_credentials("a\tx\tcomment\n");
        assert_eq!(records[0].ciphertext, "x");
    }

    #[test]
    fn favorites_format_and_parse() {
        let text = format_favorites(&["Bank", "Apple"]);
        assert_eq!(text, "Bank\nApple\n");
        assert_eq!(parse_favorites(&text), ["Bank", "Apple"]);
        assert!(format_favorites(&[]).is_empty());
    }

    #[test]
    fn longest_line_ignores_newlines() {
        assert_eq!(longest_line("ab\nabcd\n"), 4);
        assert_eq!(longest_line(""), 0);
    }
}
