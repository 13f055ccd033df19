use super::ast::{Entry, IniDocument, Section};
use crate::combinator::prelude::*;
use crate::combinator::text::trim;
use crate::combinator::{ParseError, Parser};

/// Parses an INI document, consuming the whole input.
///
/// Error positions are line numbers (zero-based). The parse fails on an
/// entry line before any section header, on a line without `=`, and on a
/// line with more than one `=`.
pub fn parse_ini(input: &str) -> Result<IniDocument, ParseError> {
    let mut sections: Vec<Section> = Vec::new();

    for (line_no, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = match_section_header(line) {
            tracing::trace!(target: "parsekit::ini", line_no, section = %name, "section opened");
            sections.push(Section {
                name,
                entries: Vec::new(),
            });
            continue;
        }

        let entry = parse_entry(line, line_no)?;
        match sections.last_mut() {
            Some(section) => section.entries.push(entry),
            None => {
                return Err(ParseError::Failure {
                    message: format!("entry `{line}` before any section header"),
                    position: line_no,
                })
            }
        }
    }

    Ok(IniDocument { sections })
}

/// `[name]` with optional whitespace around the brackets and the name.
fn section_header() -> impl Parser<char, String> {
    delimited(
        trim(equal('[')),
        map(
            many(satisfy(|c: &char| if *c != ']' { Some(*c) } else { None })),
            |cs| cs.into_iter().collect::<String>().trim().to_string(),
        ),
        trim(equal(']')),
    )
}

/// Recognizes a section header line. The header rule must consume the
/// entire line and the trimmed name must be non-empty; anything else is
/// treated as an entry line by the caller.
fn match_section_header(line: &str) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    match section_header().parse(&chars, 0) {
        Ok((pos, name)) if pos == chars.len() && !name.is_empty() => Some(name),
        _ => None,
    }
}

fn parse_entry(line: &str, line_no: usize) -> Result<Entry, ParseError> {
    let mut split = line.splitn(2, '=');
    let key = split.next().unwrap_or("");
    let value = match split.next() {
        Some(value) => value,
        None => {
            return Err(ParseError::Failure {
                message: format!("entry `{line}` has no `=`"),
                position: line_no,
            })
        }
    };
    if value.contains('=') {
        return Err(ParseError::Failure {
            message: format!("entry `{line}` has more than one `=`"),
            position: line_no,
        });
    }
    Ok(Entry {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header_rule() {
        let ok = match_section_header("[server]");
        assert_eq!(ok, Some("server".to_string()));

        // whitespace around brackets and name is tolerated
        assert_eq!(
            match_section_header("[ main section ]"),
            Some("main section".to_string())
        );

        // empty name, unclosed bracket, trailing text: not headers
        assert_eq!(match_section_header("[]"), None);
        assert_eq!(match_section_header("[ ]"), None);
        assert_eq!(match_section_header("[server"), None);
        assert_eq!(match_section_header("[server] extra"), None);
    }

    #[test]
    fn test_entry_before_section_fails() {
        let err = parse_ini("key=value").unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_exactly_one_equals() {
        assert!(parse_ini("[s]\nkeyvalue").is_err());
        assert!(parse_ini("[s]\nkey=va=lue").is_err());
        assert!(parse_ini("[s]\nkey=value").is_ok());
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let doc = parse_ini("[s]\nk=1\nk=2").unwrap();
        assert_eq!(doc.sections[0].entries.len(), 2);
        assert_eq!(doc.sections[0].entries[0].value, "1");
        assert_eq!(doc.sections[0].entries[1].value, "2");
    }
}
