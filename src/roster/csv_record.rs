//! Minimal comma separated record codec (RFC 4180 quoting).

use super::RosterError;

const SEPARATOR: char = ',';
const QUOTE: char = '"';

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn encode_field(field: &str) -> String {
    let needs_quotes = field.contains(SEPARATOR)
        || field.contains(QUOTE)
        || field.contains('\n')
        || field.contains('\r');

    if needs_quotes {
        format!("\"{}\"", field.replace(QUOTE, "\"\""))
    } else {
        field.to_string()
    }
}

pub fn encode_record(fields: &[&str]) -> String {
    let encoded: Vec<String> = fields.iter().map(|f| encode_field(f)).collect();
    encoded.join(",")
}

/// Splits `text` into records. Blank lines produce records without fields.
pub fn parse_records(text: &str) -> Result<Vec<Record>, RosterError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut record_started = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            // Only a leading quote opens a quoted field. Elsewhere it is text.
            QUOTE if field.is_empty() => {
                in_quotes = true;
                record_started = true;
            }
            SEPARATOR => {
                fields.push(std::mem::take(&mut field));
                record_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if record_started || !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                }
                records.push(Record {
                    line: record_line,
                    fields: std::mem::take(&mut fields),
                });
                record_started = false;
                line += 1;
                record_line = line;
            }
            _ => {
                field.push(c);
                record_started = true;
            }
        }
    }

    if in_quotes {
        return Err(RosterError::Malformed {
            line: record_line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if record_started || !field.is_empty() {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}
