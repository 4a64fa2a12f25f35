use crate::error::{NlpError, NlpResult};
use crate::nlp::token::{PosTag, Token};

/// Number of non-data lines the parser prints after the token table
pub const DEFAULT_TRAILING_LINES: usize = 3;

/// Extract the token table from raw parser output
///
/// The parser front-loads an arbitrary number of log/header lines; the
/// table starts at the first line whose first tab-separated field is the
/// literal "1" and is followed by `trailing` non-data lines that are
/// discarded.
pub fn extract_table(raw: &str, trailing: usize) -> NlpResult<Vec<Token>> {
    let lines: Vec<&str> = raw.lines().collect();

    let start = lines
        .iter()
        .position(|line| line.split('\t').next() == Some("1"))
        .ok_or(NlpError::NoParseOutput)?;

    let data = &lines[start..];
    let end = data.len().saturating_sub(trailing);

    let mut tokens = Vec::with_capacity(end);
    for line in &data[..end] {
        tokens.push(parse_row(line)?);
    }

    Ok(tokens)
}

/// Parse one tab-separated table row into a Token
///
/// Columns, in order: level, word, (unused), pos, fine, (unused),
/// parent, group, (unused), (unused).
fn parse_row(line: &str) -> NlpResult<Token> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 8 {
        return Err(NlpError::MalformedRow(line.to_string()));
    }

    let level = fields[0]
        .parse::<u32>()
        .map_err(|_| NlpError::MalformedRow(line.to_string()))?;
    let parent = fields[6]
        .parse::<u32>()
        .map_err(|_| NlpError::MalformedRow(line.to_string()))?;

    Ok(Token {
        level,
        word: fields[1].to_string(),
        pos: PosTag::parse(fields[3]),
        fine: fields[4].to_string(),
        parent,
        group: fields[7].to_string(),
    })
}
