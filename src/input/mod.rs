//! Input parsing and validation
//!
//! Array input arrives as one of three formats, mirroring what the upload
//! layer produces:
//!
//! - plain comma-separated text: `5, 3, 8, 1`
//! - a JSON array: `[5, 3, 8, 1]` or `["b", "a", "c"]`
//! - CSV, flattened row-by-row into one array
//!
//! Tokens must be alphanumeric (`^[a-zA-Z0-9]+$`), except that numeric tokens
//! may carry a leading minus sign. An array is homogeneous: if every token
//! parses as an integer the array is numeric, otherwise every token is kept
//! as a word and compared lexicographically.
//!
//! All validation happens here, before any runner executes — a run either
//! starts with clean input or not at all.

use crate::runner::errors::RunnerError;
use crate::trace::Element;

/// The accepted array input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated text
    Plain,
    /// A JSON array of numbers or strings
    Json,
    /// CSV, all rows flattened into one array
    Csv,
}

impl InputFormat {
    /// Pick the format from a file extension (`.json`, `.csv`, else plain).
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".json") {
            InputFormat::Json
        } else if lower.ends_with(".csv") {
            InputFormat::Csv
        } else {
            InputFormat::Plain
        }
    }
}

/// One operation in a tree-runner input script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    Insert(i64),
    Delete(i64),
}

/// Split raw input text into trimmed tokens according to the format.
fn tokens(text: &str, format: InputFormat) -> Result<Vec<String>, RunnerError> {
    let toks: Vec<String> = match format {
        InputFormat::Plain => text
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        InputFormat::Csv => text
            .lines()
            .flat_map(|line| line.split(','))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|e| RunnerError::InvalidJson {
                    message: e.to_string(),
                })?;
            let array = value.as_array().ok_or_else(|| RunnerError::InvalidJson {
                message: "expected a JSON array".to_string(),
            })?;
            let mut toks = Vec::with_capacity(array.len());
            for item in array {
                match item {
                    serde_json::Value::Number(n) => {
                        let n = n.as_i64().ok_or_else(|| RunnerError::InvalidJson {
                            message: format!("expected an integer, got {}", n),
                        })?;
                        toks.push(n.to_string());
                    }
                    serde_json::Value::String(s) => toks.push(s.trim().to_string()),
                    other => {
                        return Err(RunnerError::InvalidJson {
                            message: format!("expected numbers or strings, got {}", other),
                        });
                    }
                }
            }
            toks
        }
    };

    if toks.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    Ok(toks)
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse an array of comparable elements.
///
/// The array is numeric if every token parses as an integer; otherwise every
/// token must be alphanumeric and is kept as a word.
pub fn parse_elements(text: &str, format: InputFormat) -> Result<Vec<Element>, RunnerError> {
    let toks = tokens(text, format)?;

    let ints: Option<Vec<i64>> = toks.iter().map(|t| t.parse().ok()).collect();
    if let Some(ints) = ints {
        return Ok(ints.into_iter().map(Element::Int).collect());
    }

    let mut elems = Vec::with_capacity(toks.len());
    for t in toks {
        if !is_alphanumeric(&t) {
            return Err(RunnerError::InvalidToken { token: t });
        }
        elems.push(Element::Word(t));
    }
    Ok(elems)
}

/// Parse a numeric-only array (binary/interpolation search, counting sort,
/// tree values).
pub fn parse_numbers(text: &str, format: InputFormat) -> Result<Vec<i64>, RunnerError> {
    let toks = tokens(text, format)?;
    let mut nums = Vec::with_capacity(toks.len());
    for t in toks {
        let n = t
            .parse::<i64>()
            .map_err(|_| RunnerError::NonNumeric { token: t })?;
        nums.push(n);
    }
    Ok(nums)
}

/// Parse a single search target, matching the element kind of the array.
pub fn parse_target(text: &str) -> Result<Element, RunnerError> {
    let t = text.trim();
    if t.is_empty() {
        return Err(RunnerError::EmptyTarget);
    }
    if let Ok(n) = t.parse::<i64>() {
        return Ok(Element::Int(n));
    }
    if !is_alphanumeric(t) {
        return Err(RunnerError::InvalidToken {
            token: t.to_string(),
        });
    }
    Ok(Element::Word(t.to_string()))
}

/// Parse a numeric search target.
pub fn parse_numeric_target(text: &str) -> Result<i64, RunnerError> {
    let t = text.trim();
    if t.is_empty() {
        return Err(RunnerError::EmptyTarget);
    }
    t.parse::<i64>().map_err(|_| RunnerError::NonNumeric {
        token: t.to_string(),
    })
}

/// Parse a tree operation script.
///
/// Comma-separated entries; a plain integer inserts, a `del <n>` (or
/// `delete <n>`) entry deletes: `10, 20, 30, del 20`.
pub fn parse_tree_ops(text: &str) -> Result<Vec<TreeOp>, RunnerError> {
    let mut ops = Vec::new();
    for entry in text.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (is_delete, value_text) = if let Some(rest) = entry.strip_prefix("delete") {
            (true, rest.trim())
        } else if let Some(rest) = entry.strip_prefix("del") {
            (true, rest.trim())
        } else {
            (false, entry)
        };
        let value = value_text
            .parse::<i64>()
            .map_err(|_| RunnerError::NonNumeric {
                token: entry.to_string(),
            })?;
        ops.push(if is_delete {
            TreeOp::Delete(value)
        } else {
            TreeOp::Insert(value)
        });
    }
    if ops.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numeric_array() {
        let elems = parse_elements("5, 3, 8, 1", InputFormat::Plain).unwrap();
        assert_eq!(
            elems,
            vec![
                Element::Int(5),
                Element::Int(3),
                Element::Int(8),
                Element::Int(1)
            ]
        );
    }

    #[test]
    fn plain_word_array() {
        let elems = parse_elements("b, a, c", InputFormat::Plain).unwrap();
        assert_eq!(
            elems,
            vec![
                Element::Word("b".into()),
                Element::Word("a".into()),
                Element::Word("c".into())
            ]
        );
    }

    #[test]
    fn json_array() {
        let elems = parse_elements("[1, 2, 3]", InputFormat::Json).unwrap();
        assert_eq!(
            elems,
            vec![Element::Int(1), Element::Int(2), Element::Int(3)]
        );
        let words = parse_elements(r#"["x", "y"]"#, InputFormat::Json).unwrap();
        assert_eq!(
            words,
            vec![Element::Word("x".into()), Element::Word("y".into())]
        );
    }

    #[test]
    fn json_must_be_array() {
        let err = parse_elements(r#"{"a": 1}"#, InputFormat::Json).unwrap_err();
        assert!(matches!(err, RunnerError::InvalidJson { .. }));
    }

    #[test]
    fn csv_flattens_rows() {
        let elems = parse_elements("1,2\n3,4\n", InputFormat::Csv).unwrap();
        assert_eq!(elems.len(), 4);
        assert_eq!(elems[2], Element::Int(3));
    }

    #[test]
    fn rejects_non_alphanumeric_token() {
        let err = parse_elements("a, b!, c", InputFormat::Plain).unwrap_err();
        assert_eq!(
            err,
            RunnerError::InvalidToken {
                token: "b!".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            parse_elements("  ", InputFormat::Plain).unwrap_err(),
            RunnerError::EmptyInput
        );
        assert_eq!(parse_target("").unwrap_err(), RunnerError::EmptyTarget);
    }

    #[test]
    fn numeric_parsing_allows_negatives() {
        let nums = parse_numbers("-3, 5", InputFormat::Plain).unwrap();
        assert_eq!(nums, vec![-3, 5]);
        let err = parse_numbers("3, x", InputFormat::Plain).unwrap_err();
        assert!(matches!(err, RunnerError::NonNumeric { .. }));
    }

    #[test]
    fn tree_op_script() {
        let ops = parse_tree_ops("10, 20, del 10, delete 20").unwrap();
        assert_eq!(
            ops,
            vec![
                TreeOp::Insert(10),
                TreeOp::Insert(20),
                TreeOp::Delete(10),
                TreeOp::Delete(20)
            ]
        );
    }
}
