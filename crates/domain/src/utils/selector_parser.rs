//! Compact filter and sort expressions
//!
//! Translates command-line shorthand into selector conditions and order
//! specs:
//!
//! | Token | Operator                |
//! |-------|-------------------------|
//! | `=`   | `EQUALS`                |
//! | `~`   | `CONTAINS`              |
//! | `!~`  | `NOT_CONTAINS`          |
//! | `@`   | `IN` (comma-separated)  |
//! | `>`   | `GREATER_THAN`          |
//! | `<`   | `LESS_THAN`             |
//! | `>=`  | `GREATER_THAN_OR_EQUAL` |
//! | `<=`  | `LESS_THAN_OR_EQUAL`    |
//!
//! Sort expressions are `field` or `field:direction`.

use thiserror::Error;

use crate::types::selector::{Condition, Operator, OrderSpec, SortOrder};

/// Operator tokens in match priority order. Two-character tokens come
/// before their one-character prefixes.
const OPERATOR_TOKENS: [(&str, Operator); 8] = [
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("!~", Operator::NotContains),
    ("=", Operator::Equals),
    ("~", Operator::Contains),
    ("@", Operator::In),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
];

/// A filter expression with no operator after a non-empty field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid filter expression '{expression}': expected <field><op><value> with op one of >= <= !~ = ~ @ > <")]
pub struct FilterParseError {
    pub expression: String,
}

/// Parse a single filter expression.
///
/// For each candidate token in priority order, the first occurrence is
/// located; the token is accepted only if it sits after a non-empty field.
///
/// # Examples
///
/// ```
/// use searchads_domain::{parse_filter, Operator};
///
/// let condition = parse_filter("id@1,2,3").unwrap();
/// assert_eq!(condition.operator, Operator::In);
/// assert_eq!(condition.values, vec!["1", "2", "3"]);
///
/// assert!(parse_filter("=ENABLED").is_err());
/// ```
///
/// # Errors
/// Returns `FilterParseError` when no token matches after position 0.
pub fn parse_filter(expression: &str) -> Result<Condition, FilterParseError> {
    for (token, operator) in OPERATOR_TOKENS {
        let Some(idx) = expression.find(token) else {
            continue;
        };
        if idx == 0 {
            continue;
        }

        let field = &expression[..idx];
        let value = &expression[idx + token.len()..];
        let values = if operator == Operator::In {
            value.split(',').map(str::to_string).collect()
        } else {
            vec![value.to_string()]
        };
        return Ok(Condition::new(field, operator, values));
    }

    Err(FilterParseError { expression: expression.to_string() })
}

/// Parse filter expressions, dropping the ones that don't parse.
///
/// Skipped expressions are reported at `warn` level.
pub fn parse_filters<S: AsRef<str>>(expressions: &[S]) -> Vec<Condition> {
    expressions
        .iter()
        .filter_map(|expression| match parse_filter(expression.as_ref()) {
            Ok(condition) => Some(condition),
            Err(err) => {
                tracing::warn!(expression = %err.expression, "skipping unparseable filter");
                None
            }
        })
        .collect()
}

/// Parse filter expressions, failing on the first one that doesn't parse.
///
/// # Errors
/// Returns the `FilterParseError` of the first malformed expression.
pub fn try_parse_filters<S: AsRef<str>>(
    expressions: &[S],
) -> Result<Vec<Condition>, FilterParseError> {
    expressions.iter().map(|expression| parse_filter(expression.as_ref())).collect()
}

/// Parse a sort expression. Never fails: an absent or unknown direction
/// means ascending.
pub fn parse_sort(expression: &str) -> OrderSpec {
    match expression.split_once(':') {
        Some((field, direction)) => OrderSpec::new(field, parse_direction(direction)),
        None => OrderSpec::new(expression, SortOrder::Ascending),
    }
}

pub fn parse_sorts<S: AsRef<str>>(expressions: &[S]) -> Vec<OrderSpec> {
    expressions.iter().map(|expression| parse_sort(expression.as_ref())).collect()
}

fn parse_direction(direction: &str) -> SortOrder {
    if direction.eq_ignore_ascii_case("desc") || direction.eq_ignore_ascii_case("descending") {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}
