//! Validation of environment overrides
//!
//! An invalid value never aborts: the configured value is kept and a
//! warning naming the variable, the accepted values and the nearest match
//! is written out.

use std::io::Write;

/// Suggestions further than this many edits away are not offered.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Accepted spellings for boolean environment variables.
pub const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

/// One environment variable with a closed set of accepted values.
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `raw`, or keep `current` and warn on stderr.
    pub fn parse<T, F>(&self, raw: &str, parser: F, current: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(raw, parser, current, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(&self, raw: &str, parser: F, current: T, warn: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(value) = parser(raw) {
            return value;
        }

        let hint = closest(&raw.to_ascii_lowercase(), self.valid_values.iter().copied())
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            warn,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, raw, hint
        );
        let _ = writeln!(warn, "Valid values: {}", self.valid_values.join(", "));
        current
    }
}

/// Nearest candidate within two edits, excluding exact matches.
pub fn closest<'c>(input: &str, candidates: impl IntoIterator<Item = &'c str>) -> Option<&'c str> {
    candidates
        .into_iter()
        .map(|c| (c, levenshtein(input, c)))
        .filter(|(_, d)| (1..=MAX_SUGGESTION_DISTANCE).contains(d))
        .min_by_key(|(_, d)| *d)
        .map(|(c, _)| c)
}

/// Edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Parse a boolean flag such as `CONTINUE_ON_TEST_FAILURE=1`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
