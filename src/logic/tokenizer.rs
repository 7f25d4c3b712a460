//! Splits an argument string into a preamble and prefixed values.
//!
//! `1 r/Likes tea t/a t/b` with prefixes `r/`, `t/` gives preamble `1`,
//! `r/` → `["Likes tea"]`, `t/` → `["a", "b"]`. A prefix only counts at the
//! start of the string or right after whitespace, so `x/r/y` is plain text.

use std::collections::HashMap;

use super::error::ParseError;
use super::syntax::Prefix;

#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .map(|(pos, _)| pos)
                .filter(|&pos| is_token_start(args, pos))
                .map(move |pos| (pos, prefix))
                .collect::<Vec<_>>()
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    map
}

/// Split at the first occurrence of `prefix`. The tail is everything after
/// it, untokenized, so it may contain other prefixes as plain text.
pub fn split_at_prefix(args: &str, prefix: Prefix) -> (&str, Option<&str>) {
    let found = args
        .match_indices(prefix.as_str())
        .map(|(pos, _)| pos)
        .find(|&pos| is_token_start(args, pos));

    match found {
        Some(pos) => (&args[..pos], Some(&args[pos + prefix.as_str().len()..])),
        None => (args, None),
    }
}

fn is_token_start(args: &str, pos: usize) -> bool {
    args[..pos].chars().next_back().map_or(true, char::is_whitespace)
}
