//! "Did you mean?" suggestions for unknown function names.
//!
//! Intrinsic names mix cases (`ddx`, `InterlockedAdd`), so candidates are
//! compared case-insensitively; a pure case slip has distance zero and wins.

use hlsl_intrinsics::Catalog;

/// Suggest the catalog name closest to `unknown`, if any is close enough.
pub fn suggest_function(catalog: &Catalog, unknown: &str) -> Option<String> {
    suggest_similar(unknown, catalog.names())
}

/// Levenshtein distance over lowercased characters.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single row; `diagonal` carries the previous row's value at j - 1.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Largest distance still worth suggesting for a name of `len` characters.
fn threshold(len: usize) -> usize {
    match len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

fn suggest_similar<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    let limit = threshold(name.chars().count());
    candidates
        .filter(|candidate| *candidate != name)
        .filter(|candidate| candidate.chars().count().abs_diff(name.chars().count()) <= limit)
        .map(|candidate| (edit_distance(name, candidate), candidate))
        .filter(|&(distance, _)| distance <= limit)
        // first minimum wins, so ties keep catalog order
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests;
