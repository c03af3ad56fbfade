//! Clause tokenizer.
//!
//! A single alternation pattern splits a clause into tokens. Alternatives are
//! tried left to right at each position, so longer and more specific forms
//! must come first: `>=` before `>`, `2a` before `2`, `40h` before `40`.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // two-character operators
        r"!=|>=|<=",
        // one-character operators
        r"|=|>|<",
        // sran sublevels: 1a, 02b, 2-, 1+, 2弱, 1強
        r"|0?[12][a\-弱b+強]",
        // level with emh bucket: 40h
        r"|\d{1,2}[emh]",
        // unsigned decimals with a fraction: 12.5
        r"|\d+\.\d*",
        // folder tags and digit pairs: cs, 26, 05
        r"|(?:cs|\d{2})+",
        // words with optional flag prefix: holds, -holds, +omnimix, !ura
        r"|[+!\-]?[a-z]+",
        // signed decimals
        r"|[+\-\d.]+",
    ))
    .expect("valid token pattern")
});

/// Split one clause into tokens.
///
/// The clause is expected to be lower-cased already. Text the pattern does
/// not recognise is kept as a token of its own, so it fails grammar dispatch.
pub fn tokenize(clause: &str) -> Vec<String> {
    let spaced = TOKEN.replace_all(clause, " $0 ");
    spaced.split_whitespace().map(str::to_string).collect()
}
