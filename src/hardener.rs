//! Password hardener - suggests a stronger variant by character substitution.

use secrecy::{ExposeSecret, SecretString};

const PREFIX: &str = "Sec#";
const SUFFIX: &str = "99";

fn substitute(c: char) -> char {
    match c {
        'a' => '@',
        'e' => '3',
        'i' => '1',
        'o' => '0',
        's' => '$',
        'l' => '!',
        other => other,
    }
}

/// Returns a hardened suggestion for `password`, or `None` when it is empty.
///
/// Lowercases the input, swaps look-alike characters (`a`->`@`, `e`->`3`,
/// `i`->`1`, `o`->`0`, `s`->`$`, `l`->`!`), wraps it in `Sec#`...`99` and
/// uppercases the first character. The result is a suggestion only and is
/// not re-scored.
pub fn harden_password(password: &SecretString) -> Option<SecretString> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }

    let body: String = pwd.to_lowercase().chars().map(substitute).collect();
    let wrapped = format!("{PREFIX}{body}{SUFFIX}");

    let mut chars = wrapped.chars();
    let hardened: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    Some(SecretString::new(hardened.into()))
}
