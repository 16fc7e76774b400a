//! Identifier sanitization.
//!
//! Layer names in a design document are free text. Three independent
//! naming conventions are derived from them, one per artifact kind:
//!
//! - [`component_name`] for TypeScript class names (`SubmitButton`)
//! - [`class_name`] for stylesheet selectors (`submit-button`)
//! - [`dash_case`] for file and directory names (`submit-button`)
//!
//! All three are total: any input, including the empty string, produces
//! a deterministic output without failing. They are not guaranteed to
//! agree with each other character for character.

/// Component-identifier form of a layer name.
///
/// Strips everything that is not an ASCII letter, digit, underscore,
/// hyphen, or whitespace, collapses whitespace/hyphen runs into single
/// hyphens, lowercases, then uppercases the first letter of every
/// hyphen-separated segment and joins the segments together.
///
/// The result may be empty or start with a digit; callers that need a
/// valid identifier guard against those cases themselves.
pub fn component_name(name: &str) -> String {
    let collapsed = collapse(&strip_disallowed(name), |ch| {
        ch.is_whitespace() || ch == '-'
    });
    collapsed
        .to_lowercase()
        .split('-')
        .map(capitalize_first)
        .collect()
}

/// Style-class form of a layer name.
///
/// Strips the same disallowed characters, collapses whitespace and
/// underscore runs into single hyphens, and lowercases. Hyphens already
/// present pass through untouched, runs included.
pub fn class_name(name: &str) -> String {
    collapse(&strip_disallowed(name), |ch| {
        ch.is_whitespace() || ch == '_'
    })
    .to_lowercase()
}

/// Dash-case form of a name.
///
/// Inserts a hyphen between a lowercase ASCII letter and a following
/// uppercase one, collapses whitespace runs into single hyphens, and
/// lowercases. Intended for names that are already identifiers, such as
/// the output of [`component_name`].
pub fn dash_case(name: &str) -> String {
    let mut broken = String::with_capacity(name.len());
    let mut prev_lower = false;
    for ch in name.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            broken.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        broken.push(ch);
    }
    collapse(&broken, char::is_whitespace).to_lowercase()
}

/// Drop every character outside letters, digits, `_`, `-`, and whitespace.
fn strip_disallowed(name: &str) -> String {
    name.chars()
        .filter(|&ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch.is_whitespace())
        .collect()
}

/// Replace every run of characters matching `class` with a single hyphen.
fn collapse(input: &str, class: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if class(ch) {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
