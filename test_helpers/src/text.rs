//! Text helpers for inline HCL documents.

/// Removes the indentation shared by every non-blank line and a single
/// leading newline.
///
/// Lets tests indent HCL literals with the surrounding code.
#[must_use]
pub fn dedent(value: &str) -> String {
    let body = value.strip_prefix('\n').unwrap_or(value);
    let margin = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or_default();
    body.lines()
        .map(|line| line.get(margin..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Makes line breaks and trailing whitespace visible in assertion output.
#[must_use]
pub fn visible(value: &str) -> String {
    value.replace(' ', "·").replace('\n', "⏎\n")
}
