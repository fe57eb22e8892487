//! Answer-label extraction from raw oracle output.
//!
//! Reasoning models wrap deliberation in a `<think>` block and put the
//! verdict on the final line, so the label comes from the last non-empty
//! line after the close of any such block: "yes"/"yes." and "no"/"no."
//! map case-insensitively, a line containing "not sure" maps to
//! [`Answer::NotSure`], and everything else is [`Answer::Unclear`].
//! `Unclear` still spends a question; only a clean "I'm not sure" is free.

use whodis_types::game::Answer;

/// Reduce raw oracle output to a short answer label.
pub fn parse_answer(raw: &str) -> Answer {
    // Discard everything up to and including the last reasoning block.
    let tail = match raw.rfind("</think>") {
        Some(idx) => &raw[idx + "</think>".len()..],
        None => raw,
    };

    let Some(last_line) = tail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
    else {
        return Answer::Unclear;
    };

    let lowered = last_line.to_lowercase();
    match lowered.as_str() {
        "yes" | "yes." => Answer::Yes,
        "no" | "no." => Answer::No,
        _ if lowered.contains("not sure") => Answer::NotSure,
        _ => Answer::Unclear,
    }
}
