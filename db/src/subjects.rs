//! Storage encoding for subject lists.
//!
//! Profiles and chat rooms keep their subjects as a single comma-separated
//! text column ("Mathematics, Physics"), the format the profile form submits.

/// Splits a stored subject column into trimmed, non-empty entries.
///
/// Order is preserved and exact duplicates are dropped.
pub fn split(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let subject = part.trim();
        if subject.is_empty() || out.iter().any(|s| s == subject) {
            continue;
        }
        out.push(subject.to_owned());
    }
    out
}

/// Joins subjects back into the stored column format.
pub fn join<S: AsRef<str>>(subjects: &[S]) -> String {
    subjects
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
