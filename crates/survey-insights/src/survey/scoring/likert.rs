/// Likert labels and their weights. Matching is exact and case-sensitive.
pub const LIKERT_WEIGHTS: &[(&str, i32)] = &[
    ("Not familiar at all", 1),
    ("Somewhat familiar", 2),
    ("Neutral", 3),
    ("Fairly familiar", 4),
    ("Very familiar", 5),
    ("Never", 1),
    ("Rarely", 2),
    ("Occasionally", 3),
    ("Frequently", 4),
    ("Almost Always", 5),
    ("Not important at all", 1),
    ("Somewhat important", 2),
    ("Strongly Disagree", 1),
    ("Disagree", 2),
    ("Agree", 4),
    ("Strongly Agree", 5),
    ("Not likely at all", 1),
    ("Fairly likely", 4),
    ("Very likely", 5),
];

/// Weight for a label, or 0 when the label is not in the table.
pub fn likert_weight(label: &str) -> i32 {
    LIKERT_WEIGHTS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}
