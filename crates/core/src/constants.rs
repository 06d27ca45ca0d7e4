/// Display bucket for entries saved without a category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Example goal prompts offered to first-time users.
///
/// Fixed and compiled in; the client filters out prompts the user has
/// already adopted.
pub const SUGGESTED_GOALS: &[&str] = &[
    "Write 3 things daily",
    "Thank one person each week",
    "Notice something new on my walk",
    "Keep a gratitude photo a day",
    "Reflect before bed each night",
    "Start meetings with one appreciation",
];
