//! Category menu - the fixed content page

/// Feature categories in menu order
pub const CATEGORIES: [&str; 7] = [
    "help",
    "contacts",
    "expenses",
    "places",
    "tasks",
    "notes",
    "change password",
];

pub const EXIT_KEYWORD: &str = "bye";

/// Render the content page with 1-based indices and the exit keyword
pub fn render() -> String {
    let mut out = String::from("\nContent Page:\n------------------\n");
    for (i, name) in CATEGORIES.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, name));
    }
    out.push_str(&format!("To exit: {}", EXIT_KEYWORD));
    out
}
