//! Display helpers shared by every front end.

/// `"main-course"` → `"Main Course"`.
pub fn format_category(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Total cooking time: `"45 mins"`, `"1h 15m"` or `"2h"`.
pub fn format_cooking_time(total: u32) -> String {
    if total < 60 {
        return format!("{total} mins");
    }
    let hours = total / 60;
    let minutes = total % 60;
    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}
