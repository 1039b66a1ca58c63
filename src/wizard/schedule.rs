//! Best-effort split of free-form "when" text into date and time.

/// Separators tried in order; the first one present in the text wins.
const SEPARATORS: [&str; 3] = [",", " в ", " at "];

/// Split "сегодня, 19:00" or "завтра в 18:30" into `(date, time)`.
///
/// Without a known separator the whole text is the date and the time is
/// empty. Only the first occurrence is split on.
pub fn split_schedule(text: &str) -> (String, String) {
    let text = text.trim();
    SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .map(|(date, time)| (date.trim().to_string(), time.trim().to_string()))
        .unwrap_or_else(|| (text.to_string(), String::new()))
}
