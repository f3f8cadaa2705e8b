/// Parse an entity id from route or form text. Blank or non-numeric input
/// yields `None`.
pub fn parse_id(value: &str) -> Option<i64> {
    let t = value.trim();
    if t.is_empty() {
        None
    } else {
        t.parse::<i64>().ok()
    }
}
