/// Trim a posted form value; blank input counts as absent.
pub fn non_blank(value: Option<&String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}
