use std::collections::BTreeMap;

/// Flatten submitted `(name, value)` pairs; a repeated name keeps its last value.
pub fn collect_fields<I>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn collects_named_fields() {
        let fields = collect_fields(pairs(&[("name", "A"), ("email", "a@b.com"), ("message", "hi")]));
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["name"], "A");
        assert_eq!(fields["email"], "a@b.com");
        assert_eq!(fields["message"], "hi");
    }

    #[test]
    fn last_duplicate_wins() {
        let fields = collect_fields(pairs(&[("topic", "one"), ("topic", "two")]));
        assert_eq!(fields["topic"], "two");
    }
}
