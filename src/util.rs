//! Small text helpers shared by the question archetypes.

/// Replace each `{key}` in the template with its value.
/// No nesting or conditionals.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = tpl.to_string();
    for (k, v) in pairs {
        let needle = format!("{{{}}}", k);
        out = out.replace(&needle, v);
    }
    out
}

/// English word for small counts ("three"), digits above twelve
pub fn number_word(n: u32) -> String {
    const WORDS: [&str; 13] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve",
    ];
    WORDS
        .get(n as usize)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// "1 apple" / "3 apples"
pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template() {
        let out = fill_template("{name} has {a} {noun}.", &[("name", "Maya"), ("a", "3"), ("noun", "shells")]);
        assert_eq!(out, "Maya has 3 shells.");
        assert_eq!(fill_template("{missing} stays", &[]), "{missing} stays");
    }

    #[test]
    fn test_number_word() {
        assert_eq!(number_word(0), "zero");
        assert_eq!(number_word(8), "eight");
        assert_eq!(number_word(20), "20");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "hour", "hours"), "1 hour");
        assert_eq!(pluralize(2, "hour", "hours"), "2 hours");
    }
}
