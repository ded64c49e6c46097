/// Splits comma-separated tag input, dropping blank entries.
pub(crate) fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_tags("shorts, funny ,gameplay"),
            vec!["shorts", "funny", "gameplay"]
        );
    }

    #[test]
    fn drops_blank_pieces() {
        assert_eq!(parse_tags(" , a,,b, "), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn keeps_duplicates_and_order() {
        assert_eq!(parse_tags("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn join_reverses_parse() {
        let tags = parse_tags("league, educativo");
        assert_eq!(join_tags(&tags), "league, educativo");
    }
}
