/// Outcome of matching user input against entry ids.
#[derive(Debug, PartialEq)]
pub enum IdMatch {
    One(String),
    None,
    Ambiguous(usize),
}

/// Resolves `wanted` against the known ids. An exact match always wins;
/// otherwise a prefix has to be unique.
pub fn resolve_id<'a, I>(ids: I, wanted: &str) -> IdMatch
where
    I: IntoIterator<Item = &'a str>,
{
    let ids: Vec<&str> = ids.into_iter().collect();
    if ids.iter().any(|id| *id == wanted) {
        return IdMatch::One(wanted.to_string());
    }
    let mut hits = ids.iter().filter(|id| id.starts_with(wanted));
    match (hits.next(), hits.count()) {
        (Some(id), 0) => IdMatch::One((*id).to_string()),
        (Some(_), more) => IdMatch::Ambiguous(more + 1),
        (None, _) => IdMatch::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 3] = ["9b1c2f", "9b88aa", "41d7c0"];

    #[test]
    fn unique_prefix_resolves() {
        assert_eq!(resolve_id(IDS, "41"), IdMatch::One("41d7c0".to_string()));
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        assert_eq!(resolve_id(IDS, "9b"), IdMatch::Ambiguous(2));
    }

    #[test]
    fn exact_id_wins_over_prefix_matches() {
        let ids = ["9b1c", "9b1c2f"];
        assert_eq!(resolve_id(ids, "9b1c"), IdMatch::One("9b1c".to_string()));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(resolve_id(IDS, "zz"), IdMatch::None);
    }
}
