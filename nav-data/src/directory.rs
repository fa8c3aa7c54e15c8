use crate::types::Cottage;

/// Result message shown when a query matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No matching cottage found.";

/// The ordered collection of cottages the map can search over.
///
/// A search never mutates the directory it runs against; it derives a new one
/// with every `is_active` flag recomputed and hands it back in the outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    cottages: Vec<Cottage>,
}

/// Everything a single search invocation produced: the replacement directory,
/// whether anything matched, and the user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub directory: Directory,
    pub matched: bool,
    pub message: String,
}

impl Directory {
    pub fn new(cottages: Vec<Cottage>) -> Self {
        Self { cottages }
    }

    pub fn cottages(&self) -> &[Cottage] {
        &self.cottages
    }

    pub fn len(&self) -> usize {
        self.cottages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cottages.is_empty()
    }

    /// The cottage highlighted by the most recent search, if any. With
    /// duplicate names in the data more than one cottage can be active;
    /// callers center on the first.
    pub fn first_active(&self) -> Option<&Cottage> {
        self.cottages.iter().find(|c| c.is_active)
    }

    /// Matches `query` against every cottage's number and name.
    ///
    /// The query is trimmed and uppercased, then tested against each cottage
    /// independently. Each match overwrites the result message, so with
    /// duplicate names the last match wins the message while every match
    /// stays active in the returned directory.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let normalized = query.trim().to_uppercase();
        let mut matched = false;
        let mut message = String::new();

        let cottages = self
            .cottages
            .iter()
            .map(|cottage| {
                let hit = cottage.number.to_string() == normalized
                    || cottage.name.to_uppercase() == normalized;
                if hit {
                    matched = true;
                    message = cottage.label();
                }
                Cottage {
                    is_active: hit,
                    ..cottage.clone()
                }
            })
            .collect();

        if !matched {
            message = NO_MATCH_MESSAGE.to_string();
        }

        SearchOutcome {
            directory: Directory { cottages },
            matched,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarkerIcon;

    fn cottage(number: u32, name: &str, lat: f64, lng: f64) -> Cottage {
        Cottage {
            number,
            name: name.to_string(),
            lat,
            lng,
            icon: MarkerIcon::Cottage,
            is_active: false,
        }
    }

    fn sample_directory() -> Directory {
        Directory::new(vec![
            cottage(12, "Birch", 56.6161, -3.8625),
            cottage(14, "Rowan", 56.6158, -3.8619),
            cottage(21, "Heather", 56.6154, -3.8630),
        ])
    }

    #[test]
    fn test_search_by_number() {
        let outcome = sample_directory().search("12");

        assert!(outcome.matched);
        assert_eq!(outcome.message, "Cottage 12 - Birch");
        let actives: Vec<_> = outcome
            .directory
            .cottages()
            .iter()
            .filter(|c| c.is_active)
            .collect();
        assert_eq!(actives.len(), 1);
        assert_eq!(actives[0].number, 12);
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let by_exact = sample_directory().search("Birch");
        let by_lower = sample_directory().search("birch");
        let by_upper = sample_directory().search("BIRCH");

        assert_eq!(by_exact, by_lower);
        assert_eq!(by_exact, by_upper);
        assert!(by_exact.matched);
        assert_eq!(by_exact.message, "Cottage 12 - Birch");
    }

    #[test]
    fn test_search_trims_whitespace() {
        let outcome = sample_directory().search("  rowan  ");

        assert!(outcome.matched);
        assert_eq!(outcome.message, "Cottage 14 - Rowan");
        assert_eq!(outcome.directory.first_active().map(|c| c.number), Some(14));
    }

    #[test]
    fn test_no_match_deactivates_everything() {
        let directory = sample_directory();
        let primed = directory.search("heather").directory;
        let outcome = primed.search("no-such-query");

        assert!(!outcome.matched);
        assert_eq!(outcome.message, NO_MATCH_MESSAGE);
        assert!(outcome.directory.cottages().iter().all(|c| !c.is_active));
        assert!(outcome.directory.first_active().is_none());
    }

    #[test]
    fn test_search_does_not_mutate_receiver() {
        let directory = sample_directory();
        let _ = directory.search("12");

        assert!(directory.cottages().iter().all(|c| !c.is_active));
    }

    #[test]
    fn test_search_is_idempotent() {
        let directory = sample_directory();
        let first = directory.search("21");
        let second = directory.search("21");

        assert_eq!(first, second);

        // Running again over the derived directory also agrees
        let third = first.directory.search("21");
        assert_eq!(first.directory, third.directory);
        assert_eq!(first.message, third.message);
    }

    #[test]
    fn test_new_search_replaces_previous_activation() {
        let outcome = sample_directory().search("12");
        let next = outcome.directory.search("Rowan");

        assert_eq!(next.directory.first_active().map(|c| c.number), Some(14));
        let active_count = next
            .directory
            .cottages()
            .iter()
            .filter(|c| c.is_active)
            .count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_duplicate_names_leave_every_match_active() {
        let directory = Directory::new(vec![
            cottage(1, "Larch", 56.0, -3.0),
            cottage(2, "Larch", 56.1, -3.1),
            cottage(3, "Aspen", 56.2, -3.2),
        ]);

        let outcome = directory.search("larch");

        let actives: Vec<_> = outcome
            .directory
            .cottages()
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.number)
            .collect();
        assert_eq!(actives, vec![1, 2]);
        // Each match overwrites the message, so the last one wins
        assert_eq!(outcome.message, "Cottage 2 - Larch");
        // Centering still picks the first active
        assert_eq!(outcome.directory.first_active().map(|c| c.number), Some(1));
    }

    #[test]
    fn test_empty_directory_matches_nothing() {
        let outcome = Directory::default().search("12");

        assert!(!outcome.matched);
        assert_eq!(outcome.message, NO_MATCH_MESSAGE);
        assert!(outcome.directory.is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let outcome = sample_directory().search("   ");

        assert!(!outcome.matched);
        assert_eq!(outcome.message, NO_MATCH_MESSAGE);
    }
}
