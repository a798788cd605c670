//! Narrowing a name search to the one entity a mutation acts on.

use qtag_core::{HostAsset, MatchPolicy, Tag};

use crate::error::WorkflowError;

/// Something a name search can return.
pub trait Named {
    fn id(&self) -> u64;
    fn name(&self) -> &str;
}

impl Named for HostAsset {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Tag {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Pick one candidate out of a search result according to `policy`.
///
/// `Ok(None)` when there are no candidates. Under [`MatchPolicy::Unique`] a
/// multi-entry result is only accepted when exactly one candidate's name
/// equals the trimmed `key` (ASCII case-insensitive); otherwise it is
/// [`WorkflowError::Ambiguous`].
pub fn pick<E: Named>(
    mut candidates: Vec<E>,
    key: &str,
    policy: MatchPolicy,
    entity: &'static str,
) -> Result<Option<E>, WorkflowError> {
    if candidates.len() <= 1 {
        return Ok(candidates.pop());
    }

    match policy {
        MatchPolicy::First => {
            tracing::warn!(
                entity,
                key,
                count = candidates.len(),
                chosen = candidates[0].id(),
                "several matches, using the first"
            );
            Ok(Some(candidates.swap_remove(0)))
        }
        MatchPolicy::Unique => {
            let wanted = key.trim();
            let exact = candidates
                .iter()
                .enumerate()
                .filter(|(_, c)| c.name().eq_ignore_ascii_case(wanted))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();

            if let [index] = exact[..] {
                tracing::debug!(entity, key, "several matches, one exact name match");
                return Ok(Some(candidates.swap_remove(index)));
            }

            Err(WorkflowError::Ambiguous {
                entity,
                key: key.to_string(),
                matches: candidates
                    .iter()
                    .map(|c| format!("{} (id {})", c.name(), c.id()))
                    .collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tag(id: u64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_is_none_under_both_policies() {
        for policy in [MatchPolicy::Unique, MatchPolicy::First] {
            assert_eq!(pick(Vec::<Tag>::new(), "x", policy, "tag").unwrap(), None);
        }
    }

    #[test]
    fn single_candidate_is_taken_even_if_name_differs() {
        let picked = pick(vec![tag(7, "Servers - DMZ")], "DMZ", MatchPolicy::Unique, "tag");
        assert_eq!(picked.unwrap(), Some(tag(7, "Servers - DMZ")));
    }

    #[test]
    fn first_policy_takes_first() {
        let picked = pick(
            vec![tag(7, "DMZ old"), tag(8, "DMZ")],
            "DMZ",
            MatchPolicy::First,
            "tag",
        );
        assert_eq!(picked.unwrap(), Some(tag(7, "DMZ old")));
    }

    #[test]
    fn unique_policy_prefers_single_exact_match() {
        let picked = pick(
            vec![tag(7, "DMZ old"), tag(8, "dmz"), tag(9, "DMZ-2")],
            "DMZ",
            MatchPolicy::Unique,
            "tag",
        );
        assert_eq!(picked.unwrap(), Some(tag(8, "dmz")));
    }

    #[test]
    fn exact_match_ignores_case_and_surrounding_spaces() {
        let picked = pick(
            vec![tag(7, "Web Servers"), tag(8, "web servers - old")],
            "  WEB SERVERS ",
            MatchPolicy::Unique,
            "tag",
        );
        assert_eq!(picked.unwrap(), Some(tag(7, "Web Servers")));
    }

    #[test]
    fn unique_policy_rejects_ambiguous_result() {
        let err = pick(
            vec![tag(7, "DMZ old"), tag(9, "DMZ-2")],
            "DMZ",
            MatchPolicy::Unique,
            "tag",
        )
        .unwrap_err();

        match err {
            WorkflowError::Ambiguous {
                entity,
                key,
                matches,
            } => {
                assert_eq!(entity, "tag");
                assert_eq!(key, "DMZ");
                assert_eq!(matches, vec!["DMZ old (id 7)", "DMZ-2 (id 9)"]);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }
}
