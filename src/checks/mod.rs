//! The check registry
//!
//! Each category module contributes an ordered list of `Check` definitions;
//! `registry()` assembles them in the fixed category order. The registry is
//! data: adding or removing a check never touches the scoring engine.
//!
//! Points per category (grand total 100):
//!
//! | Category           | Points |
//! |--------------------|--------|
//! | Safety             | 20     |
//! | Error Handling     | 15     |
//! | Session Continuity | 15     |
//! | Instructions       | 15     |
//! | Observability      | 15     |
//! | Credential Hygiene | 10     |
//! | Automation         | 10     |
//!
//! Predicates are conservative keyword/marker heuristics over free-text
//! configuration: adjacent evidence counts as a pass, since the inputs have
//! no reliable schema.

mod automation;
mod continuity;
mod credentials;
mod error_handling;
mod instructions;
mod observability;
mod safety;

use crate::models::Check;

/// The full ordered registry.
pub fn registry() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(safety::checks());
    checks.extend(error_handling::checks());
    checks.extend(continuity::checks());
    checks.extend(instructions::checks());
    checks.extend(observability::checks());
    checks.extend(credentials::checks());
    checks.extend(automation::checks());
    checks
}

/// First keyword from `needles` contained in `haystack`, if any.
///
/// `haystack` is expected to be lowercased already; needles are lowercase.
pub(crate) fn find_keyword<'a>(haystack: &str, needles: &[&'a str]) -> Option<&'a str> {
    needles.iter().find(|n| haystack.contains(**n)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CollectedInputs};
    use std::collections::BTreeMap;

    #[test]
    fn test_category_totals() {
        let mut totals: BTreeMap<Category, u32> = BTreeMap::new();
        for check in registry() {
            *totals.entry(check.category).or_insert(0) += check.weight;
        }
        assert_eq!(totals[&Category::Safety], 20);
        assert_eq!(totals[&Category::ErrorHandling], 15);
        assert_eq!(totals[&Category::SessionContinuity], 15);
        assert_eq!(totals[&Category::Instructions], 15);
        assert_eq!(totals[&Category::Observability], 15);
        assert_eq!(totals[&Category::CredentialHygiene], 10);
        assert_eq!(totals[&Category::Automation], 10);
        assert_eq!(totals.values().sum::<u32>(), 100);
    }

    #[test]
    fn test_registry_ordered_by_category() {
        let order: Vec<Category> = Category::ALL.to_vec();
        let mut last_idx = 0;
        for check in registry() {
            let idx = order.iter().position(|c| *c == check.category).unwrap();
            assert!(idx >= last_idx, "registry out of category order");
            last_idx = idx;
        }
    }

    #[test]
    fn test_every_detail_non_empty_on_empty_inputs() {
        let inputs = CollectedInputs::default();
        for check in registry() {
            let outcome = (check.predicate)(&inputs);
            assert!(
                !outcome.detail.is_empty(),
                "empty detail from {:?}",
                check.question
            );
        }
    }

    #[test]
    fn test_every_check_has_remediation_and_question() {
        for check in registry() {
            assert!(!check.question.is_empty());
            assert!(!check.remediation.is_empty());
            assert!(check.weight > 0);
        }
    }

    #[test]
    fn test_find_keyword() {
        assert_eq!(find_keyword("abc block def", &["deny", "block"]), Some("block"));
        assert_eq!(find_keyword("nothing here", &["deny", "block"]), None);
    }
}
