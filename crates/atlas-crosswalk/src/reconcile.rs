//! Applying a crosswalk to a ToposText reference table

use crate::crosswalk::Crosswalk;
use crate::table::ReferenceTable;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Outcome of [`apply_crosswalk`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Ids replaced by their crosswalk value
    pub switched: usize,

    /// Ids left untouched because no non-null mapping exists
    pub unmatched: usize,
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Made {} switches. No crosswalk entry for {} ids.",
            self.switched, self.unmatched
        )
    }
}

/// Replace ToposText ids with their crosswalk counterparts, in place
///
/// An id without a non-null mapping stays as it is, so the table may mix
/// Pleiades and ToposText ids afterwards. The `&mut` borrow means no other
/// caller can observe or reconcile the same table concurrently.
pub fn apply_crosswalk(refs: &mut ReferenceTable, crosswalk: &Crosswalk) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for ids in refs.values_mut() {
        for id in ids.iter_mut() {
            match crosswalk.get(id.as_str()) {
                Some(Some(mapped)) => {
                    *id = mapped.clone();
                    report.switched += 1;
                }
                _ => report.unmatched += 1,
            }
        }
    }

    info!("{}", report);
    report
}

/// Reorganize title → ids into id → titles
///
/// Titles are listed in table order and are not deduplicated: an id cited
/// twice by one document lists that document twice.
pub fn invert_to_id_keyed(refs: &ReferenceTable) -> BTreeMap<String, Vec<String>> {
    let mut inverted: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (title, ids) in refs {
        for id in ids {
            inverted.entry(id.clone()).or_default().push(title.clone());
        }
    }
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &[&str])]) -> ReferenceTable {
        rows.iter()
            .map(|(title, ids)| (title.to_string(), ids.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_apply_crosswalk_counts() {
        let mut refs = table(&[("DocA", &["123", "999"])]);
        let crosswalk: Crosswalk = [("123".to_string(), Some("456".to_string()))].into_iter().collect();

        let report = apply_crosswalk(&mut refs, &crosswalk);

        assert_eq!(refs["DocA"], vec!["456", "999"]);
        assert_eq!(report, ReconcileReport { switched: 1, unmatched: 1 });
    }

    #[test]
    fn test_null_mapping_is_unmatched() {
        let mut refs = table(&[("DocA", &["123"])]);
        let crosswalk: Crosswalk = [("123".to_string(), None)].into_iter().collect();

        let report = apply_crosswalk(&mut refs, &crosswalk);

        assert_eq!(refs["DocA"], vec!["123"]);
        assert_eq!(report.switched, 0);
        assert_eq!(report.unmatched, 1);
    }

    #[test]
    fn test_report_message() {
        let report = ReconcileReport { switched: 3, unmatched: 2 };
        assert_eq!(
            report.to_string(),
            "Made 3 switches. No crosswalk entry for 2 ids."
        );
    }

    #[test]
    fn test_report_message_for_reverse_crosswalk() {
        let mut refs = table(&[("DocA", &["579885", "580109"])]);
        let crosswalk: Crosswalk = [("579885".to_string(), Some("379237UAth".to_string()))]
            .into_iter()
            .collect();

        let message = apply_crosswalk(&mut refs, &crosswalk).to_string();

        assert_eq!(refs["DocA"], vec!["379237UAth", "580109"]);
        assert_eq!(message, "Made 1 switches. No crosswalk entry for 1 ids.");
        assert!(!message.contains("Pleiades"));
    }

    #[test]
    fn test_invert_to_id_keyed() {
        let refs = table(&[("DocA", &["1", "2"]), ("DocB", &["1"])]);
        let inverted = invert_to_id_keyed(&refs);

        assert_eq!(inverted["1"], vec!["DocA", "DocB"]);
        assert_eq!(inverted["2"], vec!["DocA"]);
    }

    #[test]
    fn test_invert_keeps_duplicates() {
        let refs = table(&[("DocA", &["1", "1"]), ("DocB", &["1"])]);
        let inverted = invert_to_id_keyed(&refs);
        assert_eq!(inverted["1"], vec!["DocA", "DocA", "DocB"]);
    }

    #[test]
    fn test_empty_table() {
        let mut refs = ReferenceTable::new();
        let report = apply_crosswalk(&mut refs, &Crosswalk::new());
        assert_eq!(report, ReconcileReport::default());
        assert!(invert_to_id_keyed(&refs).is_empty());
    }
}
