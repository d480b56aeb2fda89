//! Result ordering.

use crate::product::AlertRecord;

/// Sort alerts by needed quantity, most urgent first.
///
/// The sort is stable: records with equal needs keep the order in which the
/// catalog returned them. There is no secondary key.
#[must_use]
pub fn rank(mut records: Vec<AlertRecord>) -> Vec<AlertRecord> {
    records.sort_by(|a, b| b.needed_quantity.cmp(&a.needed_quantity));
    records
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::product::ProductRecord;

    fn alert(title: &str, needed: i64) -> AlertRecord {
        AlertRecord {
            product: ProductRecord {
                title: title.to_string(),
                image_url: None,
                current_quantity: -needed,
                threshold: 0,
            },
            needed_quantity: needed,
        }
    }

    fn titles(records: &[AlertRecord]) -> Vec<&str> {
        records.iter().map(AlertRecord::title).collect()
    }

    #[test]
    fn sorts_descending() {
        let ranked = rank(vec![alert("a", 1), alert("b", 9), alert("c", 4)]);
        assert_eq!(titles(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_arrival_order() {
        let ranked = rank(vec![alert("x", 7), alert("y", 7)]);
        assert_eq!(titles(&ranked), vec!["x", "y"]);
    }

    #[test]
    fn ties_are_not_sorted_by_title() {
        let ranked = rank(vec![
            alert("zeta", 3),
            alert("big", 10),
            alert("alpha", 3),
            alert("mid", 3),
        ]);
        assert_eq!(titles(&ranked), vec!["big", "zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
