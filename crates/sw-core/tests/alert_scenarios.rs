//! End-to-end checks of evaluate + rank over hand-built record sets.

use pretty_assertions::assert_eq;
use sw_core::{AlertPolicy, AlertRecord, ProductRecord, evaluate, rank};

fn product(title: &str, current: i64, threshold: i64) -> ProductRecord {
    ProductRecord {
        title: title.to_string(),
        image_url: None,
        current_quantity: current,
        threshold,
    }
}

fn summary(alerts: &[AlertRecord]) -> Vec<(&str, i64)> {
    alerts
        .iter()
        .map(|a| (a.title(), a.needed_quantity))
        .collect()
}

#[test]
fn global_policy_orders_oversold_products() {
    let records = vec![
        product("A", -5, 0),
        product("B", 3, 0),
        product("C", -12, 0),
        product("D", 0, 0),
    ];

    let ranked = rank(evaluate(AlertPolicy::Global, records));
    assert_eq!(summary(&ranked), vec![("C", 12), ("A", 5)]);

    for alert in &ranked {
        assert!(alert.current_quantity() < 0);
        assert_eq!(alert.needed_quantity, -alert.current_quantity());
    }
}

#[test]
fn threshold_policy_keeps_only_shortfalls() {
    let records = vec![
        product("first", 4, 10),
        product("second", 10, 10),
        product("third", 15, 10),
    ];

    let ranked = rank(evaluate(AlertPolicy::Threshold, records));
    assert_eq!(summary(&ranked), vec![("first", 6)]);

    let alert = &ranked[0];
    assert_eq!(
        alert.needed_quantity,
        alert.product.threshold - alert.product.current_quantity
    );
}

#[test]
fn equal_needs_keep_catalog_order() {
    let records = vec![product("X", -7, 0), product("Y", -7, 0)];
    let ranked = rank(evaluate(AlertPolicy::Global, records));
    assert_eq!(summary(&ranked), vec![("X", 7), ("Y", 7)]);
}

#[test]
fn threshold_policy_with_mixed_thresholds() {
    let records = vec![
        product("none", 0, 0),
        product("low", 1, 3),
        product("oversold", -4, 0),
        product("deep", 2, 20),
        product("negative-threshold", -10, -5),
    ];

    let ranked = rank(evaluate(AlertPolicy::Threshold, records));
    assert_eq!(
        summary(&ranked),
        vec![
            ("deep", 18),
            ("negative-threshold", 5),
            ("oversold", 4),
            ("low", 2),
        ]
    );
    assert!(ranked.iter().all(|a| a.needed_quantity > 0));
}
