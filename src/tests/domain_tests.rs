use crate::domain::{make_sku, split_price_pair};

#[test]
fn new_status_gets_n_suffix() {
    assert_eq!(make_sku("Brand New", 0, 50), "CFS-N-0050");
    assert_eq!(make_sku("NEW", 3, 50), "CFS-N-0053");
    assert_eq!(make_sku("new arrival", 0, 1), "CFS-N-0001");
}

#[test]
fn anything_else_gets_u_suffix() {
    assert_eq!(make_sku("Used", 0, 50), "CFS-U-0050");
    assert_eq!(make_sku("Demo", 1, 50), "CFS-U-0051");
    assert_eq!(make_sku("N/A", 0, 50), "CFS-U-0050");
}

#[test]
fn number_is_offset_and_zero_padded() {
    assert_eq!(make_sku("Used", 7, 0), "CFS-U-0007");
    assert_eq!(make_sku("Used", 0, 9999), "CFS-U-9999");
    // Five digits simply widen the field.
    assert_eq!(make_sku("Used", 2, 9999), "CFS-U-10001");
}

#[test]
fn price_pair_takes_first_two_dollar_texts() {
    let texts = vec![
        "Sleeps 4".to_string(),
        "$89,990".to_string(),
        "$79,990".to_string(),
        "$1".to_string(),
    ];
    assert_eq!(
        split_price_pair(&texts),
        ("$89,990".to_string(), "$79,990".to_string())
    );
}

#[test]
fn single_price_leaves_now_as_sentinel() {
    let texts = vec!["$89,990".to_string()];
    assert_eq!(
        split_price_pair(&texts),
        ("$89,990".to_string(), "N/A".to_string())
    );
}

#[test]
fn no_prices_yields_both_sentinels() {
    let texts = vec!["Sleeps 4".to_string()];
    assert_eq!(
        split_price_pair(&texts),
        ("N/A".to_string(), "N/A".to_string())
    );
    assert_eq!(split_price_pair(&[]), ("N/A".to_string(), "N/A".to_string()));
}
