#![forbid(unsafe_code)]
use bebe_ical::{RatingError, RatingTable};

#[test]
fn loads_two_column_csv() {
    let table = RatingTable::from_csv(b"ICU,5\nER, 3 \n\"MED 4\",\"good, quiet\"\n").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("ICU"), Some("5"));
    assert_eq!(table.get("ER"), Some("3"));
    assert_eq!(table.get("MED 4"), Some("good, quiet"));
    assert_eq!(table.get("PEDS"), None);
}

#[test]
fn last_duplicate_wins() {
    let table = RatingTable::from_csv(b"ICU,2\nICU,5\n").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("ICU"), Some("5"));
}

#[test]
fn empty_input_is_an_empty_table() {
    let table = RatingTable::from_csv(b"").unwrap();
    assert!(table.is_empty());
}

#[test]
fn wrong_column_count_is_malformed() {
    for bad in [
        &b"ICU,5,extra\n"[..],
        &b"ICU\n"[..],
        &b"ICU,5\nER\n"[..],
        &b",5\n"[..],
    ] {
        let err = RatingTable::from_csv(bad).unwrap_err();
        assert!(matches!(err, RatingError::Malformed(_)), "{err}");
    }
}

#[test]
fn invalid_utf8_is_malformed() {
    let err = RatingTable::from_csv(b"IC\xffU,5\n").unwrap_err();
    assert!(matches!(err, RatingError::Malformed(_)));
}

#[test]
fn bundled_table_parses() {
    let table = RatingTable::from_csv(include_bytes!("../assets/ratings.csv")).unwrap();
    assert_eq!(table.get("ICU"), Some("5"));
}
