use super::split_csv;

#[test]
fn it_splits_comma_separated_values() {
    assert_eq!(split_csv("a, b"), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn it_drops_empty_entries() {
    assert_eq!(
        split_csv("rust,, tokio ,"),
        vec!["rust".to_string(), "tokio".to_string()]
    );
}

#[test]
fn it_returns_an_empty_list_for_blank_input() {
    assert!(split_csv("").is_empty());
    assert!(split_csv(" , ").is_empty());
}
