use code_contracts::{contract, ErrorKind};

fn main() {
    let values = vec!["a", "b"];
    let err = contract::is_equal_to_any(&"c", &values, "letter").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(
        err.to_string(),
        "letter with value c and type &str was not equal to any of the expected values."
    );

    contract::is_not_empty(&values, "values").unwrap();
    contract::is_greater_than(&values.len(), &1, "values.len()").unwrap();
}
