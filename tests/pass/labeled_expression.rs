use code_contracts::{is_equal, is_false, is_true, ContractError};

fn check_window(start: u32, end: u32, label: Option<&str>) -> Result<(), ContractError> {
    is_true!(start < end, "start < end")?;
    is_false!(start == 0, label)?;
    is_equal!(end - start, 10, "end - start")
}

fn main() {
    check_window(5, 15, None).unwrap();

    assert_eq!(
        check_window(5, 12, None).unwrap_err().to_string(),
        "end - start with value 7 was not equal to 10."
    );
    assert_eq!(
        check_window(0, 10, Some("start == 0")).unwrap_err().to_string(),
        "start == 0 was not False."
    );
}
