//! Checks called through the macros, the way they are used in real code.

use code_contracts::{
    all_have_attribute, all_have_method, assertion, is_callable, is_equal, is_equal_to_any,
    is_false, is_greater_than, is_greater_than_or_equal, is_instance, is_not_empty, is_not_none,
    is_true, ContractError, ErrorKind, Introspect, MaybeEmpty, Raised,
};

fn is_not_none_test_method(a: Option<&str>) -> Result<(), ContractError> {
    is_not_none!(a)
}

fn is_not_empty_test_method<T: ?Sized + MaybeEmpty>(a: &T) -> Result<(), ContractError> {
    is_not_empty!(a)
}

fn is_equal_to_any_test_method(
    a: i32,
    expected_values: Vec<i32>,
    expression: Option<&str>,
) -> Result<(), ContractError> {
    is_equal_to_any!(a, expected_values, expression)
}

fn is_true_test_method(a: i32, expression: Option<&str>) -> Result<(), ContractError> {
    is_true!(a > 0, expression)
}

fn is_false_test_method(a: i32, expression: Option<&str>) -> Result<(), ContractError> {
    is_false!(a > 0, expression)
}

fn is_equal_test_method<T>(
    a: T,
    expected_value: T,
    expression: Option<&str>,
) -> Result<(), ContractError>
where
    T: PartialEq + std::fmt::Display,
{
    is_equal!(a, expected_value, expression)
}

fn is_greater_than_test_method(a: i32, expected_value: i32) -> Result<(), ContractError> {
    is_greater_than!(a, expected_value)
}

fn is_not_none_on_xth_parameter_test_method(
    a: Option<&str>,
    b: Option<&str>,
    c: Option<&str>,
) -> Result<(), ContractError> {
    is_not_none!(a)?;
    is_not_none!(b)?;
    is_not_none!(c)
}

struct TestStruct {
    the_param: Option<u32>,
}

impl TestStruct {
    fn one_method(&self) -> Result<u32, ContractError> {
        is_not_none!(self.the_param)?;

        Ok(self.the_param.unwrap_or_default())
    }
}

#[derive(Introspect)]
struct ClassA {
    abc: u8,
}

#[derive(Introspect)]
struct ClassB {
    abc: u8,
    xyz: u8,
}

#[derive(Introspect)]
#[introspect(methods(my_method))]
struct ClassC;

impl ClassC {
    fn my_method(&self) {}
}

fn message(result: Result<(), ContractError>) -> String {
    result.expect_err("the contract should have been violated").to_string()
}

#[test]
fn is_not_none_asserts() {
    assertion::raises_with_msg(
        ErrorKind::TypeMismatch,
        is_not_none_test_method,
        "a was equal to None.",
        (None,),
    )
    .unwrap();
}

#[test]
fn is_not_none_does_not_assert() {
    assertion::does_not_raise(ErrorKind::TypeMismatch, is_not_none_test_method, (Some("123"),))
        .unwrap();
}

#[test]
fn is_not_empty_asserts() {
    assert_eq!(message(is_not_empty_test_method(&None::<&str>)), "a was empty.");
    assert_eq!(message(is_not_empty_test_method("")), "a was empty.");
    assert_eq!(message(is_not_empty_test_method(&Vec::<u8>::new())), "a was empty.");

    let err = is_not_empty_test_method("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn is_not_empty_does_not_assert() {
    assert!(is_not_empty_test_method("123").is_ok());
    assert!(is_not_empty_test_method(&vec![123]).is_ok());
}

#[test]
fn is_equal_to_any_asserts() {
    assert_eq!(
        message(is_equal_to_any_test_method(4, vec![1, 2, 3], None)),
        "a with value 4 and type i32 was not equal to any of the expected values."
    );
    assert_eq!(
        message(is_equal_to_any_test_method(4, vec![1, 2, 3], Some("something.abc"))),
        "something.abc with value 4 and type i32 was not equal to any of the expected values."
    );
}

#[test]
fn is_equal_to_any_does_not_assert() {
    assert!(is_equal_to_any_test_method(1, vec![1, 2, 3], None).is_ok());
}

#[test]
fn is_true_asserts() {
    assert_eq!(message(is_true_test_method(-1, Some("a > 0"))), "a > 0 was not True.");
}

#[test]
fn is_true_does_not_assert() {
    assert!(is_true_test_method(1, None).is_ok());
}

#[test]
fn is_false_asserts() {
    assert_eq!(message(is_false_test_method(1, Some("a > 0"))), "a > 0 was not False.");
}

#[test]
fn is_false_does_not_assert() {
    assert!(is_false_test_method(-1, None).is_ok());
}

#[test]
fn unnamed_expression_without_label_is_a_format_error() {
    let err = is_true_test_method(-1, None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InternalFormat);
    assert_eq!(
        err.to_string(),
        "The call to the code contract had an unexpected format."
    );

    let err = is_false_test_method(1, Some("")).unwrap_err();

    assert!(err.is_kind(ErrorKind::InternalFormat));
}

#[test]
fn is_equal_asserts() {
    assert_eq!(
        message(is_equal_test_method(2, 1, None)),
        "a with value 2 was not equal to 1."
    );
    assert_eq!(
        message(is_equal_test_method(2, 1, Some("self.a"))),
        "self.a with value 2 was not equal to 1."
    );

    let tuple = [1, 2];

    assert_eq!(
        message(is_equal!(tuple.len(), 1, "len(tuple)")),
        "len(tuple) with value 2 was not equal to 1."
    );
}

#[test]
fn empty_label_falls_back_to_the_subject() {
    assert_eq!(
        message(is_equal_test_method(2, 1, Some(""))),
        "a with value 2 was not equal to 1."
    );
}

#[test]
fn is_equal_does_not_assert() {
    assert!(is_equal_test_method(1, 1, None).is_ok());
    assert!(is_equal_test_method("", "", None).is_ok());
}

#[test]
fn is_greater_than_asserts() {
    assert_eq!(
        message(is_greater_than_test_method(1, 2)),
        "a with value 1 was not greater than 2."
    );
    assert_eq!(
        message(is_greater_than_test_method(2, 2)),
        "a with value 2 was not greater than 2."
    );
}

#[test]
fn is_greater_than_does_not_assert() {
    assert!(is_greater_than_test_method(2, 1).is_ok());
}

#[test]
fn is_greater_than_or_equal_bounds() {
    let a = 2;

    assert!(is_greater_than_or_equal!(a, 1).is_ok());
    assert!(is_greater_than_or_equal!(a, 2).is_ok());
    assert_eq!(
        message(is_greater_than_or_equal!(a, 3)),
        "a with value 2 was not greater than or equal to 3."
    );
}

#[test]
fn is_not_none_on_xth_parameter_asserts() {
    assert_eq!(
        message(is_not_none_on_xth_parameter_test_method(None, Some("def"), Some("ghi"))),
        "a was equal to None."
    );
    assert_eq!(
        message(is_not_none_on_xth_parameter_test_method(Some("abc"), None, Some("ghi"))),
        "b was equal to None."
    );
    assert_eq!(
        message(is_not_none_on_xth_parameter_test_method(Some("abc"), Some("def"), None)),
        "c was equal to None."
    );
}

#[test]
fn field_of_self_is_named_by_its_path() {
    let test = TestStruct { the_param: None };

    let err = test.one_method().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "self.the_param was equal to None.");
    assert_eq!(TestStruct { the_param: Some(3) }.one_method(), Ok(3));
}

#[test]
fn forwarding_macro_keeps_the_name() {
    macro_rules! require {
        ($value:expr) => {
            code_contracts::is_not_none!($value)
        };
    }

    let config: Option<u8> = None;

    assert_eq!(message(require!(config)), "config was equal to None.");
}

#[test]
fn all_have_attribute_on_items() {
    let a = vec![ClassA { abc: 1 }, ClassA { abc: 2 }];
    let mixed: Vec<Box<dyn Introspect>> = vec![
        Box::new(ClassA { abc: 1 }),
        Box::new(ClassB { abc: 1, xyz: 2 }),
    ];

    assert!(all_have_attribute!(a, "abc").is_ok());
    assert!(all_have_attribute!(mixed, "abc").is_ok());

    let err = all_have_attribute!(mixed, "xyz").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Attribute);
    assert_eq!(
        err.to_string(),
        "mixed contains an item of type ClassA not having the expected attribute 'xyz'."
    );
    assert_eq!(a[0].abc + a[1].abc, 3);
}

#[test]
fn all_have_method_on_single_object() {
    let a = ClassC;
    let b = ClassB { abc: 1, xyz: 2 };

    assert!(all_have_method!(a, "my_method").is_ok());
    assert_eq!(
        message(all_have_method!(b, "my_method")),
        "b with type ClassB does not have the expected method 'my_method'."
    );
    assert_eq!(
        message(all_have_method!(b, "abc")),
        "b with type ClassB does not have the expected method 'abc'."
    );
    assert_eq!(b.abc + b.xyz, 3);
    a.my_method();
}

#[test]
fn is_callable_on_function_pointer() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let a: fn(i32) -> i32 = double;
    let b = ClassA { abc: 1 };

    assert!(is_callable!(a).is_ok());
    assert_eq!(a(2), 4);

    let err = is_callable!(b).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "b with type ClassA was not callable.");
}

#[test]
fn is_instance_of_type() {
    let value = true;

    assert!(is_instance!(value, bool).is_ok());

    let err = is_instance!(value, String).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "value was not an instance of String.");
}

#[test]
fn is_instance_looks_into_boxes() {
    let value: Box<dyn std::any::Any> = Box::new(1u8);

    assert!(is_instance!(value, u8).is_ok());
    assert!(is_instance!(value, i32).is_err());
}
