use code_contracts::{all_have_attribute, all_have_method, is_callable, Introspect};

#[derive(Introspect)]
#[introspect(methods(area))]
struct Square {
    side: u32,
}

impl Square {
    fn area(&self) -> u32 {
        self.side * self.side
    }
}

#[derive(Introspect)]
#[introspect(callable)]
struct Handler<F: Fn(u32) -> u32>(F);

fn main() {
    let squares = vec![Square { side: 1 }, Square { side: 2 }];
    let handler = Handler(|value: u32| value + 1);

    all_have_attribute!(squares, "side").unwrap();
    all_have_method!(squares, "area").unwrap();
    is_callable!(handler).unwrap();

    assert_eq!(squares[1].area(), 4);
    assert_eq!((handler.0)(1), 2);
}
