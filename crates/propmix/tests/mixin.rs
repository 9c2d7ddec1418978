use std::cell::Cell;
use std::rc::Rc;

use propmix::{
    mix, ObjectHandle, ObjectHeap, PropertyDescriptor, PropertyKey, Value,
};

fn str_key(s: &str) -> PropertyKey {
    PropertyKey::String(s.to_string())
}

fn str_val(s: &str) -> Value {
    Value::Str(s.to_string())
}

/// Build the canonical source object: data properties `a: 1`, `b: "2"`,
/// `c: null`, an accessor `d` over the external `state` cell
/// (get = `state / 2`, set = `state = value * 2`), and a non-enumerable,
/// non-writable, non-configurable `e: "e"`.
fn build_source(heap: &mut ObjectHeap, state: &Rc<Cell<i64>>) -> ObjectHandle {
    let from = heap.alloc();

    heap.define_property_or_throw(from, str_key("a"), PropertyDescriptor::data(Value::Int(1)))
        .expect("define a");
    heap.define_property_or_throw(from, str_key("b"), PropertyDescriptor::data(str_val("2")))
        .expect("define b");
    heap.define_property_or_throw(from, str_key("c"), PropertyDescriptor::data(Value::Null))
        .expect("define c");

    let get_state = Rc::clone(state);
    let getter = heap.register_native(move |_| Value::Int(get_state.get() / 2));
    let set_state = Rc::clone(state);
    let setter = heap.register_native(move |args| {
        if let [Value::Int(n)] = args {
            set_state.set(n * 2);
        }
        Value::Undefined
    });
    heap.define_property_or_throw(
        from,
        str_key("d"),
        PropertyDescriptor::accessor(Some(getter), Some(setter)),
    )
    .expect("define d");

    heap.define_property_or_throw(from, str_key("e"), PropertyDescriptor::data_frozen(str_val("e")))
        .expect("define e");

    from
}

#[test]
fn copies_own_properties_from_one_object_to_another() {
    let mut heap = ObjectHeap::new();
    let state = Rc::new(Cell::new(0_i64));
    let from = build_source(&mut heap, &state);
    let to = heap.alloc();

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    for name in ["a", "b", "c", "d", "e"] {
        assert_eq!(
            heap.get_own_property_descriptor(to, &str_key(name))
                .expect("target descriptor"),
            heap.get_own_property_descriptor(from, &str_key(name))
                .expect("source descriptor"),
            "descriptor mismatch for '{name}'"
        );
    }

    assert_eq!(heap.get_value(to, &str_key("a")).expect("a"), Value::Int(1));
    assert_eq!(heap.get_value(to, &str_key("b")).expect("b"), str_val("2"));
    assert_eq!(heap.get_value(to, &str_key("c")).expect("c"), Value::Null);
    assert_eq!(heap.get_value(to, &str_key("e")).expect("e"), str_val("e"));

    // The accessor pair shares its backing state between both objects.
    assert_eq!(heap.get_value(from, &str_key("d")).expect("d"), Value::Int(0));
    assert_eq!(heap.get_value(to, &str_key("d")).expect("d"), Value::Int(0));

    assert!(heap
        .set_value(from, str_key("d"), Value::Int(1))
        .expect("set through source"));
    assert_eq!(heap.get_value(from, &str_key("d")).expect("d"), Value::Int(1));
    assert_eq!(heap.get_value(to, &str_key("d")).expect("d"), Value::Int(1));

    assert!(heap
        .set_value(to, str_key("d"), Value::Int(2))
        .expect("set through target"));
    assert_eq!(heap.get_value(from, &str_key("d")).expect("d"), Value::Int(2));
    assert_eq!(heap.get_value(to, &str_key("d")).expect("d"), Value::Int(2));
}

#[test]
fn non_enumerable_property_stays_non_enumerable() {
    let mut heap = ObjectHeap::new();
    let state = Rc::new(Cell::new(0_i64));
    let from = build_source(&mut heap, &state);
    let to = heap.alloc();

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    let desc = heap
        .get_own_property_descriptor(to, &str_key("e"))
        .expect("lookup")
        .expect("'e' was copied");
    assert!(!desc.is_enumerable());
    assert!(!desc.is_writable());
    assert!(!desc.is_configurable());
    assert_eq!(desc.value(), Some(&str_val("e")));
}

#[test]
fn symbol_keyed_properties_are_copied() {
    let mut heap = ObjectHeap::new();
    let from = heap.alloc();
    let to = heap.alloc();
    let sym = heap.alloc_symbol();
    heap.define_property_or_throw(from, sym.into(), PropertyDescriptor::data(Value::Int(7)))
        .expect("define");

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    assert_eq!(
        heap.get_value(to, &sym.into()).expect("symbol-keyed value"),
        Value::Int(7)
    );
}

#[test]
fn target_keys_absent_from_source_are_untouched() {
    let mut heap = ObjectHeap::new();
    let state = Rc::new(Cell::new(0_i64));
    let from = build_source(&mut heap, &state);
    let to = heap.alloc();
    heap.define_property_or_throw(
        to,
        str_key("own"),
        PropertyDescriptor::data_frozen(Value::Int(99)),
    )
    .expect("define");

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    assert_eq!(
        heap.get_own_property_descriptor(to, &str_key("own"))
            .expect("lookup"),
        Some(PropertyDescriptor::data_frozen(Value::Int(99)))
    );
}

#[test]
fn mixing_twice_equals_mixing_once() {
    let mut heap = ObjectHeap::new();
    let state = Rc::new(Cell::new(0_i64));
    let from = build_source(&mut heap, &state);
    let to = heap.alloc();

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("first mix");
    let once = heap.own_property_descriptors(to).expect("snapshot");

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("second mix");
    assert_eq!(heap.own_property_descriptors(to).expect("snapshot"), once);
}

#[test]
fn copy_follows_source_enumeration_order() {
    let mut heap = ObjectHeap::new();
    let from = heap.alloc();
    let to = heap.alloc();
    let sym = heap.alloc_symbol();

    heap.define_property_or_throw(from, str_key("z"), PropertyDescriptor::data(Value::Int(1)))
        .expect("define");
    heap.define_property_or_throw(from, sym.into(), PropertyDescriptor::data(Value::Int(2)))
        .expect("define");
    heap.define_property_or_throw(from, str_key("10"), PropertyDescriptor::data(Value::Int(3)))
        .expect("define");
    heap.define_property_or_throw(from, str_key("2"), PropertyDescriptor::data(Value::Int(4)))
        .expect("define");

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    assert_eq!(
        heap.own_keys(to).expect("keys"),
        vec![
            str_key("2"),
            str_key("10"),
            str_key("z"),
            PropertyKey::Symbol(sym),
        ]
    );
}

#[test]
fn copied_descriptors_serialize_identically() {
    let mut heap = ObjectHeap::new();
    let state = Rc::new(Cell::new(0_i64));
    let from = build_source(&mut heap, &state);
    let to = heap.alloc();

    mix(&mut heap, Value::Object(from), Value::Object(to)).expect("mix");

    let from_json =
        serde_json::to_value(heap.own_property_descriptors(from).expect("source pairs"))
            .expect("serialize source");
    let to_json = serde_json::to_value(heap.own_property_descriptors(to).expect("target pairs"))
        .expect("serialize target");
    assert_eq!(from_json, to_json);
}
