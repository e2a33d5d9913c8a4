use std::cell::Cell;
use std::collections::HashSet;
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

use super::MayBeValue;
use crate::EmptyValueAccess;

fn hash_of(x: &impl Hash) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(x)
}

#[test]
fn empty_is_default() {
    let x: MayBeValue<u32> = MayBeValue::default();
    assert_eq!(x, MayBeValue::empty());
    assert!(x.is_empty());
    assert!(!x.is_present());
    assert!(!x.is_null());
}

#[test]
fn empty_can_be_static() {
    static EMPTY: MayBeValue<&str> = MayBeValue::empty();
    assert_eq!(EMPTY, MayBeValue::Empty);
    assert_eq!(EMPTY.get(), Err(EmptyValueAccess));
}

#[test]
fn of_distinguishes_null_from_value() {
    assert_eq!(MayBeValue::of(Some(5)), MayBeValue::Value(5));
    assert_eq!(MayBeValue::<u8>::of(None), MayBeValue::Null);
    assert_eq!(MayBeValue::<u8>::of(None), MayBeValue::null());
    assert_eq!(MayBeValue::value(5), MayBeValue::of(Some(5)));
    assert!(MayBeValue::<u8>::null().is_null());
    assert!(!MayBeValue::value(5).is_null());
}

#[test]
fn presence_and_nullness_are_independent() {
    let empty = MayBeValue::<String>::empty();
    let null = MayBeValue::<String>::null();

    assert_ne!(empty, null);
    assert_ne!(hash_of(&empty), hash_of(&null));
    assert!(null.is_present());
    assert_eq!(null.get(), Ok(None));
    assert_eq!(empty.get(), Err(EmptyValueAccess));
}

#[test]
fn structural_equality() {
    let a = MayBeValue::value(String::from("foo"));
    let b = MayBeValue::value("foo".to_string());

    assert_eq!(a, a.clone());
    assert_eq!(a, b);
    assert_ne!(a, MayBeValue::value("bar".to_string()));
    assert_ne!(a, MayBeValue::null());
    assert_ne!(a, MayBeValue::empty());
    assert_eq!(MayBeValue::<String>::null(), MayBeValue::of(None));
    assert_eq!(MayBeValue::<String>::empty(), MayBeValue::empty());
}

#[test]
fn equal_values_hash_equally() {
    let a = MayBeValue::value(String::from("foo"));
    let b = MayBeValue::value("foo".to_string());
    assert_eq!(hash_of(&a), hash_of(&b));

    assert_eq!(
        hash_of(&MayBeValue::<String>::empty()),
        hash_of(&MayBeValue::<String>::empty())
    );
    assert_eq!(
        hash_of(&MayBeValue::<String>::null()),
        hash_of(&MayBeValue::<String>::null())
    );

    // The empty hash does not depend on the element type.
    assert_eq!(
        hash_of(&MayBeValue::<String>::empty()),
        hash_of(&MayBeValue::<u64>::empty())
    );
}

#[test]
fn usable_as_set_key() {
    let set: HashSet<MayBeValue<u32>> = [
        MayBeValue::empty(),
        MayBeValue::null(),
        MayBeValue::value(1),
        MayBeValue::value(1),
        MayBeValue::empty(),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 3);
    assert!(set.contains(&MayBeValue::null()));
    assert!(set.contains(&MayBeValue::empty()));
    assert!(!set.contains(&MayBeValue::value(2)));
}

#[test]
fn ordering() {
    let mut v = vec![
        MayBeValue::value(2),
        MayBeValue::null(),
        MayBeValue::value(1),
        MayBeValue::empty(),
    ];
    v.sort();
    assert_eq!(
        v,
        [
            MayBeValue::empty(),
            MayBeValue::null(),
            MayBeValue::value(1),
            MayBeValue::value(2),
        ]
    );
}

#[test]
fn display() {
    assert_eq!(MayBeValue::value("foo").to_string(), "MayBeValue[foo]");
    assert_eq!(MayBeValue::<&str>::null().to_string(), "MayBeValue[null]");
    assert_eq!(MayBeValue::<&str>::empty().to_string(), "MayBeValue.empty");
    assert_eq!(MayBeValue::value(42).to_string(), "MayBeValue[42]");
}

#[test]
fn option_conversions() {
    assert_eq!(MayBeValue::from(Some(1)), MayBeValue::value(1));
    assert_eq!(MayBeValue::<i32>::from(None), MayBeValue::null());

    assert_eq!(MayBeValue::<i32>::from_option(None), MayBeValue::empty());
    assert_eq!(MayBeValue::<i32>::from_option(Some(None)), MayBeValue::null());
    assert_eq!(MayBeValue::from_option(Some(Some(1))), MayBeValue::value(1));

    let nested: Option<Option<i32>> = MayBeValue::value(1).into();
    assert_eq!(nested, Some(Some(1)));
    assert_eq!(MayBeValue::<i32>::null().into_option(), Some(None));
    assert_eq!(MayBeValue::<i32>::empty().into_option(), None);
}

#[test]
fn into_inner() {
    assert_eq!(MayBeValue::value(1).into_inner(), Ok(Some(1)));
    assert_eq!(MayBeValue::<i32>::null().into_inner(), Ok(None));
    assert_eq!(MayBeValue::<i32>::empty().into_inner(), Err(EmptyValueAccess));
}

#[test]
fn as_ref_and_as_mut() {
    let x = MayBeValue::value(String::from("foo"));
    let len = x.as_ref().map(|s| s.map(String::len));
    assert_eq!(len, MayBeValue::value(3));
    assert_eq!(x, MayBeValue::value("foo".to_string()));

    let mut y = MayBeValue::value(1);
    if let MayBeValue::Value(v) = y.as_mut() {
        *v += 1;
    }
    assert_eq!(y, MayBeValue::value(2));

    let mut z = MayBeValue::<i32>::null();
    assert_eq!(z.as_mut(), MayBeValue::Null);
    assert_eq!(MayBeValue::<i32>::empty().as_ref(), MayBeValue::Empty);
}

#[test]
fn or() {
    let a = MayBeValue::value(1);
    let b = MayBeValue::value(2);
    assert_eq!(a.or(b), a);
    assert_eq!(MayBeValue::null().or(b), MayBeValue::null());
    assert_eq!(MayBeValue::empty().or(b), b);
    assert_eq!(
        MayBeValue::<i32>::empty().or(MayBeValue::empty()),
        MayBeValue::empty()
    );
}

#[test]
fn filter_rewraps_matching_value() {
    let x = MayBeValue::value("foo");
    assert_eq!(x.filter(|v| v == Some(&"foo")), MayBeValue::value("foo"));
    assert_eq!(x.filter(|v| v == Some(&"bar")), MayBeValue::empty());

    let null = MayBeValue::<&str>::null();
    assert_eq!(null.filter(|v| v.is_none()), MayBeValue::null());
    assert_eq!(null.filter(|v| v.is_some()), MayBeValue::empty());
}

#[test]
fn closures_not_called_on_empty() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    let empty = MayBeValue::<i32>::empty();
    empty.if_present(|_| count());
    assert_eq!(
        empty.filter(|_| {
            count();
            true
        }),
        MayBeValue::empty()
    );
    assert_eq!(
        empty.map(|x| {
            count();
            x
        }),
        MayBeValue::empty()
    );
    assert_eq!(
        empty.flat_map(|x| {
            count();
            MayBeValue::of(x)
        }),
        MayBeValue::empty()
    );

    assert_eq!(calls.get(), 0);
}

#[test]
fn suppliers_called_once_on_empty() {
    let calls = Cell::new(0);

    let empty = MayBeValue::<i32>::empty();
    let v = empty.unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        Some(7)
    });
    assert_eq!(v, Some(7));
    assert_eq!(calls.get(), 1);

    let res = empty.ok_or_else(|| {
        calls.set(calls.get() + 1);
        "missing"
    });
    assert_eq!(res, Err("missing"));
    assert_eq!(calls.get(), 2);

    let mut else_calls = 0;
    empty.if_present_or_else(|_| panic!("not present"), || else_calls += 1);
    assert_eq!(else_calls, 1);
}

#[test]
fn suppliers_not_called_when_present() {
    let calls = Cell::new(0);

    for x in [MayBeValue::value(1), MayBeValue::null()] {
        let expected = x.into_option().flatten();
        let v = x.unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            Some(7)
        });
        assert_eq!(v, expected);

        let res = x.ok_or_else(|| {
            calls.set(calls.get() + 1);
        });
        assert_eq!(res, Ok(expected));
    }

    assert_eq!(calls.get(), 0);
}

#[test]
fn map_may_produce_null() {
    let x = MayBeValue::value(1);
    assert_eq!(x.map(|_| None::<i32>), MayBeValue::null());
    assert_eq!(x.map(|v| v.map(|v| v * 2)), MayBeValue::value(2));
    assert_eq!(
        MayBeValue::<i32>::null().map(|v| Some(v.is_none())),
        MayBeValue::value(true)
    );
}

#[test]
fn flat_map_is_not_rewrapped() {
    let x = MayBeValue::value(1);
    assert_eq!(x.flat_map(|_| MayBeValue::<i32>::empty()), MayBeValue::empty());
    assert_eq!(x.flat_map(|_| MayBeValue::<i32>::null()), MayBeValue::null());
    assert_eq!(
        x.flat_map(|v| MayBeValue::of(v.map(|v| v + 1))),
        MayBeValue::value(2)
    );
}

#[test]
fn unwrap_or() {
    assert_eq!(MayBeValue::value(1).unwrap_or(Some(2)), Some(1));
    assert_eq!(MayBeValue::null().unwrap_or(Some(2)), None);
    assert_eq!(MayBeValue::empty().unwrap_or(Some(2)), Some(2));
    assert_eq!(MayBeValue::<i32>::empty().unwrap_or(None), None);
}
