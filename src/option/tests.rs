#![cfg(test)]

use super::*;
use crate::error::EmptyOptional;
use crate::util::observe::{CountedDrop, Log, Logged, Observer};
use crate::util::panic::assert_panics;

#[test]
fn test_engagement() {
    let opt = some(1);
    assert!(opt.is_some());
    assert!(!opt.is_none());
    assert_eq!(*opt, 1);

    let opt: Optional<i32> = NONE.into();
    assert!(opt.is_none());
    assert!(!opt.is_some());
    assert_eq!(opt, none());
}

#[test]
fn test_rebinding() {
    let mut opt = some(1);
    assert_eq!(*opt, 1);

    opt = NONE.into();
    assert!(opt.is_none());

    opt = some(2);
    assert_eq!(*opt, 2, "Rebinding to a new value should hold that value.");

    opt.reset();
    assert!(opt.is_none());

    opt.set(3);
    assert_eq!(*opt, 3);
}

#[test]
fn test_lifetime_on_scope_exit() {
    let observer = Observer::new();
    {
        let opt = Optional::some_with(|| observer.spawn());
        assert!(opt.is_some());
        assert!(observer.alive(), "Value should be alive while held.");
    }
    assert!(!observer.alive(), "Value should be dropped with the Optional.");
}

#[test]
fn test_lifetime_on_rebind() {
    let first = Observer::new();
    let second = Observer::new();

    let mut opt = Optional::some_with(|| first.spawn());
    assert!(first.alive());
    assert!(!second.alive());

    opt.emplace(|| second.spawn());
    assert!(!first.alive(), "Rebinding should drop the previous value.");
    assert!(second.alive());

    opt.emplace(|| first.spawn());
    assert!(first.alive());
    assert!(!second.alive());

    opt = NONE.into();
    assert!(opt.is_none());
    assert!(!first.alive());
    assert!(!second.alive());
}

#[test]
fn test_reset_drops_once() {
    let counter = CountedDrop::new(0);
    let mut opt = some(counter.clone());

    opt.reset();
    assert_eq!(counter.count(), 1, "Resetting should drop the held value exactly once.");

    opt.reset();
    opt = NONE.into();
    assert!(opt.is_none());
    assert_eq!(counter.count(), 1, "Resetting an empty Optional shouldn't drop anything.");

    drop(opt);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_emplace_drops_before_constructing() {
    let log = Log::new();
    let mut opt = Optional::some_with(|| Logged::new("old", &log));

    opt.emplace(|| Logged::new("new", &log));
    assert_eq!(
        log.take(),
        ["new old", "drop old", "new new"],
        "The old value should be dropped before the new one is constructed."
    );

    drop(opt);
    assert_eq!(log.take(), ["drop new"]);
}

#[test]
fn test_emplace_panic_leaves_empty() {
    let counter = CountedDrop::new(0);
    let mut opt = some(counter.clone());

    assert_panics!({
        opt.emplace(|| panic!("construction failed"));
    });

    assert!(opt.is_none());
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_swap() {
    let mut a: Optional<String> = none();
    let mut b: Optional<String> = none();
    a.swap(&mut b);
    assert!(a.is_none() && b.is_none(), "Swapping two empty Optionals should do nothing.");

    let mut a = some(String::from("a"));
    a.swap(&mut b);
    assert!(a.is_none());
    assert_eq!(b.value(), "a", "The engaged value should move to the empty side.");

    a.swap(&mut b);
    assert_eq!(a.value(), "a", "The engaged value should move back.");
    assert!(b.is_none());

    let mut b = some(String::from("b"));
    a.swap(&mut b);
    assert_eq!(a.value(), "b");
    assert_eq!(b.value(), "a");
}

#[test]
fn test_swap_keeps_values_alive() {
    let counter = CountedDrop::new(0);
    let mut a = some(counter.clone());
    let mut b = none();

    a.swap(&mut b);
    b.swap(&mut a);
    a.swap(&mut b);
    assert_eq!(counter.count(), 0, "Swapping shouldn't drop the held value.");

    drop(b);
    assert_eq!(counter.count(), 1);
    drop(a);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_bool_conversion() {
    assert!(some(1).as_bool());
    assert!(!none::<u8>().as_bool());
}

#[test]
fn test_access() {
    #[derive(Debug, PartialEq)]
    struct S {
        a: i32,
        b: i32,
    }

    let mut opt = some(S { a: 0xA, b: 0xB });
    assert_eq!(*opt, S { a: 0xA, b: 0xB });
    assert_eq!(opt.value(), &S { a: 0xA, b: 0xB });
    assert_eq!(opt.a, 0xA);
    assert_eq!(opt.b, 0xB);

    opt.b = 0xC;
    opt.value_mut().a = 0xD;
    assert_eq!(opt.try_value(), Ok(&S { a: 0xD, b: 0xC }));
    // SAFETY: opt is engaged.
    assert_eq!(unsafe { opt.value_unchecked() }.b, 0xC);
    assert_eq!(opt.into_value(), S { a: 0xD, b: 0xC });
}

#[test]
fn test_empty_access() {
    let opt = none::<u8>();
    assert_eq!(opt.try_value(), Err(EmptyOptional));

    assert_panics!({ *opt }, "empty Optional");
    assert_panics!({ opt.value() }, "empty Optional");
    assert_panics!({ opt.into_value() }, "empty Optional");
}

#[test]
fn test_clone() {
    let log = Log::new();
    let opt = Optional::some_with(|| Logged::new("a", &log));
    let copy = opt.clone();

    assert_eq!(copy, opt);
    assert_eq!(log.take(), ["new a", "clone a"], "Cloning should clone the held value.");

    drop(opt);
    assert_eq!(log.take(), ["drop a"]);
    assert!(copy.is_some(), "A clone should own its own value.");

    let empty: Optional<Logged> = none();
    assert!(empty.clone().is_none());
}

#[test]
fn test_take() {
    let mut opt = some(5);
    assert_eq!(opt.take(), some(5));
    assert!(opt.is_none());
    assert_eq!(opt.take(), none());
}

#[test]
fn test_const_access() {
    const TAKEN: (Optional<u8>, Optional<u8>) = {
        let mut opt = some(5);
        let taken = opt.take();
        (opt, taken)
    };
    const VALUE: u8 = match some(7).try_value() {
        Ok(val) => *val,
        Err(_) => 0,
    };
    const EMPTY: bool = none::<u8>().try_value().is_err();

    assert_eq!(TAKEN, (none(), some(5)));
    assert_eq!(VALUE, 7);
    assert!(EMPTY);
}

#[test]
fn test_std_conversions() {
    assert_eq!(Optional::<i32>::from(Some(1)), some(1));
    assert_eq!(Optional::<u8>::from(None), none());
    assert_eq!(Option::<char>::from(some('x')), Some('x'));
    assert_eq!(none::<u8>().into_option(), None);
    assert_eq!(some(2).as_ref(), some(&2));
}
