use starscape_core::{Subscription, Subscriptions};
use std::cell::Cell;
use std::rc::Rc;

fn counting(label: &'static str, counter: &Rc<Cell<u32>>) -> Subscription {
    let c = counter.clone();
    Subscription::new(label, move || c.set(c.get() + 1))
}

#[test]
fn release_runs_once() {
    let count = Rc::new(Cell::new(0));
    let mut sub = counting("resize", &count);
    assert!(sub.is_active());
    sub.release();
    sub.release();
    assert_eq!(count.get(), 1);
    assert!(!sub.is_active());
    drop(sub);
    assert_eq!(count.get(), 1);
}

#[test]
fn drop_releases() {
    let count = Rc::new(Cell::new(0));
    {
        let _sub = counting("pointermove", &count);
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn noop_handle_is_safe_to_release() {
    let mut sub = Subscription::noop("frame");
    assert!(!sub.is_active());
    sub.release();
    assert_eq!(sub.label(), "frame");
}

#[test]
fn release_all_is_idempotent() {
    let count = Rc::new(Cell::new(0));
    let mut subs = Subscriptions::new();
    subs.push(counting("resize", &count));
    subs.push(counting("pointermove", &count));
    subs.push(Subscription::noop("never-acquired"));
    assert_eq!(subs.active(), 2);

    subs.release_all();
    subs.release_all();
    assert_eq!(count.get(), 2);
    assert!(subs.is_empty());
    drop(subs);
    assert_eq!(count.get(), 2);
}

#[test]
fn release_follows_registration_order() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut subs = Subscriptions::new();
    for label in ["a", "b", "c"] {
        let o = order.clone();
        subs.push(Subscription::new(label, move || o.borrow_mut().push(label)));
    }
    subs.release_all();
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}
