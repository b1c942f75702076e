//! Closed-set dispatch and trait detection.

use std::collections::{BTreeMap, HashMap};

use loopforge::logging;
use loopforge::prelude::*;
use tracing::info;

trait Func {
    fn func(&self, a: i32) -> i32;
}

struct MyType1;

impl Func for MyType1 {
    fn func(&self, a: i32) -> i32 {
        2 * a
    }
}

struct MyType2;

/// Ordered associative containers.
trait OrderedMap {}

impl<K, V> OrderedMap for BTreeMap<K, V> {}

enum Arg {
    Int(i32),
    Text(String),
}

fn describe_func<P: Presence>(presence: P) -> &'static str {
    presence.select(
        |_| "has func(i32)",
        |_| "has no func(i32)",
        (),
    )
}

fn main() {
    logging::init();

    let print = overload! {
        Arg::Int(a) => format!("int: {}", a),
        Arg::Text(s) => format!("string: {}", s),
    };
    let int = print(Arg::Int(1));
    let text = print(Arg::Text("this is a string".to_string()));
    assert_eq!(int, "int: 1");
    assert_eq!(text, "string: this is a string");
    info!(%int, %text, "overload set");

    let first = describe_func(detect!(MyType1: Func));
    let second = describe_func(detect!(MyType2: Func));
    assert_eq!(first, "has func(i32)");
    assert_eq!(second, "has no func(i32)");
    assert_eq!(MyType1.func(21), 42);
    info!(my_type1 = first, my_type2 = second, "member detection");

    let _: Has = detect!(MyType1: Func);
    let _: HasNot = detect!(MyType2: Func);

    let btree = detect!(BTreeMap<i32, f64>: OrderedMap).present();
    let hash = detect!(HashMap<i32, f64>: OrderedMap).present();
    let vec = detect!(Vec<i32>: OrderedMap).present();
    assert!(btree && !hash && !vec);
    info!(btree, hash, vec, "is an ordered map");
}
