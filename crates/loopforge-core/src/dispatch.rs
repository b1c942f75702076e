//! Dispatch over a closed set of alternatives.
//!
//! Two tools cover the "pick exactly one handler" problem:
//!
//! - [`overload!`](crate::overload) builds one callable from the arms of a
//!   match over a sum type. The compiler checks the set is exhaustive; a
//!   trailing `_` arm is the explicit "no matching branch" alternative.
//! - [`detect!`](crate::detect) asks whether a concrete type implements a
//!   trait and answers with a [`Has`] or [`HasNot`] value. Because the
//!   answer is a type, [`Presence::select`] picks its branch at compile
//!   time.
//!
//! # Examples
//!
//! ```
//! use loopforge_core::{detect, overload, Presence};
//!
//! enum Arg {
//!     Int(i32),
//!     Text(&'static str),
//! }
//!
//! let describe = overload! {
//!     Arg::Int(a) => format!("int: {}", a),
//!     Arg::Text(s) => format!("string: {}", s),
//! };
//! assert_eq!(describe(Arg::Int(1)), "int: 1");
//! assert_eq!(describe(Arg::Text("this is a string")), "string: this is a string");
//!
//! assert!(detect!(String: Clone).present());
//! assert!(!detect!(std::cell::Cell<u8>: Sync).present());
//! ```

/// Type-level "the capability is present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Has;

/// Type-level "the capability is absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HasNot;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Has {}
    impl Sealed for super::HasNot {}
}

/// Either [`Has`] or [`HasNot`].
pub trait Presence: Copy + sealed::Sealed {
    /// Whether the capability is present.
    const PRESENT: bool;

    /// Calls `yes` for [`Has`] and `no` for [`HasNot`].
    ///
    /// Only the selected branch is ever called; the choice is made by the
    /// type of `self`.
    fn select<A, R, Y, N>(self, yes: Y, no: N, arg: A) -> R
    where
        Y: FnOnce(A) -> R,
        N: FnOnce(A) -> R;

    /// Runtime view of [`Presence::PRESENT`].
    #[inline]
    fn present(self) -> bool {
        Self::PRESENT
    }
}

impl Presence for Has {
    const PRESENT: bool = true;

    #[inline]
    fn select<A, R, Y, N>(self, yes: Y, _no: N, arg: A) -> R
    where
        Y: FnOnce(A) -> R,
        N: FnOnce(A) -> R,
    {
        yes(arg)
    }
}

impl Presence for HasNot {
    const PRESENT: bool = false;

    #[inline]
    fn select<A, R, Y, N>(self, _yes: Y, no: N, arg: A) -> R
    where
        Y: FnOnce(A) -> R,
        N: FnOnce(A) -> R,
    {
        no(arg)
    }
}

/// Builds a closure that matches its argument against a closed set of arms.
///
/// ```
/// use loopforge_core::overload;
///
/// enum Shape {
///     Circle(f64),
///     Square(f64),
///     Point,
/// }
///
/// let area = overload! {
///     Shape::Square(side) if side < 0.0 => 0.0,
///     Shape::Square(side) => side * side,
///     Shape::Circle(r) => 3.0 * r * r,
///     _ => 0.0,
/// };
/// assert_eq!(area(Shape::Square(2.0)), 4.0);
/// assert_eq!(area(Shape::Circle(1.0)), 3.0);
/// assert_eq!(area(Shape::Point), 0.0);
/// ```
#[macro_export]
macro_rules! overload {
    ($($pat:pat $(if $guard:expr)? => $body:expr),+ $(,)?) => {
        move |value| match value {
            $($pat $(if $guard)? => $body,)+
        }
    };
}

/// Answers whether a concrete type implements the given bounds.
///
/// Evaluates to [`Has`] or [`HasNot`]. The answer is resolved by method
/// lookup on a marker value, so it needs a concrete type: inside a generic
/// function it reports on the declared bounds, not on the instantiated type.
///
/// ```
/// use loopforge_core::{detect, Has, HasNot};
///
/// trait Func {
///     fn func(&self, a: i32) -> i32;
/// }
///
/// struct Doubler;
/// impl Func for Doubler {
///     fn func(&self, a: i32) -> i32 {
///         2 * a
///     }
/// }
/// struct Plain;
///
/// let _: Has = detect!(Doubler: Func);
/// let _: HasNot = detect!(Plain: Func);
/// ```
#[macro_export]
macro_rules! detect {
    ($ty:ty : $($bounds:tt)+) => {{
        struct Subject<T: ?Sized>(::core::marker::PhantomData<T>);

        trait ViaImpl {
            fn presence(&self) -> $crate::Has {
                $crate::Has
            }
        }
        impl<T: ?Sized + $($bounds)+> ViaImpl for Subject<T> {}

        trait ViaFallback {
            fn presence(&self) -> $crate::HasNot {
                $crate::HasNot
            }
        }
        impl<T: ?Sized> ViaFallback for &Subject<T> {}

        (&Subject::<$ty>(::core::marker::PhantomData)).presence()
    }};
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    trait Func {
        fn func(&self, a: i32) -> i32;
    }

    struct WithFunc;

    impl Func for WithFunc {
        fn func(&self, a: i32) -> i32 {
            2 * a
        }
    }

    struct WithoutFunc;

    trait OrderedMap {}

    impl<K, V> OrderedMap for BTreeMap<K, V> {}

    fn report<P: Presence>(presence: P) -> &'static str {
        presence.select(|_| "has func(i32)", |_| "has no func(i32)", ())
    }

    #[test]
    fn test_detect_trait_impl() {
        assert_eq!(report(detect!(WithFunc: Func)), "has func(i32)");
        assert_eq!(report(detect!(WithoutFunc: Func)), "has no func(i32)");
        assert_eq!(WithFunc.func(4), 8);
    }

    #[test]
    fn test_detect_local_trait() {
        assert!(detect!(BTreeMap<i32, f64>: OrderedMap).present());
        assert!(!detect!(HashMap<i32, f64>: OrderedMap).present());
        assert!(!detect!(Vec<i32>: OrderedMap).present());
    }

    #[test]
    fn test_detect_compound_bounds() {
        assert!(detect!(String: Clone + Send).present());
        assert!(!detect!(std::rc::Rc<u8>: Clone + Send).present());
    }

    #[test]
    fn test_select_passes_argument() {
        assert_eq!(Has.select(|x: i32| x + 1, |x: i32| x - 1, 10), 11);
        assert_eq!(HasNot.select(|x: i32| x + 1, |x: i32| x - 1, 10), 9);
        const _: () = assert!(Has::PRESENT && !HasNot::PRESENT);
    }

    #[derive(Debug, PartialEq)]
    enum Arg {
        Int(i32),
        Text(String),
        Unit,
    }

    #[test]
    fn test_overload_closed_set() {
        let handle = overload! {
            Arg::Int(a) => format!("int: {}", a),
            Arg::Text(s) => format!("string: {}", s),
            _ => "no matching branch".to_string(),
        };
        assert_eq!(handle(Arg::Int(1)), "int: 1");
        assert_eq!(handle(Arg::Text("abc".into())), "string: abc");
        assert_eq!(handle(Arg::Unit), "no matching branch");
    }
}
