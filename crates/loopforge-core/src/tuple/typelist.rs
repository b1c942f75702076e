//! Type-level list operations on tuples.
//!
//! A tuple type doubles as a list of types. Operations are associated
//! types, so they are resolved entirely by the compiler:
//!
//! ```
//! use loopforge_core::assert_type_eq;
//! use loopforge_core::tuple::{size, Front, NoSuchType, PopFront, PushBack};
//!
//! type List = (f64, char, bool, f64);
//!
//! const _: () = assert!(size::<List>() == 4);
//! assert_type_eq!(Front<List>, f64);
//! assert_type_eq!(PopFront<List>, (char, bool, f64));
//! assert_type_eq!(PushBack<List, char>, (f64, char, bool, f64, char));
//! assert_type_eq!(Front<()>, NoSuchType);
//! ```

use std::any::TypeId;

/// Placeholder produced by operations that have no answer, such as the
/// front of an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoSuchType;

/// A tuple viewed as a list of types.
///
/// Implemented for tuples of 0 to 11 elements, so every push stays within
/// the 12-element tuples the standard library supports.
pub trait TypeList {
    /// Number of element types.
    const LEN: usize;

    /// First element type, or [`NoSuchType`] for the empty list.
    type Front;

    /// The list without its first element, or [`NoSuchType`] for the empty list.
    type PopFront;

    /// The list with `X` prepended.
    type PushFront<X>;

    /// The list with `X` appended.
    type PushBack<X>;
}

/// Number of element types in `L`.
pub const fn size<L: TypeList>() -> usize {
    L::LEN
}

pub type Front<L> = <L as TypeList>::Front;
pub type PopFront<L> = <L as TypeList>::PopFront;
pub type PushFront<L, X> = <L as TypeList>::PushFront<X>;
pub type PushBack<L, X> = <L as TypeList>::PushBack<X>;

/// Returns true if `A` and `B` are the same type.
pub fn same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Fails compilation unless both types are identical.
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {
        const _: fn() = || {
            let _: ::core::marker::PhantomData<$a> = ::core::marker::PhantomData::<$b>;
        };
    };
}

impl TypeList for () {
    const LEN: usize = 0;
    type Front = NoSuchType;
    type PopFront = NoSuchType;
    type PushFront<X> = (X,);
    type PushBack<X> = (X,);
}

macro_rules! impl_type_list {
    ($len:expr; $H:ident $(, $R:ident)*) => {
        impl<$H $(, $R)*> TypeList for ($H, $($R,)*) {
            const LEN: usize = $len;
            type Front = $H;
            type PopFront = ($($R,)*);
            type PushFront<X> = (X, $H, $($R,)*);
            type PushBack<X> = ($H, $($R,)* X,);
        }
    };
}

impl_type_list!(1; A);
impl_type_list!(2; A, B);
impl_type_list!(3; A, B, C);
impl_type_list!(4; A, B, C, D);
impl_type_list!(5; A, B, C, D, E);
impl_type_list!(6; A, B, C, D, E, F);
impl_type_list!(7; A, B, C, D, E, F, G);
impl_type_list!(8; A, B, C, D, E, F, G, H);
impl_type_list!(9; A, B, C, D, E, F, G, H, I);
impl_type_list!(10; A, B, C, D, E, F, G, H, I, J);
impl_type_list!(11; A, B, C, D, E, F, G, H, I, J, K);
