//! Per-element operations over heterogeneous tuples.
//!
//! A visitor is one value implementing [`ElementVisitor`] (or
//! [`ElementMapper`]) for every element type of the tuple; trait resolution
//! picks the matching implementation for each position. Elements are
//! visited in ascending position order and each call receives the position
//! as an [`Index`], so a visitor can branch on it at compile time.
//!
//! Implemented for tuples of 1 to 12 elements.
//!
//! # Examples
//!
//! ```
//! use loopforge_core::tuple::{ElementVisitor, TupleFold};
//! use loopforge_core::Index;
//!
//! struct SkipSecond;
//!
//! impl<T: Copy + Into<f64>> ElementVisitor<T, f64> for SkipSecond {
//!     fn visit<const I: usize>(&mut self, element: &T, _: Index<I>, sum: &mut f64) {
//!         if I != 1 {
//!             *sum += (*element).into();
//!         }
//!     }
//! }
//!
//! let mut sum = 0.0;
//! (2i32, 7i32, 1.5f64).fold(&mut SkipSecond, &mut sum);
//! assert_eq!(sum, 3.5);
//! ```

mod typelist;

#[cfg(test)]
mod tests;

pub use typelist::{same_type, size, Front, NoSuchType, PopFront, PushBack, PushFront, TypeList};

use crate::index::Index;

/// Callback for one element type, threading a state value through the fold.
pub trait ElementVisitor<T, S> {
    /// Called once for the element at position `I`.
    fn visit<const I: usize>(&mut self, element: &T, index: Index<I>, state: &mut S);
}

/// Callback producing one output element per input element.
pub trait ElementMapper<T> {
    type Output;

    /// Maps the element at position `I`.
    fn map<const I: usize>(&mut self, element: &T, index: Index<I>) -> Self::Output;
}

/// Tuples whose every element type is accepted by `V`.
pub trait TupleFold<V, S> {
    /// Number of elements.
    const LEN: usize;

    /// Applies `visitor` to each element in ascending position order.
    fn fold(&self, visitor: &mut V, state: &mut S);
}

/// Tuples whose every element type is accepted by `M`.
pub trait TupleTransform<M> {
    /// Tuple of the mapped elements.
    type Output;

    /// Maps each element in ascending position order into a new tuple.
    fn transform(&self, mapper: &mut M) -> Self::Output;
}

/// Applies `visitor` to each element without threading any state.
pub fn for_each_element<T, V>(tuple: &T, visitor: &mut V)
where
    T: TupleFold<V, ()>,
{
    tuple.fold(visitor, &mut ());
}

macro_rules! impl_tuple_ops {
    ($len:expr; $($T:ident $idx:tt),+) => {
        impl<V, S, $($T),+> TupleFold<V, S> for ($($T,)+)
        where
            $(V: ElementVisitor<$T, S>,)+
        {
            const LEN: usize = $len;

            #[inline]
            fn fold(&self, visitor: &mut V, state: &mut S) {
                $(<V as ElementVisitor<$T, S>>::visit(visitor, &self.$idx, Index::<$idx>, state);)+
            }
        }

        impl<M, $($T),+> TupleTransform<M> for ($($T,)+)
        where
            $(M: ElementMapper<$T>,)+
        {
            type Output = ($(<M as ElementMapper<$T>>::Output,)+);

            #[inline]
            fn transform(&self, mapper: &mut M) -> Self::Output {
                ($(<M as ElementMapper<$T>>::map(mapper, &self.$idx, Index::<$idx>),)+)
            }
        }
    };
}

impl_tuple_ops!(1; A 0);
impl_tuple_ops!(2; A 0, B 1);
impl_tuple_ops!(3; A 0, B 1, C 2);
impl_tuple_ops!(4; A 0, B 1, C 2, D 3);
impl_tuple_ops!(5; A 0, B 1, C 2, D 3, E 4);
impl_tuple_ops!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple_ops!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple_ops!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuple_ops!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuple_ops!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_tuple_ops!(11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_tuple_ops!(12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
