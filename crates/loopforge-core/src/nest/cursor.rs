// Lexicographic walk over the index tuples of a validated nest.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::bounds::Bound;

fn resolved(bounds: &[Bound], level: usize, buf: &[usize]) -> Range<usize> {
    // Nests are validated on construction, so resolution cannot fail here.
    match bounds[level].resolve(level, buf) {
        Ok(range) => range,
        Err(_) => 0..0,
    }
}

/// Fills `buf[level..]` with the smallest completion of `buf[..level]`.
fn seek(bounds: &[Bound], buf: &mut [usize], level: usize) -> bool {
    if level == bounds.len() {
        return true;
    }
    for value in resolved(bounds, level, buf) {
        buf[level] = value;
        if seek(bounds, buf, level + 1) {
            return true;
        }
    }
    false
}

/// Moves `buf` to the next tuple in lexicographic order.
fn advance(bounds: &[Bound], buf: &mut [usize]) -> bool {
    for level in (0..bounds.len()).rev() {
        let end = resolved(bounds, level, buf).end;
        let mut value = buf[level] + 1;
        while value < end {
            buf[level] = value;
            if seek(bounds, buf, level + 1) {
                return true;
            }
            value += 1;
        }
    }
    false
}

/// Calls `f` once per tuple, outermost level first.
pub(crate) fn walk<B, F>(bounds: &[Bound], buf: &mut B, mut f: F)
where
    B: AsMut<[usize]>,
    F: FnMut(&B),
{
    if bounds.len() == 1 {
        for value in resolved(bounds, 0, &[]) {
            buf.as_mut()[0] = value;
            f(buf);
        }
        return;
    }

    if !seek(bounds, buf.as_mut(), 0) {
        return;
    }
    loop {
        f(buf);
        if !advance(bounds, buf.as_mut()) {
            break;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Active,
    Done,
}

/// Iterator over the index tuples of a nest, in lexicographic order.
///
/// Created by [`Nest::iter`](crate::Nest::iter) and
/// [`DynNest::iter`](crate::DynNest::iter).
#[derive(Debug, Clone)]
pub struct Tuples<'a, B> {
    bounds: &'a [Bound],
    buf: B,
    state: State,
}

impl<'a, B> Tuples<'a, B> {
    pub(crate) fn new(bounds: &'a [Bound], buf: B) -> Self {
        Self {
            bounds,
            buf,
            state: State::Fresh,
        }
    }
}

impl<B> Iterator for Tuples<'_, B>
where
    B: AsMut<[usize]> + Clone,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let found = match self.state {
            State::Fresh => seek(self.bounds, self.buf.as_mut(), 0),
            State::Active => advance(self.bounds, self.buf.as_mut()),
            State::Done => return None,
        };
        if found {
            self.state = State::Active;
            Some(self.buf.clone())
        } else {
            self.state = State::Done;
            None
        }
    }
}

impl<B> FusedIterator for Tuples<'_, B> where B: AsMut<[usize]> + Clone {}
