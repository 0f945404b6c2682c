use std::cmp::Ordering;

/// Watches the comparisons a sort performs.
///
/// Implemented for `()` (ignores everything), [`CompCounter`] and any
/// `FnMut(&T, &T, Ordering)` closure.
pub trait CompareObserver<T: ?Sized> {
    /// Called after `a.cmp(b)` returned `result`.
    fn on_compare(&mut self, a: &T, b: &T, result: Ordering);
}

impl<T: ?Sized> CompareObserver<T> for () {
    #[inline(always)]
    fn on_compare(&mut self, _a: &T, _b: &T, _result: Ordering) {}
}

impl<T: ?Sized, F> CompareObserver<T> for F
where
    F: FnMut(&T, &T, Ordering),
{
    #[inline(always)]
    fn on_compare(&mut self, a: &T, b: &T, result: Ordering) {
        self(a, b, result);
    }
}

/// Counts comparisons, independent of the element type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompCounter {
    count: u64,
}

impl CompCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl<T: ?Sized> CompareObserver<T> for CompCounter {
    #[inline(always)]
    fn on_compare(&mut self, _a: &T, _b: &T, _result: Ordering) {
        self.count += 1;
    }
}
