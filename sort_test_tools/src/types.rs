use std::cell::RefCell;
use std::cmp::Ordering;

// Very large stack value, moving it is expensive compared to comparing it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    values: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0i64; 128];
        let mut val_i64 = val as i64;

        for elem in &mut values {
            *elem = val_i64;
            val_i64 = std::hint::black_box(val_i64 + 1);
        }
        Self { values }
    }

    fn as_i64(&self) -> i64 {
        self.values[11] + self.values[55] + self.values[77]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_i64().cmp(&other.as_i64())
    }
}

// 16 byte stack value, with more expensive comparison.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let x = val_f + 0.1;
        let y = val_f.log(4.1);

        assert!(y < x);
        assert!(x.is_normal() && y.is_normal());

        Self { x, y }
    }
}

// This is kind of hacky, but we know we only have normal comparable floats in there.
impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Simulate expensive comparison function.
        let this_div = self.x / self.y;
        let other_div = other.x / other.y;

        this_div.total_cmp(&other_div)
    }
}

/// Comparison installed for [`BadOrd`].
pub type BadCmp = Box<dyn FnMut(&i32, &i32) -> Ordering>;

thread_local! {
    static BAD_CMP: RefCell<Option<BadCmp>> = const { RefCell::new(None) };
}

/// An `i32` whose `Ord` implementation is whatever comparison was installed with
/// [`BadOrd::with_cmp`] on the current thread, typically one that violates total order.
///
/// Outside of `with_cmp` it compares like `i32`.
#[derive(Clone, Copy, Debug)]
pub struct BadOrd(pub i32);

impl BadOrd {
    /// Runs `f` with `cmp` installed as the comparison of every `BadOrd` on this thread.
    pub fn with_cmp<R>(cmp: BadCmp, f: impl FnOnce() -> R) -> R {
        struct Uninstall;

        impl Drop for Uninstall {
            fn drop(&mut self) {
                BAD_CMP.with(|bad_cmp| bad_cmp.borrow_mut().take());
            }
        }

        BAD_CMP.with(|bad_cmp| *bad_cmp.borrow_mut() = Some(cmp));
        let _uninstall = Uninstall;

        f()
    }
}

impl PartialEq for BadOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BadOrd {}

impl PartialOrd for BadOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BadOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        BAD_CMP.with(|bad_cmp| match bad_cmp.borrow_mut().as_mut() {
            Some(cmp) => cmp(&self.0, &other.0),
            None => self.0.cmp(&other.0),
        })
    }
}
