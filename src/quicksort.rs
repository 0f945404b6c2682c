use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::process;
use std::ptr;

/// Ranges with `high - low` below this use `low` as pivot, median-of-three costs more than it
/// gains on them.
const SMALL_RANGE_PIVOT_THRESHOLD: usize = 5;

/// Sorts `v` in ascending order.
///
/// Recurses into the smaller side of each partition and continues with the larger side in the
/// loop, which bounds the stack depth to *O*(log(*n*)) regardless of pivot quality.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        // 0 or 1 elements, nothing to do.
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, cmp);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, cmp);
            v = right;
        } else {
            quicksort(right, cmp);
            v = left;
        }
    }
}

/// Picks the pivot index for the closed range `[0, v.len() - 1]`.
///
/// Median-of-three of the first, middle and last element. Each median test uses two three-way
/// comparisons and checks that the candidate lies between the other two, which treats ties
/// uniformly instead of favoring one side.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn choose_pivot<T, F>(v: &[T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let low = 0;
    let high = v.len() - 1;

    if high - low < SMALL_RANGE_PIVOT_THRESHOLD {
        return low;
    }

    let mid = (low + high) / 2;

    let sign = |ord: Ordering| ord as i8;

    if sign(cmp(&v[mid], &v[low])) * sign(cmp(&v[low], &v[high])) >= 0 {
        low
    } else if sign(cmp(&v[low], &v[mid])) * sign(cmp(&v[mid], &v[high])) >= 0 {
        mid
    } else {
        high
    }
}

/// Partitions `v` around a pivot picked by `choose_pivot`, using the ping-pong scan.
///
/// On return every element left of the returned index is less than or equal to the pivot, every
/// element right of it is greater than or equal to the pivot, and the pivot itself is at the
/// returned index. Elements equal to the pivot are never moved by the scan.
///
/// If `cmp` does not implement a total order the resulting order is unspecified. All original
/// elements will remain in `v` and any possible modifications via interior mutability will be
/// observable. Same is true if `cmp` panics.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let low = 0;
    let high = len - 1;

    let pivot_pos = choose_pivot(v, cmp);

    // Allows for panic-free code-gen by proving this property to the compiler. Any other value
    // means the pivot selection is broken, continuing would read out of bounds.
    if pivot_pos > high {
        process::abort();
    }

    let v_base = v.as_mut_ptr();

    // SAFETY: `low`, `pivot_pos`, `cur_low` and `cur_high` stay within `[low, high]` whenever they
    // are dereferenced, see the loop below. There is always exactly one slot without a logical
    // owner, the one at `gap.pos`. It is never read, only written, and `gap` fills it with the
    // pivot when it goes out of scope, even if `cmp` panics. Comparisons only ever see the pivot
    // through `gap.value` and the other elements at their current location, so mutations via
    // interior mutability are kept.
    unsafe {
        // Move the pivot out. `low` becomes the available slot, its element moves into the slot the
        // pivot came from. No comparison happens in between, so there is nothing that could panic.
        let pivot = ManuallyDrop::new(ptr::read(v_base.add(pivot_pos)));
        if pivot_pos != low {
            ptr::copy_nonoverlapping(v_base.add(low), v_base.add(pivot_pos), 1);
        }

        let mut gap = GapGuard {
            pos: v_base.add(low),
            value: pivot,
        };
        let mut available = low;

        // `cur_high` starts one past the range. While working from the high side
        // `available == cur_low`, while working from the low side `available == cur_high`. The
        // moving pointer can therefore only meet the other one on the available slot, which must
        // not be compared and ends the scan.
        let mut cur_low = low;
        let mut cur_high = high + 1;
        let mut working_from_low = false;

        while cur_low < cur_high {
            if working_from_low {
                cur_low += 1;
                if cur_low == cur_high {
                    break;
                }

                let cur = v_base.add(cur_low);
                if cmp(&*cur, &*gap.value) == Ordering::Greater {
                    ptr::copy_nonoverlapping(cur, gap.pos, 1);
                    gap.pos = cur;
                    available = cur_low;
                    working_from_low = false;
                }
            } else {
                cur_high -= 1;
                if cur_high == cur_low {
                    break;
                }

                let cur = v_base.add(cur_high);
                if cmp(&*gap.value, &*cur) == Ordering::Greater {
                    ptr::copy_nonoverlapping(cur, gap.pos, 1);
                    gap.pos = cur;
                    available = cur_high;
                    working_from_low = true;
                }
            }
        }

        debug_assert!(cur_low == cur_high && cur_low == available);

        // Writes the pivot into its final position.
        drop(gap);

        available
    }
}

/// Owns the value moved out of a slice and writes it into `pos` when dropped.
struct GapGuard<T> {
    pos: *mut T,
    value: ManuallyDrop<T>,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `pos` always points to the single slot without a logical owner, so this
        // restores a state where every element is present exactly once.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.pos, 1);
        }
    }
}
