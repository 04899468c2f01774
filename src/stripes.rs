//! Stripe allocation.
//!
//! Splits a total extent (rows for a horizontal flag, columns for a vertical
//! one) into the five bands of the flag using the fixed 8:6:6:6:8 weights.

use crate::palette::{Color, BLUE, PINK, WHITE};

/// Smallest extent that still shows every stripe.
pub const MIN_EXTENT: usize = 5;

const WEIGHTS: [usize; 5] = [8, 6, 6, 6, 8];
const TOTAL_WEIGHT: usize = 34;

/// Sizes of the five stripes, outermost blue to outermost blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeHeights {
    pub blue1: usize,
    pub pink1: usize,
    pub white: usize,
    pub pink2: usize,
    pub blue2: usize,
}

impl StripeHeights {
    /// Sizes in drawing order.
    pub fn as_array(&self) -> [usize; 5] {
        [self.blue1, self.pink1, self.white, self.pink2, self.blue2]
    }

    pub fn total(&self) -> usize {
        self.as_array().iter().sum()
    }

    /// Pairs each stripe size with the color it is painted in.
    pub fn bands(&self) -> [(usize, Color); 5] {
        [
            (self.blue1, BLUE),
            (self.pink1, PINK),
            (self.white, WHITE),
            (self.pink2, PINK),
            (self.blue2, BLUE),
        ]
    }

    /// Offset of the middle row of the white stripe, counted from the first row.
    pub fn white_center(&self) -> usize {
        self.blue1 + self.pink1 + self.white / 2
    }
}

/// Computes the five stripe sizes for `extent`.
///
/// The extent is clamped to [`MIN_EXTENT`]. The returned sizes always sum to
/// the clamped extent and none of them is zero.
pub fn allocate(extent: usize) -> StripeHeights {
    let extent = extent.max(MIN_EXTENT);

    let sizes = WEIGHTS.map(|weight| (extent * weight / TOTAL_WEIGHT).max(1));
    let [blue1, pink1, white, pink2, blue2] = reconcile(sizes, extent);

    StripeHeights {
        blue1,
        pink1,
        white,
        pink2,
        blue2,
    }
}

/// Stripe indices, in drawing order, that receive leftover units.
const GROW_ORDER: [usize; 5] = [0, 4, 1, 3, 2];
/// Stripe indices, in drawing order, that give up units when the floored
/// sizes overshoot.
const SHRINK_ORDER: [usize; 5] = [2, 1, 3, 0, 4];

/// Adjusts `sizes` until they sum to `extent`.
///
/// Shrinking never takes a stripe below one; when every stripe is already
/// at one the sizes are returned as they are.
fn reconcile(mut sizes: [usize; 5], extent: usize) -> [usize; 5] {
    let sum: usize = sizes.iter().sum();

    if sum < extent {
        for index in GROW_ORDER.iter().cycle().take(extent - sum) {
            sizes[*index] += 1;
        }
    }

    if sum > extent {
        for _ in 0..sum - extent {
            let Some(index) = SHRINK_ORDER.into_iter().find(|index| sizes[*index] > 1) else {
                break;
            };
            sizes[index] -= 1;
        }
    }

    sizes
}
