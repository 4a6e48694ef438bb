use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedMul, One, Zero};

/// A trait representing the integer type used for capacities, flows and unit costs.
pub trait Amount:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + Hash
    + AddAssign
    + SubAssign
    + Zero
    + One
    + CheckedAdd
    + CheckedMul
    + Debug
    + Display
    + Default
{
}

impl Amount for i32 {}

impl Amount for i64 {}
