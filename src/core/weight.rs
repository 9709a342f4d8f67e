use std::{cmp::Ordering, ops::Add};

/// Numeric type usable as an edge weight.
///
/// Integer and floating point primitives are supported out of the box.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered counterpart of the type, used as a priority in heaps.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;

    /// Returns `true` if the type cannot represent negative values. Algorithms
    /// use this to skip negativity checks.
    fn is_unsigned() -> bool;

    /// Adds two weights, returning `None` if the sum is not representable.
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

/// A value ordered by its weight only.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

/// Float wrapper with total ordering given by [`f64::total_cmp`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct OrderedFloat<T>(T);

macro_rules! impl_ordered_float {
    ($ty:ty) => {
        impl Ord for OrderedFloat<$ty> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Eq for OrderedFloat<$ty> {}

        impl From<$ty> for OrderedFloat<$ty> {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }

        impl From<OrderedFloat<$ty>> for $ty {
            fn from(value: OrderedFloat<$ty>) -> Self {
                value.0
            }
        }
    };
}

impl_ordered_float!(f32);
impl_ordered_float!(f64);

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                0.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(self + other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
