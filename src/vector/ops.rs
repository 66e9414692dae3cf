use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::traits::{Arithmetic, Element, FusedMultiplyAdd, MinMax, Multiply};
use crate::vector::Vector;

// ── Lane-wise arithmetic ────────────────────────────────────────────

impl<B: Arithmetic<T, N>, T: Element, const N: usize> Add for Vector<B, T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_repr(B::add(self.repr, rhs.repr))
    }
}

impl<B: Arithmetic<T, N>, T: Element, const N: usize> AddAssign for Vector<B, T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<B: Arithmetic<T, N>, T: Element, const N: usize> Sub for Vector<B, T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_repr(B::sub(self.repr, rhs.repr))
    }
}

impl<B: Arithmetic<T, N>, T: Element, const N: usize> SubAssign for Vector<B, T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<B: Multiply<T, N>, T: Element, const N: usize> Mul for Vector<B, T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_repr(B::mul(self.repr, rhs.repr))
    }
}

impl<B: Multiply<T, N>, T: Element, const N: usize> MulAssign for Vector<B, T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// ── Fused multiply-add ──────────────────────────────────────────────

impl<B: FusedMultiplyAdd<T, N>, T: Element, const N: usize> Vector<B, T, N> {
    /// `self * b + c` per lane, rounded once.
    #[inline]
    pub fn mul_add(self, b: Self, c: Self) -> Self {
        Self::from_repr(B::mul_add(self.repr, b.repr, c.repr))
    }
}

// ── Min / max ───────────────────────────────────────────────────────

impl<B: MinMax<T, N>, T: Element, const N: usize> Vector<B, T, N> {
    /// Lane-wise minimum. For floats a NaN operand never wins.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::from_repr(B::min(self.repr, rhs.repr))
    }

    /// Lane-wise maximum. For floats a NaN operand never wins.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_repr(B::max(self.repr, rhs.repr))
    }

    /// Smallest lane.
    #[inline]
    pub fn horizontal_min(self) -> T {
        B::horizontal_min(self.repr)
    }

    /// Largest lane.
    #[inline]
    pub fn horizontal_max(self) -> T {
        B::horizontal_max(self.repr)
    }
}
