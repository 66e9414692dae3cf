use crate::traits::{Concat, Convert, ConvertPair, Element, Extract, Register};
use crate::vector::Vector;

// ── Extract / concat ────────────────────────────────────────────────

impl<B: Register<T, N>, T: Element, const N: usize> Vector<B, T, N> {
    /// The `W` lanes starting at `offset`.
    ///
    /// `offset` must be a multiple of `W` with `offset + W <= N`; anything else
    /// is a contract violation (checked in debug builds).
    ///
    /// ```
    /// use lanewise::{Scalar, Vector};
    ///
    /// let v = Vector::<Scalar, i32, 8>::from_array([0, 1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(v.extract::<4>(4).to_array(), [4, 5, 6, 7]);
    /// ```
    #[inline]
    pub fn extract<const W: usize>(self, offset: usize) -> Vector<B, T, W>
    where
        B: Extract<T, N, W>,
    {
        const { assert!(W < N && N % W == 0, "extract width must divide the lane count") };
        debug_assert!(
            offset % W == 0 && offset + W <= N,
            "extract offset {offset} of {}x{W} from {}x{N} must be a multiple of {W} below {N}",
            T::NAME,
            T::NAME
        );
        Vector::from_repr(<B as Extract<T, N, W>>::extract(self.repr, offset))
    }

    /// Joins two half-width vectors: lanes `0..W` from `lo`, `W..N` from `hi`.
    ///
    /// ```
    /// use lanewise::{Scalar, Vector};
    ///
    /// let lo = Vector::<Scalar, u8, 2>::from_array([1, 2]);
    /// let hi = Vector::<Scalar, u8, 2>::from_array([3, 4]);
    /// assert_eq!(Vector::<Scalar, u8, 4>::concat(lo, hi).to_array(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn concat<const W: usize>(lo: Vector<B, T, W>, hi: Vector<B, T, W>) -> Self
    where
        B: Concat<T, W, N>,
    {
        const { assert!(2 * W == N, "concat joins two halves of the result") };
        Self::from_repr(<B as Concat<T, W, N>>::concat(lo.repr, hi.repr))
    }
}

// ── Conversion ──────────────────────────────────────────────────────

impl<B: Register<S, N>, S: Element, const N: usize> Vector<B, S, N> {
    /// Converts every lane to `D`, keeping the lane count.
    ///
    /// Integer narrowing saturates; float narrowing rounds to nearest even.
    ///
    /// ```
    /// use lanewise::{Scalar, Vector};
    ///
    /// let v = Vector::<Scalar, i32, 4>::from_array([200, 300, -5, 0]);
    /// assert_eq!(v.convert::<u8>().to_array(), [200, 255, 0, 0]);
    /// ```
    #[inline]
    pub fn convert<D: Element>(self) -> Vector<B, D, N>
    where
        B: Convert<S, D, N>,
    {
        Vector::from_repr(<B as Convert<S, D, N>>::convert(self.repr))
    }
}

impl<B: Register<D, M>, D: Element, const M: usize> Vector<B, D, M> {
    /// Converts two `N`-lane vectors into one of `M = 2N` lanes: `a` fills
    /// lanes `0..N`, `b` fills `N..M`.
    #[inline]
    pub fn convert_pair<S: Element, const N: usize>(a: Vector<B, S, N>, b: Vector<B, S, N>) -> Self
    where
        B: ConvertPair<S, D, N, M>,
    {
        const { assert!(2 * N == M, "convert_pair doubles the lane count") };
        Self::from_repr(<B as ConvertPair<S, D, N, M>>::convert_pair(a.repr, b.repr))
    }
}
