pub mod aliases;
mod lanes;
mod ops;

use core::fmt;
use core::mem::size_of;
use core::ops::{Deref, DerefMut};

use crate::traits::{Element, Register};

/// An immutable `N`-lane vector of `T`, held in one register of backend `B`.
///
/// A `Vector` is a plain value: `Copy`, no heap, and every operation returns
/// a new vector. Which operations exist depends on the capabilities `B`
/// implements for `(T, N)`; see [`crate::traits`].
///
/// # Examples
///
/// ```
/// use lanewise::{Scalar, Vector};
///
/// let a = Vector::<Scalar, i32, 4>::from_array([1, 2, 3, 4]);
/// let b = Vector::<Scalar, i32, 4>::splat(10);
/// assert_eq!((a + b).to_array(), [11, 12, 13, 14]);
/// assert_eq!(a.horizontal_max(), 4);
/// ```
pub struct Vector<B, T, const N: usize>
where
    B: Register<T, N>,
    T: Element,
{
    pub(crate) repr: <B as Register<T, N>>::Repr,
}

impl<B: Register<T, N>, T: Element, const N: usize> Clone for Vector<B, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Register<T, N>, T: Element, const N: usize> Copy for Vector<B, T, N> {}

impl<B: Register<T, N>, T: Element, const N: usize> Vector<B, T, N> {
    /// Number of lanes.
    pub const LANES: usize = N;

    /// Register width in bytes; also the alignment required by the aligned
    /// load/store functions.
    pub const BYTES: usize = N * size_of::<T>();

    #[inline(always)]
    pub(crate) fn from_repr(repr: <B as Register<T, N>>::Repr) -> Self {
        const { assert!(N > 0, "a vector has at least one lane") };
        Self { repr }
    }

    /// Raw backend register.
    #[inline]
    pub fn into_repr(self) -> <B as Register<T, N>>::Repr {
        self.repr
    }

    /// Every lane equals `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_repr(B::splat(value))
    }

    #[inline]
    pub fn from_array(lanes: [T; N]) -> Self {
        // Safety: an array holds exactly N elements.
        unsafe { Self::load(lanes.as_ptr()) }
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        let mut out = [T::default(); N];
        // Safety: `out` holds exactly N elements.
        unsafe { self.store(out.as_mut_ptr()) };
        out
    }

    /// Value of lane `index`.
    ///
    /// # Panics
    ///
    /// If `index >= N`.
    #[inline]
    pub fn lane(self, index: usize) -> T {
        self.to_array()[index]
    }

    /// Loads the first `N` elements of `src`.
    ///
    /// # Panics
    ///
    /// If `src` is shorter than `N`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Self {
        assert!(src.len() >= N, "slice of length {} is shorter than {N} lanes", src.len());
        unsafe { Self::load(src.as_ptr()) }
    }

    /// Loads all of `src` into the leading lanes; the remaining lanes are zero.
    ///
    /// # Panics
    ///
    /// If `src` is longer than `N`.
    #[inline]
    pub fn load_prefix(src: &[T]) -> Self {
        assert!(src.len() <= N, "prefix of length {} exceeds {N} lanes", src.len());
        unsafe { Self::load_partial(src.as_ptr(), src.len()) }
    }

    /// Writes all lanes to the first `N` elements of `dst`.
    ///
    /// # Panics
    ///
    /// If `dst` is shorter than `N`.
    #[inline]
    pub fn write_to_slice(self, dst: &mut [T]) {
        assert!(dst.len() >= N, "slice of length {} is shorter than {N} lanes", dst.len());
        unsafe { self.store(dst.as_mut_ptr()) }
    }

    /// Writes the leading `dst.len()` lanes to `dst`.
    ///
    /// # Panics
    ///
    /// If `dst` is longer than `N`.
    #[inline]
    pub fn store_prefix(self, dst: &mut [T]) {
        assert!(dst.len() <= N, "prefix of length {} exceeds {N} lanes", dst.len());
        unsafe { self.store_partial(dst.as_mut_ptr(), dst.len()) }
    }

    /// Aligned load from [`Aligned`] storage. Only for shapes whose width
    /// divides [`Aligned::ALIGN`]; other shapes are rejected at compile time.
    #[inline]
    pub fn load_aligned_from(src: &Aligned<[T; N]>) -> Self {
        const { assert!(Aligned::<()>::ALIGN % Self::BYTES == 0, "shape width does not divide `Aligned` alignment") };
        // Safety: `src` is `Aligned::ALIGN`-aligned, and `BYTES` divides that.
        unsafe { Self::load_aligned(src.0.as_ptr()) }
    }

    /// Aligned store into [`Aligned`] storage, with the same shape limit as
    /// [`Self::load_aligned_from`].
    #[inline]
    pub fn store_aligned_to(self, dst: &mut Aligned<[T; N]>) {
        const { assert!(Aligned::<()>::ALIGN % Self::BYTES == 0, "shape width does not divide `Aligned` alignment") };
        // Safety: as above.
        unsafe { self.store_aligned(dst.0.as_mut_ptr()) }
    }

    /// Reads `N` contiguous elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `N` elements. No alignment is required.
    #[inline]
    pub unsafe fn load(ptr: *const T) -> Self {
        Self::from_repr(unsafe { B::load(ptr) })
    }

    /// Reads `N` contiguous elements from a register-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `N` elements and aligned to
    /// [`Self::BYTES`]. Misalignment is undefined behaviour; debug builds
    /// abort with a diagnostic instead.
    #[inline]
    pub unsafe fn load_aligned(ptr: *const T) -> Self {
        debug_assert!(
            ptr as usize % Self::BYTES == 0,
            "aligned load of {}x{N} requires {}-byte alignment, got {ptr:p}",
            T::NAME,
            Self::BYTES
        );
        Self::from_repr(unsafe { B::load_aligned(ptr) })
    }

    /// Reads the first `count` elements; lanes `count..N` are zero.
    ///
    /// Memory past `ptr + count` is never read.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `count` elements and `count <= N`.
    #[inline]
    pub unsafe fn load_partial(ptr: *const T, count: usize) -> Self {
        debug_assert!(count <= N, "partial load of {count} elements exceeds {}x{N}", T::NAME);
        Self::from_repr(unsafe { B::load_partial(ptr, count) })
    }

    /// Writes all `N` lanes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `N` elements.
    #[inline]
    pub unsafe fn store(self, ptr: *mut T) {
        unsafe { B::store(ptr, self.repr) }
    }

    /// Writes all `N` lanes to a register-aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `N` elements and aligned to
    /// [`Self::BYTES`].
    #[inline]
    pub unsafe fn store_aligned(self, ptr: *mut T) {
        debug_assert!(
            ptr as usize % Self::BYTES == 0,
            "aligned store of {}x{N} requires {}-byte alignment, got {ptr:p}",
            T::NAME,
            Self::BYTES
        );
        unsafe { B::store_aligned(ptr, self.repr) }
    }

    /// Writes lanes `0..count` and nothing past them.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `count` elements and `count <= N`.
    #[inline]
    pub unsafe fn store_partial(self, ptr: *mut T, count: usize) {
        debug_assert!(count <= N, "partial store of {count} elements exceeds {}x{N}", T::NAME);
        unsafe { B::store_partial(ptr, self.repr, count) }
    }
}

impl<B: Register<T, N>, T: Element, const N: usize> fmt::Debug for Vector<B, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_array().iter()).finish()
    }
}

impl<B: Register<T, N>, T: Element, const N: usize> PartialEq for Vector<B, T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<B: Register<T, N>, T: Element, const N: usize> From<[T; N]> for Vector<B, T, N> {
    #[inline]
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<B: Register<T, N>, T: Element, const N: usize> From<Vector<B, T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<B, T, N>) -> Self {
        v.to_array()
    }
}

/// A value aligned to 64 bytes, the widest register in the crate.
///
/// Use `Aligned<[T; N]>` as the backing store for aligned loads and stores.
///
/// ```
/// use lanewise::{Aligned, Scalar, Vector};
///
/// let src = Aligned([1.0_f32; 16]);
/// let v = Vector::<Scalar, f32, 16>::load_aligned_from(&src);
/// let mut dst = Aligned([0.0_f32; 16]);
/// v.store_aligned_to(&mut dst);
/// assert_eq!(dst.0, src.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(64))]
pub struct Aligned<A>(pub A);

impl<A> Aligned<A> {
    /// Alignment in bytes.
    pub const ALIGN: usize = 64;
}

impl<A> Deref for Aligned<A> {
    type Target = A;

    #[inline]
    fn deref(&self) -> &A {
        &self.0
    }
}

impl<A> DerefMut for Aligned<A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut A {
        &mut self.0
    }
}
