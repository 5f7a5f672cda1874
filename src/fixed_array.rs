use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::OutOfRangeError;

/// An array with a fixed length and checked element access.
///
/// The `FixedArray` owns exactly `N` elements, stored inline. Its length is
/// the const parameter `N` and cannot change; the only ways to mutate it are
/// indexed writes, [`fill`](FixedArray::fill), [`assign_from`](FixedArray::assign_from)
/// and [`swap`](FixedArray::swap).
///
/// Every indexed access is checked against `N`: [`at`](FixedArray::at)
/// reports an [`OutOfRangeError`], the `[]` operator panics with it.
///
/// `FixedArray<T, 0>` is an always empty array; every element access on it
/// fails. It dereferences to a slice, so the full slice API is available too.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedArray<T, const N: usize> {
    xs: [T; N],
}

/// A `FixedArray` of length zero.
pub type EmptyArray<T> = FixedArray<T, 0>;

impl<T, const N: usize> FixedArray<T, N> {
    /// The length of the array.
    pub const SIZE: usize = N;

    /// Create a new `FixedArray` with every element set to `T::default()`.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let array = FixedArray::<i32, 4>::new();
    /// assert_eq!(array, [0, 0, 0, 0]);
    /// ```
    pub fn new() -> Self
        where T: Default
    {
        Self::from_fn(|_| T::default())
    }

    /// Wrap an existing array.
    pub const fn from_array(xs: [T; N]) -> Self {
        FixedArray { xs }
    }

    /// Create a new `FixedArray` where element `i` is `f(i)`.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let squares = FixedArray::<usize, 4>::from_fn(|i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
        where F: FnMut(usize) -> T
    {
        FixedArray { xs: std::array::from_fn(f) }
    }

    /// Return the inner array.
    pub fn into_inner(self) -> [T; N] {
        self.xs
    }

    /// Return the number of elements, which is always `N`.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    /// Return the largest number of elements the array can hold, which is
    /// always `N`.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Return `true` if the array has no elements, that is if `N` is zero.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Return a reference to the element at `index`.
    ///
    /// **Errors** if `index` is not less than `N`. The error records the
    /// caller's location.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let array = FixedArray::from([1, 2, 3]);
    /// assert_eq!(array.at(2), Ok(&3));
    ///
    /// let err = array.at(3).unwrap_err();
    /// assert_eq!((err.index(), err.bound()), (3, 3));
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
        match self.xs.get(index) {
            Some(elt) => Ok(elt),
            None => Err(OutOfRangeError::new(index, N)),
        }
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// **Errors** if `index` is not less than `N`.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let mut array = FixedArray::from([1, 2, 3]);
    /// *array.at_mut(0).unwrap() = 10;
    /// assert_eq!(array, [10, 2, 3]);
    /// assert!(array.at_mut(5).is_err());
    /// ```
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        match self.xs.get_mut(index) {
            Some(elt) => Ok(elt),
            None => Err(OutOfRangeError::new(index, N)),
        }
    }

    /// Return a reference to the first element.
    ///
    /// ***Panics*** if the array is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.xs.first() {
            Some(elt) => elt,
            None => empty_access(),
        }
    }

    /// Return a mutable reference to the first element.
    ///
    /// ***Panics*** if the array is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.xs.first_mut() {
            Some(elt) => elt,
            None => empty_access(),
        }
    }

    /// Return a reference to the last element.
    ///
    /// ***Panics*** if the array is empty.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let array = FixedArray::from([1, 2, 3]);
    /// assert_eq!((*array.front(), *array.back()), (1, 3));
    /// ```
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.xs.last() {
            Some(elt) => elt,
            None => empty_access(),
        }
    }

    /// Return a mutable reference to the last element.
    ///
    /// ***Panics*** if the array is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.xs.last_mut() {
            Some(elt) => elt,
            None => empty_access(),
        }
    }

    /// Overwrite every element with a clone of `value`.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let mut array = FixedArray::<u8, 3>::new();
    /// array.fill(7);
    /// assert_eq!(array, [7, 7, 7]);
    /// ```
    pub fn fill(&mut self, value: T)
        where T: Clone
    {
        self.xs.fill(value);
    }

    /// Overwrite every element with a clone of `value`; same as `fill`.
    pub fn assign(&mut self, value: T)
        where T: Clone
    {
        self.fill(value);
    }

    /// Exchange the elements of `self` and `other`, element by element.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let mut a = FixedArray::from([1, 2]);
    /// let mut b = FixedArray::from([3, 4]);
    /// a.swap(&mut b);
    /// assert_eq!((a, b), (FixedArray::from([3, 4]), FixedArray::from([1, 2])));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        self.xs.swap_with_slice(&mut other.xs);
    }

    /// Copy every element of `rhs` into `self`, converting it to `T`.
    ///
    /// Both arrays have the same length by construction; a length mismatch
    /// does not compile.
    ///
    /// ```
    /// use fixedarray::FixedArray;
    ///
    /// let mut wide = FixedArray::<i64, 3>::new();
    /// wide.assign_from(&FixedArray::<i32, 3>::from([-1, 0, 1]));
    /// assert_eq!(wide, [-1, 0, 1]);
    /// ```
    ///
    /// ```compile_fail
    /// use fixedarray::FixedArray;
    ///
    /// let mut wide = FixedArray::<i64, 3>::new();
    /// wide.assign_from(&FixedArray::<i32, 2>::from([-1, 0]));
    /// ```
    pub fn assign_from<U>(&mut self, rhs: &FixedArray<U, N>) -> &mut Self
        where U: Clone + Into<T>
    {
        for (dst, src) in self.xs.iter_mut().zip(rhs.iter()) {
            *dst = src.clone().into();
        }
        self
    }

    /// Convert every element into `U`, keeping the length.
    pub fn convert<U>(self) -> FixedArray<U, N>
        where T: Into<U>
    {
        FixedArray { xs: self.xs.map(Into::into) }
    }

    /// Return an iterator over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.xs.iter()
    }

    /// Return an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.xs.iter_mut()
    }

    /// Return a slice containing all elements of the array.
    pub fn as_slice(&self) -> &[T] {
        &self.xs
    }

    /// Return a mutable slice containing all elements of the array.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.xs
    }
}

#[cold]
#[track_caller]
fn empty_access() -> ! {
    panic!("{}", OutOfRangeError::new(0, 0))
}

/// Exchange the elements of two arrays of the same length.
pub fn swap<T, const N: usize>(a: &mut FixedArray<T, N>, b: &mut FixedArray<T, N>) {
    a.swap(b)
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    /// ***Panics*** with an [`OutOfRangeError`] message if `index >= N`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        &self.xs
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.xs
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    /// Return a `FixedArray` of default elements.
    fn default() -> Self {
        FixedArray::new()
    }
}

/// Create a `FixedArray` from an array.
///
/// ```
/// use fixedarray::FixedArray;
///
/// let array = FixedArray::from([1, 2, 3]);
/// assert_eq!(array.len(), 3);
/// ```
impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(xs: [T; N]) -> Self {
        FixedArray { xs }
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(array: FixedArray<T, N>) -> Self {
        array.xs
    }
}

/// Iterate the array by value, in index order.
impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.xs)
    }
}

impl<'a, T: 'a, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: 'a, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.xs == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedArray<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.xs[..] == *other
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] { &self.xs }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] { &mut self.xs }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] { &self.xs }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.xs }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(&**self, f) }
}

#[cfg(feature = "zeroize")]
/// Zeroize every element of the `FixedArray` when the `zeroize` feature is enabled.
///
/// ```
/// use fixedarray::FixedArray;
/// use zeroize::Zeroize;
/// let mut array = FixedArray::from([1, 2, 3]);
/// array.zeroize();
/// assert_eq!(array, [0, 0, 0]);
/// ```
impl<Z: zeroize::Zeroize, const N: usize> zeroize::Zeroize for FixedArray<Z, N> {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.xs);
    }
}
