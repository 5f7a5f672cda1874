use std::ffi::CStr;
use std::fmt;
use std::fmt::Write;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::str;

use crate::cursor::Cursor;
use crate::{FixedArray, OutOfRangeError};

/// A fixed size character buffer holding a bounded, nul-terminated string.
///
/// The `FixedCharBuffer` is a `FixedArray<u8, N>` with string operations on
/// top. It starts out zeroed. The string operations ([`format_string`],
/// [`append_format_string`], [`append_string`], [`terminate`]) never fail:
/// they write at most `N - 1` bytes, truncate what does not fit, and always
/// leave a terminator in byte `N - 1`. Plain indexed writes do not maintain
/// the terminator; [`get_string`] then returns an empty string.
///
/// `N` must be at least 1; `FixedCharBuffer<0>` fails to compile when
/// constructed.
///
/// [`format_string`]: FixedCharBuffer::format_string
/// [`append_format_string`]: FixedCharBuffer::append_format_string
/// [`append_string`]: FixedCharBuffer::append_string
/// [`terminate`]: FixedCharBuffer::terminate
/// [`get_string`]: FixedCharBuffer::get_string
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedCharBuffer<const N: usize> {
    xs: FixedArray<u8, N>,
}

impl<const N: usize> Default for FixedCharBuffer<N> {
    /// Return a zeroed `FixedCharBuffer`
    fn default() -> Self {
        FixedCharBuffer::new()
    }
}

impl<const N: usize> FixedCharBuffer<N> {
    const HAS_TERMINATOR: () = assert!(N > 0, "FixedCharBuffer needs room for a terminator");

    /// Create a new `FixedCharBuffer` with every byte zero.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// const EMPTY: FixedCharBuffer<8> = FixedCharBuffer::new();
    /// assert_eq!(EMPTY.get_string(), "");
    /// assert!(EMPTY.iter().all(|&b| b == 0));
    /// ```
    ///
    /// A buffer without room for the terminator is rejected at compile time.
    /// ```compile_fail
    /// let buf = fixedarray::FixedCharBuffer::<0>::new();
    /// ```
    pub const fn new() -> Self {
        let () = Self::HAS_TERMINATOR;
        FixedCharBuffer { xs: FixedArray::from_array([0; N]) }
    }

    /// Create a new `FixedCharBuffer` holding as much of `s` as fits in
    /// `N - 1` bytes.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let buf = FixedCharBuffer::<4>::from_str_truncate("hello");
    /// assert_eq!(buf.get_string(), "hel");
    /// ```
    pub fn from_str_truncate(s: &str) -> Self {
        let mut buf = Self::new();
        buf.append_string(s);
        buf
    }

    /// Return the size of the buffer in bytes, which is always `N`.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    /// Return the largest number of bytes the buffer can hold, which is
    /// always `N`.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Always `false`: the buffer has `N > 0` bytes. For the length of the
    /// string it holds, see [`string_len`](FixedCharBuffer::string_len).
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { false }

    /// Return the number of bytes before the first terminator, or `N` if no
    /// byte of the buffer is a terminator.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<4>::new();
    /// buf.append_string("ab");
    /// assert_eq!(buf.string_len(), 2);
    /// buf.fill(b'z');
    /// assert_eq!(buf.string_len(), 4);
    /// ```
    pub fn string_len(&self) -> usize {
        self.xs.iter().position(|&b| b == 0).unwrap_or(N)
    }

    /// Return a reference to the byte at `index`.
    ///
    /// **Errors** if `index` is not less than `N`.
    #[track_caller]
    pub fn at(&self, index: usize) -> Result<&u8, OutOfRangeError> {
        self.xs.at(index)
    }

    /// Return a mutable reference to the byte at `index`.
    ///
    /// **Errors** if `index` is not less than `N`.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8, OutOfRangeError> {
        self.xs.at_mut(index)
    }

    /// Return a reference to the first byte.
    pub fn front(&self) -> &u8 {
        self.xs.front()
    }

    /// Return a reference to the last byte; the terminator slot.
    pub fn back(&self) -> &u8 {
        self.xs.back()
    }

    /// Overwrite every byte with `value`.
    ///
    /// A non-zero `value` leaves the buffer without a terminator.
    pub fn fill(&mut self, value: u8) {
        self.xs.fill(value);
    }

    /// Overwrite every byte with `value`; same as `fill`.
    pub fn assign(&mut self, value: u8) {
        self.xs.assign(value);
    }

    /// Zero every byte, leaving an empty string.
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Exchange the bytes of `self` and `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.xs.swap(&mut other.xs);
    }

    /// Write a terminator into byte `N - 1` and return the string.
    ///
    /// This is the whole effect of the string operations when there is
    /// nothing to write.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<3>::new();
    /// buf.fill(b'a');
    /// assert_eq!(buf.get_string(), "");
    /// assert_eq!(buf.terminate(), "aa");
    /// ```
    pub fn terminate(&mut self) -> &str {
        *self.xs.back_mut() = 0;
        self.get_string()
    }

    /// Format `args` into the buffer from offset 0 and return the string.
    ///
    /// At most `N - 1` bytes are written; longer output is truncated at the
    /// last whole character that fits. Errors raised by the formatted values
    /// are ignored. Byte `N - 1` is a terminator on return.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<16>::new();
    /// assert_eq!(buf.format_string(format_args!("{}-{:03}", "id", 7)), "id-007");
    ///
    /// let mut small = FixedCharBuffer::<5>::new();
    /// assert_eq!(small.format_string(format_args!("abcdef")), "abcd");
    /// ```
    pub fn format_string(&mut self, args: fmt::Arguments<'_>) -> &str {
        let mut cursor = Cursor::new(self.xs.as_mut_slice());
        let _ = cursor.write_fmt(args);
        cursor.finish();
        self.terminate()
    }

    /// Format `args` after the current string and return the string.
    ///
    /// The current string ends at the first terminator within the buffer. If
    /// there is none, the buffer counts as full: nothing is appended, and only
    /// byte `N - 1` is overwritten with a terminator. Otherwise the output is
    /// bounded like [`format_string`](FixedCharBuffer::format_string).
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<16>::new();
    /// buf.append_format_string(format_args!("x={}", 1));
    /// buf.append_format_string(format_args!(", y={}", 2));
    /// assert_eq!(buf.get_string(), "x=1, y=2");
    /// ```
    pub fn append_format_string(&mut self, args: fmt::Arguments<'_>) -> &str {
        let len = self.string_len();
        if len < N {
            let mut cursor = Cursor::new(&mut self.xs.as_mut_slice()[len..]);
            let _ = cursor.write_fmt(args);
            cursor.finish();
        }
        self.terminate()
    }

    /// Append `s` after the current string and return the string.
    ///
    /// Same as `append_format_string(format_args!("{}", s))`.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<5>::new();
    /// buf.append_string("ab");
    /// assert_eq!(buf.append_string("cdef"), "abcd");
    /// ```
    pub fn append_string(&mut self, s: &str) -> &str {
        self.append_format_string(format_args!("{}", s))
    }

    /// Return the string held in the buffer.
    ///
    /// If byte `N - 1` is not a terminator the buffer is not in a valid
    /// state and the empty string is returned. Bytes before the first
    /// terminator that are not UTF-8 are cut off.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let mut buf = FixedCharBuffer::<8>::from_str_truncate("hi");
    /// assert_eq!(buf.get_string(), "hi");
    /// buf[7] = b'!';
    /// assert_eq!(buf.get_string(), "");
    /// ```
    pub fn get_string(&self) -> &str {
        let bytes = self.get_bytes();
        match str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Return the bytes before the first terminator, or an empty slice if
    /// byte `N - 1` is not a terminator.
    pub fn get_bytes(&self) -> &[u8] {
        if *self.xs.back() != 0 {
            return &[];
        }
        &self.xs.as_slice()[..self.string_len()]
    }

    /// Return the contents as a C string, or `None` if byte `N - 1` is not a
    /// terminator.
    ///
    /// ```
    /// use fixedarray::FixedCharBuffer;
    ///
    /// let buf = FixedCharBuffer::<8>::from_str_truncate("abc");
    /// assert_eq!(buf.to_c_str().unwrap().to_bytes(), b"abc");
    /// ```
    pub fn to_c_str(&self) -> Option<&CStr> {
        if *self.xs.back() != 0 {
            return None;
        }
        CStr::from_bytes_until_nul(self.xs.as_slice()).ok()
    }

    /// Return all `N` bytes of the buffer, including anything after the
    /// terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.xs.as_slice()
    }

    /// Return the underlying array.
    pub fn as_array(&self) -> &FixedArray<u8, N> {
        &self.xs
    }

    /// Return the underlying array, mutably.
    pub fn as_mut_array(&mut self) -> &mut FixedArray<u8, N> {
        &mut self.xs
    }

    /// Return the underlying array by value.
    pub fn into_inner(self) -> FixedArray<u8, N> {
        self.xs
    }
}

/// Use raw bytes as a buffer; they need not hold a terminator.
impl<const N: usize> From<[u8; N]> for FixedCharBuffer<N> {
    fn from(xs: [u8; N]) -> Self {
        let () = Self::HAS_TERMINATOR;
        FixedCharBuffer { xs: FixedArray::from(xs) }
    }
}

impl<const N: usize> From<FixedArray<u8, N>> for FixedCharBuffer<N> {
    fn from(xs: FixedArray<u8, N>) -> Self {
        let () = Self::HAS_TERMINATOR;
        FixedCharBuffer { xs }
    }
}

impl<const N: usize> Index<usize> for FixedCharBuffer<N> {
    type Output = u8;

    #[track_caller]
    fn index(&self, index: usize) -> &u8 {
        &self.xs[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedCharBuffer<N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.xs[index]
    }
}

impl<const N: usize> Deref for FixedCharBuffer<N> {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &[u8] {
        &self.xs
    }
}

impl<const N: usize> DerefMut for FixedCharBuffer<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.xs
    }
}

impl<const N: usize> AsRef<[u8]> for FixedCharBuffer<N> {
    fn as_ref(&self) -> &[u8] { &self.xs }
}

impl<const N: usize> fmt::Debug for FixedCharBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(self.get_string(), f) }
}

impl<const N: usize> fmt::Display for FixedCharBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self.get_string(), f) }
}

/// `Write` appends to the string like `append_string`; output that does not
/// fit is dropped and no error is reported.
///
/// ```
/// use std::fmt::Write;
/// use fixedarray::FixedCharBuffer;
///
/// let mut buf = FixedCharBuffer::<6>::new();
/// write!(buf, "{}{}", 123, 456).unwrap();
/// assert_eq!(buf.get_string(), "12345");
/// ```
impl<const N: usize> fmt::Write for FixedCharBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_string(s);
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
/// Zero the whole buffer when the `zeroize` feature is enabled, leaving an
/// empty string.
///
/// ```
/// use fixedarray::FixedCharBuffer;
/// use zeroize::Zeroize;
/// let mut buf = FixedCharBuffer::<6>::from_str_truncate("secret");
/// buf.zeroize();
/// assert_eq!(buf.get_string(), "");
/// assert!(buf.iter().all(|&b| b == 0));
/// ```
impl<const N: usize> zeroize::Zeroize for FixedCharBuffer<N> {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.xs);
    }
}
