//! **fixedarray** provides the types [`FixedArray`] and [`FixedCharBuffer`]:
//! fixed size arrays with checked element access, and a bounded nul-terminated
//! character buffer with formatting helpers. Both store their contents inline.
//!
//! The length of a `FixedArray<T, N>` is the const parameter `N`; it never
//! grows or shrinks. `FixedArray<T, 0>` (also spelled [`EmptyArray`]) is a
//! valid, always empty array, so generic code does not need a special case for
//! zero length.
//!
//! Indexed access is checked: [`FixedArray::at`] returns an
//! [`OutOfRangeError`], and the `[]` operator panics with the same message.
//! The string operations of [`FixedCharBuffer`] never fail; they truncate and
//! always leave a terminator in the last byte.
//!
//! None of the types synchronize internally. Sharing one instance between
//! threads follows the usual borrow rules: `&mut` access is exclusive.
//!
//! The fixedarray package has the following cargo features:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable to use `no_std` instead.
//!
//! - `serde`
//!   - Optional
//!   - Enable serialization for FixedArray and FixedCharBuffer using serde 1.x
//!
//! - `zeroize`
//!   - Optional
//!   - Implement `Zeroize` for FixedArray and FixedCharBuffer
//!
//! - `borsh`
//!   - Optional
//!   - Enable serialization for FixedArray using borsh 1.x
//!
//! ## Rust Version
//!
//! This version of fixedarray requires Rust 1.69 or later.
//!
#![cfg_attr(not(feature="std"), no_std)]

#[cfg(not(feature="std"))]
extern crate core as std;

mod char_buffer;
mod cursor;
mod errors;
mod fixed_array;

#[cfg(feature="serde")]
mod serde_impls;
#[cfg(feature="borsh")]
mod borsh_impls;

pub use crate::char_buffer::FixedCharBuffer;
pub use crate::errors::OutOfRangeError;
pub use crate::fixed_array::{swap, EmptyArray, FixedArray};
