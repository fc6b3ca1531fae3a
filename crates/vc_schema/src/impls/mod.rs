//! [`Pack`] and [`Unpack`] for leaves and standard containers.
//!
//! ## Implemented Menu
//!
//! - leaf:
//!     - `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `char`, `String`, `str` (pack only), `()` (null)
//!     - `Duration` (seconds)
//! - optional: `Option<T>`
//! - pointer: `Box<T>`, `&T` (pack only)
//! - sequence:
//!     - `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `Box<[T]>`, `[T]` (pack only), `[T; N]`
//!     - `HashSet<T, S>`, `BTreeSet<T>`
//!     - `(P0,)` to `(P0, ..., P7)`
//! - map: `HashMap<K, V, S>`, `BTreeMap<K, V>`
//!
//! Narrowing numeric conversions are range checked. Fixed-size sequences
//! check their length.
//!
//! [`Pack`]: crate::Pack
//! [`Unpack`]: crate::Unpack

// -----------------------------------------------------------------------------
// Modules

mod leaf;
mod map;
mod option;
mod pointer;
mod sequence;
mod tuple;
