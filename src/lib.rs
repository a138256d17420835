//! Bi-parental heap (beap) for Rust
//!
//! This crate provides [`Beap`], a priority queue laid out as a triangular
//! grid in a flat array. Like a binary heap it offers constant-time access to
//! the maximum, but because every interior node has *two* parents and *two*
//! children, the structure also supports **O(&radic;n) search and removal by
//! value** — something a binary heap cannot do better than O(n).
//!
//! # Features
//!
//! - **`Beap<T>`**: max-oriented, array-backed, no per-node allocation
//! - **O(&radic;n) worst-case** `push`, `pop`, `index_of`, `remove`
//! - **O(1)** `peek` at the maximum; O(&radic;n) `peek_min` at the minimum
//! - [`triangular`]: the underlying triangular-number index algebra,
//!   usable on its own
//!
//! # Example
//!
//! ```rust
//! use beap::Beap;
//!
//! let mut beap: Beap<i32> = [3, 1, 4, 1, 5].into_iter().collect();
//! assert_eq!(beap.peek(), Some(&5));
//! assert!(beap.contains(&4));
//! assert!(!beap.contains(&2));
//!
//! beap.remove(&4);
//! assert_eq!(beap.pop(), Some(5));
//! assert_eq!(beap.pop(), Some(3));
//! ```
//!
//! For a min-oriented beap, invert the order with [`core::cmp::Reverse`]:
//!
//! ```rust
//! use beap::Beap;
//! use core::cmp::Reverse;
//!
//! let mut beap: Beap<Reverse<i32>> = [3, 1, 2].into_iter().map(Reverse).collect();
//! assert_eq!(beap.pop(), Some(Reverse(1)));
//! ```
//!
//! # References
//!
//! - J. Ian Munro, Hendra Suwanda, *Implicit data structures for fast search
//!   and update*, Journal of Computer and System Sciences 21(2), 1980.

pub mod beap;
pub mod triangular;

// Re-export the container for convenience
pub use beap::Beap;
