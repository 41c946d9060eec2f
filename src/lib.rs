//! # Drills - classic console exercises
//!
//! A small collection of beginner drills, each shipped as its own binary with
//! the core logic living here in the library so it can be tested directly.
//!
//! ## Drills
//!
//! - `armstrong` - reads an integer and reports whether it is an Armstrong
//!   number (equal to the sum of its digits, each raised to the digit count)
//! - `palindrome` - reads a line and reports whether it reads the same
//!   forwards and backwards (exact match, no normalization)
//! - `inventory` - menu-driven product store backed by a fixed-size hash
//!   table with linear probing
//! - `linked-list` - menu-driven singly linked list of integers
//!
//! ## Modules
//!
//! - [`armstrong`] - digit extraction and the Armstrong predicate
//! - [`palindrome`] - string reversal and the palindrome predicate
//! - [`hash_table`] - static-hashing product table
//! - [`linked_list`] - head-only singly linked list
//! - [`console`] - prompt-and-read-line helper shared by the binaries
//!
//! ## Example
//!
//! ```
//! use drills::armstrong::is_armstrong;
//! use drills::palindrome::is_palindrome;
//!
//! assert!(is_armstrong(153));
//! assert!(is_palindrome("racecar"));
//! ```

pub mod armstrong;
pub mod console;
pub mod hash_table;
pub mod linked_list;
pub mod palindrome;
