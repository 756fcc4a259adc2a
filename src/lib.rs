//! An ordered set backed by a probabilistic skip list.
//!
//! [`SkipSet`] keeps unique values sorted in a layered chain:
//!
//! ```text
//! level 3   head ------------------------------------------> [9] ---------->
//! level 2   head ----------> [2] --------------------------> [9] ---------->
//! level 1   head ----------> [2] ----------> [5] ----------> [9] --> [10] ->
//! level 0   head --> [1] --> [2] --> [3] --> [5] --> [7] --> [9] --> [10] ->
//! ```
//!
//! Every element lives in the bottom chain and each chain above skips over
//! more of it, so a search can start at the top, descend, and finish in
//! expected `O(log n)` steps. Which elements reach the upper chains is
//! decided by a per-set random generator that can be seeded for
//! reproducible layouts.
//!
//! Nodes live in an arena and link to each other through plain indices:
//! the structure holds no reference cycles and no raw pointers, and
//! dropping the set drops every element exactly once.
//!
//! # Example
//!
//! ```
//! use skipset::SkipSet;
//!
//! let mut primes = SkipSet::with_seed(7);
//! primes.extend([11, 2, 7, 3, 5, 2]);
//!
//! assert_eq!(primes.len(), 5);
//! assert!(primes.contains(&7));
//! assert!(primes.remove(&11));
//!
//! let ordered: Vec<u32> = primes.into_iter().collect();
//! assert_eq!(ordered, vec![2, 3, 5, 7]);
//! ```

mod error;
mod level;
mod node;
mod skipset;

pub use error::{Error, Result};
pub use skipset::{Cursor, IntoIter, Iter, SkipSet};
