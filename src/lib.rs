// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skipmap - ordered maps and sets backed by a skip list.
//!
//! # Quick Start
//!
//! ```
//! use skipmap::SkipList;
//!
//! let mut map = SkipList::new();
//! for key in [3, 1, 4, 1, 5, 9] {
//!     map.set(key, key * 10);
//! }
//! assert_eq!(map.len(), 5);
//! assert_eq!(map.get(&4), Some(&40));
//!
//! // Keys in [2, 6)
//! let mut range = map.range(2, 6);
//! let mut keys = Vec::new();
//! while range.next() {
//!     keys.push(*range.key().unwrap());
//! }
//! assert_eq!(keys, vec![3, 4, 5]);
//!
//! assert_eq!(map.delete(&4), Some(40));
//! assert_eq!(map.seek_to_last().and_then(|c| c.key().copied()), Some(9));
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events when a list changes height.

pub mod compare;
pub mod config;
pub mod set;
pub mod skiplist;

pub use compare::Comparator;
pub use compare::Natural;
pub use compare::Reverse;
pub use config::Config;
pub use config::ConfigError;
pub use set::SkipSet;
pub use skiplist::Cursor;
pub use skiplist::Int32Map;
pub use skiplist::IntMap;
pub use skiplist::Iter;
pub use skiplist::RangeCursor;
pub use skiplist::SkipList;
pub use skiplist::StringMap;
