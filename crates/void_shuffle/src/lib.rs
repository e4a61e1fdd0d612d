//! # void_shuffle - Weighted Shuffle Bags
//!
//! A shuffle bag hands out labels in a random order whose frequency over
//! every full cycle matches the weight each label was added with. When the
//! bag runs dry it refills and reshuffles itself.
//!
//! Spawners use it to pick which prefab factory builds the next pooled
//! object, but the bag is generic over any `Clone` label.
//!
//! ```
//! use void_shuffle::ShuffleBag;
//! use rand::SeedableRng;
//!
//! let mut bag = ShuffleBag::with_rng(rand::rngs::StdRng::seed_from_u64(7));
//! bag.add("common", 9).unwrap();
//! bag.add("rare", 1).unwrap();
//!
//! let cycle: Vec<_> = (0..bag.len()).map(|_| bag.next().unwrap()).collect();
//! assert_eq!(cycle.iter().filter(|l| **l == "rare").count(), 1);
//! ```

pub mod bag;
pub mod error;

pub use bag::ShuffleBag;
pub use error::{Result, ShuffleError};

pub mod prelude {
    pub use crate::bag::ShuffleBag;
    pub use crate::error::{Result, ShuffleError};
}
