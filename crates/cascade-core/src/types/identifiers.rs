//! Dense index types for graph nodes and edges.
//!
//! Graph models intern caller-supplied keys into contiguous `u32` indices
//! so the simulators can use flat `Vec<bool>` active sets. A `NodeIdx`
//! cannot be accidentally used where an `EdgeIdx` is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_idx {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl $name {
            /// Create an index from a `usize` position.
            ///
            /// Graph builders reject inputs larger than `u32::MAX` elements
            /// before handing out indices.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize);
                Self(index as u32)
            }

            /// The index as a `usize`, for slice addressing.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(idx: $name) -> Self {
                idx.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_idx!(
    /// Dense node (user) index.
    NodeIdx
);

define_idx!(
    /// Dense edge / hyperedge index.
    EdgeIdx
);
