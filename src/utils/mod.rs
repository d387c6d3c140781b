//! Utility Module
//!
//! - [`interner`]: String interning for shader property names
//!
//! Interned strings (Symbols) compare in O(1):
//!
//! ```rust,ignore
//! use asset_audit::utils::interner;
//!
//! let a = interner::intern("_MainTex");
//! let b = interner::intern("_MainTex");
//! assert_eq!(a, b);
//! ```

pub mod interner;

pub use interner::Symbol;
