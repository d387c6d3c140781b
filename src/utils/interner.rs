//! Global string interner for shader property names.
//!
//! Material texture bindings and shader property tables are keyed by
//! [`Symbol`], so the derive pass compares integers instead of strings
//! when it matches a shader's texture properties against a material's
//! bound textures.

use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Compact, hashable identifier for an interned property name.
pub type Symbol = Spur;

/// Interns a string, returning the existing symbol if it was seen before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up a string without interning it.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a symbol back to its string.
///
/// # Panics
/// Panics if the symbol did not come from this interner.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}
