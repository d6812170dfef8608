//! The three things `opn` does with an alias store: open, add, list.

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};
use crate::opener::Opener;
use crate::store::{AliasStore, Aliases};

/// Look up `name` and open its target, returning the opener's exit code.
///
/// # Errors
///
/// Returns [`Error::AliasNotFound`] without calling the opener when the name
/// is unknown, plus any store or opener error.
pub fn open_alias(store: &AliasStore, name: &str, opener: &dyn Opener) -> Result<i32> {
    let aliases = store.load()?;
    let target = aliases
        .get(name)
        .filter(|target| !target.is_empty())
        .ok_or_else(|| Error::AliasNotFound { name: name.to_string() })?;
    opener.open(target)
}

/// Store a new alias, honouring the duplicate `policy`.
///
/// # Errors
///
/// Returns [`Error::AliasExists`] under [`DuplicatePolicy::Reject`] when the
/// name is taken, plus any store error.
pub fn add_alias(
    store: &AliasStore,
    name: &str,
    target: &str,
    policy: DuplicatePolicy,
) -> Result<()> {
    if policy == DuplicatePolicy::Reject && store.load()?.contains(name) {
        return Err(Error::AliasExists { name: name.to_string() });
    }
    store.append(name, target)
}

/// Load every alias for listing.
///
/// # Errors
///
/// Returns any store error.
pub fn list_aliases(store: &AliasStore) -> Result<Aliases> {
    store.load()
}
