//! Registry of capabilities exposed to an embedding environment
//!
//! A capability is a name and an initializer. Registration walks a fixed
//! table in order; entries share no state and never see each other.

use std::fmt;

/// One named entry of a registry table
pub struct Capability<E: ?Sized, Err> {
    pub name: &'static str,
    /// Installs the capability into the environment
    pub init: fn(&E) -> std::result::Result<(), Err>,
}

impl<E: ?Sized, Err> Capability<E, Err> {
    pub const fn new(name: &'static str, init: fn(&E) -> std::result::Result<(), Err>) -> Self {
        Self { name, init }
    }
}

impl<E: ?Sized, Err> Clone for Capability<E, Err> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized, Err> Copy for Capability<E, Err> {}

impl<E: ?Sized, Err> fmt::Debug for Capability<E, Err> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability").field("name", &self.name).finish()
    }
}

/// Run every initializer of `table` against `env`, in table order
///
/// Registration itself cannot fail; an error can only come from the host
/// environment refusing an entry, and it stops the walk.
pub fn register_all<E: ?Sized, Err>(
    env: &E,
    table: &[Capability<E, Err>],
) -> std::result::Result<(), Err> {
    for capability in table {
        tracing::trace!(capability = capability.name, "Registering capability");
        (capability.init)(env)?;
    }
    Ok(())
}

/// Names of a registry table, in registration order
pub fn names<E: ?Sized, Err>(table: &[Capability<E, Err>]) -> Vec<&'static str> {
    table.iter().map(|c| c.name).collect()
}
