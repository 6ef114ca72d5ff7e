//! Dependency resolver
//!
//! Translates the user's requested component names into the concrete install
//! set for one invocation.
//!
//! # Design
//!
//! - **Pure logic**: no I/O, no side effects — only resolves names
//! - **One level deep**: declared dependencies of requested components are
//!   added; a dependency's own dependencies are not expanded
//! - **Deterministic order**: requested components in request order, then
//!   each requested component's dependencies in declaration order,
//!   duplicates skipped

use crate::catalog::Component;

/// Resolve the install set for a batch of requested components.
///
/// Returns `requested ∪ { dep | dep ∈ dependencies(c), c ∈ requested }`,
/// deduplicated while preserving order. Requesting the same component twice
/// yields a single install.
pub fn resolve_install_set(requested: &[Component]) -> Vec<Component> {
    let mut install_set: Vec<Component> = Vec::with_capacity(requested.len());

    for &component in requested {
        if !install_set.contains(&component) {
            install_set.push(component);
        }
    }

    for &component in requested {
        for &dep in component.dependencies() {
            if !install_set.contains(&dep) {
                install_set.push(dep);
            }
        }
    }

    install_set
}
