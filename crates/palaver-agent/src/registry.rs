//! Action registry.
//!
//! Maps action identifiers to registered handlers, plus an optional default
//! handler used when no action matches. The registry is populated during
//! application setup and only read at request time; mutating it while
//! requests are in flight is unsupported.

use std::collections::HashMap;

use tracing::warn;

use crate::handler::BoxedHandler;

/// A registered handler together with its declared parameter names.
pub struct Registration {
    params: Vec<String>,
    handler: BoxedHandler,
}

impl Registration {
    pub fn new(params: Vec<String>, handler: BoxedHandler) -> Self {
        Self { params, handler }
    }

    /// Parameter names the handler declared, in binding order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn handler(&self) -> &BoxedHandler {
        &self.handler
    }
}

/// Registry of action identifier → handler bindings.
///
/// Registering the same action twice replaces the earlier binding (last
/// write wins); the overwrite is logged so it is observable during setup.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Registration>,
    default: Option<Registration>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a handler to an action identifier.
    pub fn insert(&mut self, action: impl Into<String>, registration: Registration) {
        let action = action.into();
        if self.actions.insert(action.clone(), registration).is_some() {
            warn!(action = %action, "replacing previously registered handler");
        }
    }

    /// Sets the default handler used when no action matches.
    pub fn insert_default(&mut self, registration: Registration) {
        if self.default.replace(registration).is_some() {
            warn!("replacing previously registered default handler");
        }
    }

    /// Resolves an action to its registration, falling back to the default.
    pub fn resolve(&self, action: &str) -> Option<&Registration> {
        self.actions.get(action).or(self.default.as_ref())
    }

    /// Whether a handler is bound to exactly this action (ignores default).
    pub fn contains(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
