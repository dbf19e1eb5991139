//! Common test utilities
//!
//! Shared fixtures for the integration tests: a typed DOM context wired to
//! a scripted mock runtime, plus helpers for queueing typical responses.

#![allow(dead_code)]

use std::sync::Arc;

use oxidom::{DomContext, DomHandle, MockRuntime, TypedDomHandle};

/// A DOM context over a fresh scripted mock runtime
pub fn mock_context() -> (DomContext, Arc<MockRuntime>) {
    let mock = Arc::new(MockRuntime::new());
    let dom = DomContext::from_runtime(mock.clone());
    (dom, mock)
}

/// A bare handle with a fixed object id over the given mock
pub fn handle_on(mock: &Arc<MockRuntime>, object_id: &str, class_name: &str) -> DomHandle {
    DomHandle::new(mock.clone(), object_id, class_name)
}

/// A typed wrapper with a fixed object id over the given mock
pub fn element_on<T: TypedDomHandle>(
    mock: &Arc<MockRuntime>,
    object_id: &str,
    class_name: &str,
) -> T {
    oxidom::create(handle_on(mock, object_id, class_name)).expect("class accepted by wrapper")
}
