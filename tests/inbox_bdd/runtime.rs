//! Tokio runtime and mock server bootstrap for the inbox scenarios.

use std::future::Future;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that scenario steps share through a `Slot`.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<Runtime>);

impl SharedRuntime {
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Starts the runtime and mock server on first use and returns the runtime.
///
/// # Panics
///
/// Panics when the Tokio runtime cannot be built.
pub(crate) fn start_once(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> SharedRuntime {
    let shared = runtime.get().unwrap_or_else(|| {
        let built = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let shared = SharedRuntime(Rc::new(built));
        runtime.set(shared.clone());
        shared
    });

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }

    shared
}
