//! Scenario state and runners for the notification inbox BDD tests.

use quieten::batch::test_support::{RecordedProgress, RecordingProgress, ScriptedConfirm};
use quieten::inbox::NoopFetchObserver;
use quieten::{
    ApiBase, BatchMutator, BatchOperations, BatchOutcome, FetchReport, NotificationSource,
    OctocrabNotificationGateway, PersonalAccessToken, filter_by_group,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::domain::Owner;
use super::runtime::{self, SharedRuntime};

#[derive(ScenarioState, Default)]
pub(crate) struct InboxState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) report: Slot<FetchReport>,
    pub(crate) outcome: Slot<BatchOutcome>,
    pub(crate) progress: Slot<Vec<RecordedProgress>>,
    pub(crate) prompts: Slot<Vec<String>>,
}

/// Ensures the runtime and server are initialised in `InboxState`.
pub(crate) fn ensure_runtime_and_server(inbox_state: &InboxState) -> SharedRuntime {
    runtime::start_once(&inbox_state.runtime, &inbox_state.server)
}

fn gateway_parts(inbox_state: &InboxState) -> (SharedRuntime, ApiBase, PersonalAccessToken) {
    let runtime = inbox_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised"));
    let api_base = inbox_state
        .server
        .with_ref(|server| ApiBase::parse(&server.uri()))
        .unwrap_or_else(|| panic!("mock server not initialised"))
        .unwrap_or_else(|error| panic!("mock server URI should parse: {error}"));
    let token_value = inbox_state
        .token
        .get()
        .unwrap_or_else(|| "valid-token".to_owned());
    let token = PersonalAccessToken::new(token_value)
        .unwrap_or_else(|error| panic!("token should be valid: {error}"));
    (runtime, api_base, token)
}

/// Drains the mock inbox.
pub(crate) fn fetch_inbox(inbox_state: &InboxState) -> FetchReport {
    let (runtime, api_base, token) = gateway_parts(inbox_state);

    runtime.block_on(async {
        let gateway = OctocrabNotificationGateway::for_token(&token, &api_base)
            .unwrap_or_else(|error| panic!("gateway should build: {error}"));
        NotificationSource::new(&gateway)
            .fetch_all_observed(true, &mut NoopFetchObserver)
            .await
    })
}

/// Fetches the inbox, then runs a batch over `owner`'s threads answering the
/// confirmation prompt with `confirmed`.
pub(crate) fn run_group_batch(
    inbox_state: &InboxState,
    owner: &Owner,
    operations: BatchOperations,
    confirmed: bool,
) {
    let (runtime, api_base, token) = gateway_parts(inbox_state);

    let (outcome, progress, prompts) = runtime.block_on(async {
        let gateway = OctocrabNotificationGateway::for_token(&token, &api_base)
            .unwrap_or_else(|error| panic!("gateway should build: {error}"));
        let source = NotificationSource::new(&gateway);
        let records = filter_by_group(&source.fetch_all(true).await, owner.as_str());

        let mut confirm = ScriptedConfirm::answering([confirmed]);
        let mut progress = RecordingProgress::default();
        let outcome = BatchMutator::new(source)
            .run(&records, operations, &mut confirm, &mut progress)
            .await;
        (
            outcome,
            progress.events().to_vec(),
            confirm.prompts().to_vec(),
        )
    });

    inbox_state.outcome.set(outcome);
    inbox_state.progress.set(progress);
    inbox_state.prompts.set(prompts);
}
