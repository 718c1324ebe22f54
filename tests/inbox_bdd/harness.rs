//! Mock GitHub notifications API used by the inbox BDD tests.

use quieten::github::MAX_PER_PAGE;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::domain::{NotificationCount, Owner, ThreadNumber};
use super::runtime::SharedRuntime;

/// Owners notifications alternate between.
const OWNERS: [&str; 2] = ["octo", "hubot"];

fn notification(number: usize, owner: &str) -> serde_json::Value {
    json!({
        "id": number.to_string(),
        "unread": number % 2 == 1,
        "reason": "subscribed",
        "subject": {
            "title": format!("Thread {number}"),
            "type": if number % 3 == 0 { "PullRequest" } else { "Issue" }
        },
        "repository": { "full_name": format!("{owner}/repo-{}", number % 4) }
    })
}

fn page_mock(page: usize, body: Vec<serde_json::Value>) -> Mock {
    Mock::given(method("GET"))
        .and(path("/notifications"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

/// Serves `total` notifications in pages of the maximum size.
///
/// When `owner` is given every thread belongs to it; otherwise threads
/// alternate between two owners. A trailing empty page is served when the
/// total is an exact multiple of the page size.
pub(crate) fn mount_inbox(
    runtime: &SharedRuntime,
    server: &MockServer,
    total: NotificationCount,
    owner: Option<&Owner>,
) {
    let per_page = usize::from(MAX_PER_PAGE);
    let numbers: Vec<usize> = (1..=total.value()).collect();

    let mut pages: Vec<Vec<serde_json::Value>> = numbers
        .chunks(per_page)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&number| {
                    let login = owner.map_or_else(
                        || OWNERS.get(number % OWNERS.len()).copied().unwrap_or("octo"),
                        Owner::as_str,
                    );
                    notification(number, login)
                })
                .collect()
        })
        .collect();
    if total.value() % per_page == 0 {
        pages.push(Vec::new());
    }

    for (index, body) in pages.into_iter().enumerate() {
        runtime.block_on(page_mock(index + 1, body).mount(server));
    }
}

/// Makes every request for `page` fail with a server error.
pub(crate) fn mount_failing_page(runtime: &SharedRuntime, server: &MockServer, page: usize) {
    let mock = Mock::given(method("GET"))
        .and(path("/notifications"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Server Error" })),
        )
        .with_priority(1);
    runtime.block_on(mock.mount(server));
}

/// Accepts thread mutations, failing the unsubscribe of `failing`.
pub(crate) fn mount_mutations(
    runtime: &SharedRuntime,
    server: &MockServer,
    failing: Option<ThreadNumber>,
) {
    if let Some(thread) = failing {
        let mock = Mock::given(method("DELETE"))
            .and(path(format!(
                "/notifications/threads/{}/subscription",
                thread.value()
            )))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            )
            .with_priority(1);
        runtime.block_on(mock.mount(server));
    }

    let unsubscribe = Mock::given(method("DELETE"))
        .and(path_regex(r"^/notifications/threads/\d+/subscription$"))
        .respond_with(ResponseTemplate::new(204));
    let mark_read = Mock::given(method("PATCH"))
        .and(path_regex(r"^/notifications/threads/\d+$"))
        .respond_with(ResponseTemplate::new(205));
    runtime.block_on(unsubscribe.mount(server));
    runtime.block_on(mark_read.mount(server));
}

/// `(method, path)` of every non-GET request the server received.
pub(crate) fn mutation_requests(
    runtime: &SharedRuntime,
    server: &MockServer,
) -> Vec<(String, String)> {
    runtime
        .block_on(server.received_requests())
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() != "GET")
        .map(|request| (request.method.to_string(), request.url.path().to_owned()))
        .collect()
}
