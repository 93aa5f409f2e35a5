//! End-to-end controller behaviour against recorded responses.

use artlist::source::{FixtureEntry, GraphQlResponse, JsonFixtureSource, QueryExecutor};
use artlist::worker::QueryWorker;
use artlist::{
    initialize, ArtlistError, Config, ListController, QueryParams, QueryResult, Result,
    RetreatPolicy,
};
use futures::channel::oneshot;
use futures::executor::block_on;
use futures_util::future::BoxFuture;
use std::sync::Mutex;

const PAGE_SIZE: u32 = 20;

fn response(total: i64, previous_page: Option<i64>, titles: &[&str]) -> GraphQlResponse {
    let edges: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({ "node": {
                "id": format!("artwork-{i}"),
                "href": format!("/artwork/{i}"),
                "title": title,
                "image": { "url": format!("https://img.example/{i}.jpg") }
            }})
        })
        .collect();

    let previous = previous_page.map(|page| serde_json::json!({ "page": page }));
    serde_json::from_value(serde_json::json!({ "data": { "filter_artworks": {
        "counts": { "total": total },
        "filtered_artworks": { "pageCursors": { "previous": previous }, "edges": edges }
    }}}))
    .unwrap()
}

fn params(page: u32, term: Option<&str>) -> QueryParams {
    QueryParams::new(PAGE_SIZE, page, term.map(str::to_string))
}

fn catalogue() -> JsonFixtureSource {
    JsonFixtureSource::from_entries(vec![
        FixtureEntry::new(params(1, None), response(60, Some(0), &["Untitled", "Composition"])),
        FixtureEntry::new(params(2, None), response(60, Some(1), &["Landscape"])),
        FixtureEntry::new(params(3, None), response(60, Some(2), &["Portrait"])),
        FixtureEntry::new(
            params(1, Some("david bowie")),
            response(10, Some(0), &["Heroes", "Aladdin Sane"]),
        ),
    ])
}

fn mounted() -> ListController<JsonFixtureSource> {
    let mut controller = initialize(&Config::default(), catalogue()).unwrap();
    block_on(controller.settle()).unwrap();
    controller
}

#[test]
fn first_render_is_loading_with_empty_defaults() {
    let controller = initialize(&Config::default(), catalogue()).unwrap();
    let view = controller.view();

    assert!(view.loading);
    assert!(view.items.is_empty());
    assert_eq!(view.previous_page, 0);
    assert_eq!(view.total, 0);
    assert_eq!(view.search_input_value, "");
    assert_eq!(controller.params(), params(1, None));
}

#[test]
fn mount_resolves_first_page() {
    let view = mounted().view();

    assert!(!view.loading);
    assert_eq!(view.total, 60);
    assert_eq!(view.previous_page, 0);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].title, "Untitled");
    assert!(view.items[0].has_image());
    assert!(view.last_resolved_at.is_some());
}

#[test]
fn search_from_a_later_page_returns_to_page_one() {
    let mut controller = mounted();
    controller.advance_page().unwrap();
    block_on(controller.settle()).unwrap();
    controller.advance_page().unwrap();
    block_on(controller.settle()).unwrap();
    assert_eq!(controller.view().page, 3);

    controller.set_search_input_value("david bowie").unwrap();
    assert!(!controller.has_pending());
    assert_eq!(controller.view().term, None);

    controller.commit_search().unwrap();
    assert_eq!(controller.params(), params(1, Some("david bowie")));
    assert!(controller.view().loading);

    block_on(controller.settle()).unwrap();
    let view = controller.view();
    assert_eq!(view.total, 10);
    assert_eq!(view.items[0].title, "Heroes");
    assert_eq!(view.search_input_value, "david bowie");
}

#[test]
fn advance_and_retreat_follow_the_lagging_cursor() {
    let mut controller = mounted();

    controller.advance_page().unwrap();
    assert_eq!(controller.params().page, 2);
    block_on(controller.settle()).unwrap();
    assert_eq!(controller.view().previous_page, 1);

    controller.advance_page().unwrap();
    assert_eq!(controller.params().page, 3);
    block_on(controller.settle()).unwrap();

    controller.retreat_page().unwrap();
    assert_eq!(controller.params().page, 2);
    block_on(controller.settle()).unwrap();
    assert_eq!(controller.view().items[0].title, "Landscape");
}

#[test]
fn retreat_on_first_page_stays_put_by_default() {
    let mut controller = mounted();

    assert!(!controller.retreat_page().unwrap());
    assert!(!controller.has_pending());
    assert_eq!(controller.view().page, 1);
}

#[test]
fn follow_cursor_policy_reproduces_page_zero() {
    let config = Config {
        retreat_policy: RetreatPolicy::FollowCursor,
        ..Config::default()
    };
    let mut controller = initialize(&config, catalogue()).unwrap();
    block_on(controller.settle()).unwrap();

    controller.retreat_page().unwrap();
    assert_eq!(controller.params().page, 0);

    block_on(controller.settle()).unwrap();
    let view = controller.view();
    assert!(view.error.is_some());
    assert!(view.items.is_empty());
    assert_eq!(view.total, 0);
}

#[test]
fn missing_cursor_defaults_to_zero() {
    let source = JsonFixtureSource::from_entries(vec![FixtureEntry::new(
        params(1, None),
        response(3, None, &["Only"]),
    )]);
    let mut controller = initialize(&Config::default(), source).unwrap();
    block_on(controller.settle()).unwrap();

    assert_eq!(controller.view().previous_page, 0);
    controller.advance_page().unwrap();
    assert_eq!(controller.params().page, 2);
}

#[test]
fn unrecorded_query_surfaces_as_error() {
    let mut controller = mounted();
    controller.set_search_input_value("nobody").unwrap();
    controller.commit_search().unwrap();
    block_on(controller.settle()).unwrap();

    let view = controller.view();
    assert!(!view.loading);
    assert!(view.error.unwrap().contains("No recorded response"));
    assert!(view.items.is_empty());
}

#[test]
fn superseded_response_is_ignored() {
    let mut controller = mounted();
    let worker = QueryWorker::new(catalogue());

    controller.advance_page().unwrap();
    let first = controller.take_pending().unwrap();

    controller.set_search_input_value("david bowie").unwrap();
    controller.commit_search().unwrap();
    let second = controller.take_pending().unwrap();

    let newest = block_on(worker.handle_message(second));
    assert!(controller.receive(newest).unwrap());
    assert_eq!(controller.view().total, 10);

    let stale = block_on(worker.handle_message(first));
    assert!(!controller.receive(stale).unwrap());
    assert_eq!(controller.view().total, 10);
    assert_eq!(controller.view().items[0].title, "Heroes");
}

#[test]
fn stale_result_stays_visible_while_loading() {
    let mut controller = mounted();
    controller.advance_page().unwrap();

    let view = controller.view();
    assert!(view.loading);
    assert_eq!(view.page, 2);
    assert_eq!(view.items[0].title, "Untitled");
}

#[test]
fn invalid_config_is_rejected() {
    let config = Config {
        page_size: 0,
        ..Config::default()
    };
    assert!(matches!(
        initialize(&config, catalogue()),
        Err(ArtlistError::Config(_))
    ));
}

/// Executor whose single answer arrives through a channel.
struct Gate {
    answer: Mutex<Option<oneshot::Receiver<QueryResult>>>,
}

impl QueryExecutor for Gate {
    fn execute(&self, _params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>> {
        let answer = self.answer.lock().ok().and_then(|mut slot| slot.take());
        Box::pin(async move {
            match answer {
                Some(rx) => rx
                    .await
                    .map_err(|_| ArtlistError::Query("gate closed".to_string())),
                None => Err(ArtlistError::Query("gate already used".to_string())),
            }
        })
    }
}

#[test]
fn suspended_query_keeps_loading_until_answered() {
    let (tx, rx) = oneshot::channel();
    let gate = Gate {
        answer: Mutex::new(Some(rx)),
    };
    let mut controller = initialize(&Config::default(), gate).unwrap();
    assert!(controller.view().loading);

    let answer = QueryResult {
        total: Some(4),
        previous_page: Some(0),
        items: Some(vec![]),
    };
    let (changed, sent) = block_on(async {
        futures::join!(controller.settle(), async move { tx.send(answer).is_ok() })
    });

    assert!(sent);
    assert!(changed.unwrap());
    let view = controller.view();
    assert!(!view.loading);
    assert_eq!(view.total, 4);
}

#[test]
fn fixtures_persist_and_replay_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");

    let mut source = JsonFixtureSource::open(&path).unwrap();
    assert!(source.is_empty());
    source.insert(params(1, None), response(7, Some(0), &["Saved"]));
    source.save().unwrap();

    let mut controller = initialize(&Config::default(), JsonFixtureSource::open(&path).unwrap())
        .unwrap();
    block_on(controller.settle()).unwrap();
    assert_eq!(controller.view().total, 7);
    assert_eq!(controller.executor().len(), 1);
}
