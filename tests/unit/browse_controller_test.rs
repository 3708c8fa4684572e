//! Unit tests for the BrowseController: routing, fetch sequencing, history
//! feeding and the derived page view.

use myvacation::managers::browse_controller::{BrowseController, FetchOutcome, FetchState};
use myvacation::managers::history_store::MemoryStore;
use myvacation::managers::search_history_manager::{
    SearchHistoryManager, SearchHistoryManagerTrait, DEFAULT_STORAGE_KEY,
};
use myvacation::types::errors::SearchError;
use myvacation::types::page::{PageContent, BROWSE_TILES, FAILED_TO_LOAD};
use myvacation::types::result::{DestinationResult, SearchResults, VideoResult};
use myvacation::types::route::Route;

fn dest(id: &str, name: &str) -> DestinationResult {
    DestinationResult {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://img.example/{}.jpg", id),
    }
}

fn video(id: &str, title: &str) -> VideoResult {
    VideoResult {
        id: id.to_string(),
        title: title.to_string(),
        video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
    }
}

fn setup() -> (BrowseController, SearchHistoryManager<MemoryStore>) {
    (
        BrowseController::new(),
        SearchHistoryManager::load(MemoryStore::new(), DEFAULT_STORAGE_KEY),
    )
}

fn searching(ctrl: &mut BrowseController, query: &str) {
    ctrl.set_query_input(query);
    ctrl.submit();
}

#[test]
fn test_empty_submit_navigates_to_bare_browse() {
    let (mut ctrl, _) = setup();
    searching(&mut ctrl, "bali");

    ctrl.set_query_input("");
    let route = ctrl.submit();

    assert_eq!(route, Route::Browse);
    assert_eq!(route.to_path(), "/browse");
    assert!(!route.to_path().contains("q="));
    assert_eq!(ctrl.active_query(), "");
    assert!(ctrl.begin_fetch().is_none());
}

#[test]
fn test_submit_sets_q_parameter() {
    let (mut ctrl, _) = setup();
    ctrl.set_query_input("raja ampat");
    let route = ctrl.submit();

    assert_eq!(route.to_path(), "/browse?q=raja+ampat");
    assert_eq!(ctrl.active_query(), "raja ampat");
}

#[test]
fn test_navigate_syncs_search_box() {
    let (mut ctrl, _) = setup();
    ctrl.set_query_input("half typed");

    assert!(ctrl.navigate(&Route::parse("/browse?q=lombok").unwrap()));
    assert_eq!(ctrl.query_input(), "lombok");

    // Same route again is not a new search
    assert!(!ctrl.navigate(&Route::parse("?q=lombok").unwrap()));
}

#[test]
fn test_same_route_keeps_edited_search_box() {
    let (mut ctrl, _) = setup();
    ctrl.navigate(&Route::parse("/browse?q=lombok").unwrap());
    ctrl.set_query_input("lombok sen");

    assert!(!ctrl.navigate(&Route::parse("/browse?q=lombok").unwrap()));
    assert_eq!(ctrl.query_input(), "lombok sen");
    assert_eq!(ctrl.active_query(), "lombok");
}

#[test]
fn test_successful_fetch_feeds_history() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "bali");

    let ticket = ctrl.begin_fetch().unwrap();
    assert_eq!(ticket.query(), "bali");
    let results = SearchResults {
        destination: vec![dest("1", "Kuta"), dest("2", "Ubud")],
        video: vec![video("9", "Bali vlog")],
    };

    let outcome = ctrl.complete_fetch(ticket, Ok(results.clone()), &mut history);

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(*ctrl.fetch_state(), FetchState::Loaded(results));
    assert_eq!(history.state().destination.len(), 2);
    assert_eq!(history.state().video.len(), 1);
}

#[test]
fn test_stale_response_is_dropped() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "bali");
    let first = ctrl.begin_fetch().unwrap();
    let second = ctrl.begin_fetch().unwrap();
    assert!(second.seq() > first.seq());

    let fresh = SearchResults {
        destination: vec![dest("2", "Ubud")],
        video: vec![],
    };
    assert_eq!(
        ctrl.complete_fetch(second, Ok(fresh.clone()), &mut history),
        FetchOutcome::Applied
    );

    let old = SearchResults {
        destination: vec![dest("1", "Kuta")],
        video: vec![],
    };
    assert_eq!(
        ctrl.complete_fetch(first, Ok(old), &mut history),
        FetchOutcome::Stale
    );

    assert_eq!(*ctrl.fetch_state(), FetchState::Loaded(fresh));
    assert_eq!(history.state().destination, vec![dest("2", "Ubud")]);
}

#[test]
fn test_response_for_abandoned_query_is_stale() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "bali");
    let ticket = ctrl.begin_fetch().unwrap();

    ctrl.navigate(&Route::Browse);

    let outcome = ctrl.complete_fetch(
        ticket,
        Ok(SearchResults {
            destination: vec![dest("1", "Kuta")],
            video: vec![],
        }),
        &mut history,
    );
    assert_eq!(outcome, FetchOutcome::Stale);
    assert!(history.is_empty());
}

#[test]
fn test_failed_fetch_shows_error_page() {
    let (mut ctrl, mut history) = setup();
    history.add_to_history(&[dest("1", "Kuta")]).unwrap();
    searching(&mut ctrl, "bali");
    let ticket = ctrl.begin_fetch().unwrap();

    let outcome = ctrl.complete_fetch(ticket, Err(SearchError::Status(500)), &mut history);
    assert_eq!(outcome, FetchOutcome::Failed);

    let view = ctrl.view(history.state());
    assert_eq!(
        view.content,
        PageContent::Error {
            message: FAILED_TO_LOAD.to_string()
        }
    );
    assert!(view.tiles.is_empty());
    // History is untouched by a failed fetch
    assert_eq!(history.state().destination.len(), 1);
}

#[test]
fn test_loading_view_has_placeholders() {
    let (mut ctrl, history) = setup();
    searching(&mut ctrl, "bali");
    ctrl.begin_fetch().unwrap();

    match ctrl.view(history.state()).content {
        PageContent::Searching {
            query,
            destination_placeholders,
            video_placeholders,
        } => {
            assert_eq!(query, "bali");
            assert_eq!(destination_placeholders, 4);
            assert_eq!(video_placeholders, 3);
        }
        other => panic!("expected Searching, got {:?}", other),
    }
}

#[test]
fn test_zero_results_view_is_distinct() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "atlantis");
    let ticket = ctrl.begin_fetch().unwrap();
    ctrl.complete_fetch(ticket, Ok(SearchResults::default()), &mut history);

    assert_eq!(
        ctrl.view(history.state()).content,
        PageContent::NoResults {
            query: "atlantis".to_string()
        }
    );
    assert!(history.is_empty());
}

#[test]
fn test_zero_results_view_follows_edited_search_box() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "atlantis");
    let ticket = ctrl.begin_fetch().unwrap();
    ctrl.complete_fetch(ticket, Ok(SearchResults::default()), &mut history);

    ctrl.set_query_input("atlantis beach");
    assert_eq!(
        ctrl.view(history.state()).content,
        PageContent::NoResults {
            query: "atlantis beach".to_string()
        }
    );
}

#[test]
fn test_zero_results_view_falls_back_to_active_query() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "atlantis");
    let ticket = ctrl.begin_fetch().unwrap();
    ctrl.complete_fetch(ticket, Ok(SearchResults::default()), &mut history);

    ctrl.set_query_input("");
    let view = ctrl.view(history.state());

    assert_eq!(view.query_input, "");
    assert_eq!(
        view.content,
        PageContent::NoResults {
            query: "atlantis".to_string()
        }
    );
}

#[test]
fn test_results_view_links_destinations() {
    let (mut ctrl, mut history) = setup();
    searching(&mut ctrl, "flores");
    let ticket = ctrl.begin_fetch().unwrap();
    ctrl.complete_fetch(
        ticket,
        Ok(SearchResults {
            destination: vec![dest("42", "Kelimutu")],
            video: vec![],
        }),
        &mut history,
    );

    match ctrl.view(history.state()).content {
        PageContent::Results {
            destinations,
            videos,
            ..
        } => {
            assert_eq!(destinations[0].href, "/destination/detail/42");
            assert!(videos.is_empty());
        }
        other => panic!("expected Results, got {:?}", other),
    }
}

#[test]
fn test_no_query_shows_history_and_tiles() {
    let (ctrl, mut history) = setup();
    history.add_to_history(&[video("5", "Komodo")]).unwrap();

    let view = ctrl.view(history.state());
    match view.content {
        PageContent::History {
            destinations,
            videos,
        } => {
            assert!(destinations.is_empty());
            assert_eq!(videos[0].title, "Komodo");
        }
        other => panic!("expected History, got {:?}", other),
    }
    assert_eq!(view.tiles, BROWSE_TILES.to_vec());
    assert_eq!(view.title, "Browse - MyVacation");
}

#[test]
fn test_video_preview_open_and_close() {
    let (mut ctrl, _) = setup();
    ctrl.open_preview(&video("9", "Bali vlog"));

    let preview = ctrl.preview();
    assert!(preview.open);
    assert_eq!(preview.title, "Bali vlog");
    assert_eq!(
        preview.embed_url.as_deref(),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1")
    );

    ctrl.close_preview();
    assert!(!ctrl.preview().open);
    assert_eq!(ctrl.preview().title, "Bali vlog");
}
