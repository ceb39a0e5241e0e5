use crate::catalog::Catalog;
use crate::config::ViewSettings;
use crate::domain::RecomputePolicy;
use crate::router::handle;
use crate::tests::utils::{
    app_state, body_string, cookie_pair, get, listing, numbered_catalog, request,
};

fn card_count(body: &str) -> usize {
    body.matches("class=\"grid-item-link\"").count()
}

#[test]
fn index_shows_first_batch_of_ten() {
    let state = app_state(numbered_catalog(10));

    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert_eq!(card_count(&body), 8);
    assert!(body.contains("<h2>Listing 8</h2>"));
    assert!(!body.contains("<h2>Listing 9</h2>"));
    assert!(body.contains("hx-trigger=\"revealed\""));
    assert!(body.contains("/listings/more?q=&amp;shown=8"));
}

#[test]
fn scrolling_reveals_the_remaining_listings() {
    let state = app_state(numbered_catalog(10));

    let body = body_string(get(&state, "/listings/more?q=&shown=8"));

    assert_eq!(card_count(&body), 2);
    assert!(body.contains("<h2>Listing 9</h2>"));
    assert!(body.contains("<h2>Listing 10</h2>"));
    // Nothing left to load.
    assert!(!body.contains("reveal-sentinel"));
}

#[test]
fn more_past_the_end_is_empty() {
    let state = app_state(numbered_catalog(10));
    let body = body_string(get(&state, "/listings/more?q=&shown=16"));
    assert_eq!(card_count(&body), 0);
}

#[test]
fn more_rejects_garbage_counts() {
    let state = app_state(numbered_catalog(3));
    match handle(request("/listings/more?shown=lots", None), &state) {
        Err(err) => assert_eq!(err.status(), 400),
        Ok(_) => panic!("expected a bad request"),
    }
}

#[test]
fn shown_parameter_renders_that_many_cards() {
    let state = app_state(numbered_catalog(20));
    let body = body_string(get(&state, "/?q=listing&shown=16"));
    assert_eq!(card_count(&body), 16);
    assert!(body.contains("/?q=listing&amp;shown=20"));
}

#[test]
fn hidden_listings_are_not_on_the_index() {
    let mut hidden = listing(3, "Secret Loft");
    hidden.show = Some(false);
    let state = app_state(Catalog::new(vec![
        listing(1, "Oak House"),
        listing(2, "Pine House"),
        hidden,
    ]));

    let body = body_string(get(&state, "/"));
    assert!(body.contains("Oak House"));
    assert!(body.contains("Pine House"));
    assert!(!body.contains("Secret Loft"));
}

#[test]
fn search_filters_and_decodes_the_term() {
    let mut oak = listing(1, "Oak House");
    oak.address = Some("4 Mill Lane".into());
    let state = app_state(Catalog::new(vec![oak, listing(2, "Pine House")]));

    let body = body_string(get(&state, "/listings/results?q=MILL+LANE"));
    assert!(body.contains("Oak House"));
    assert!(!body.contains("Pine House"));
}

#[test]
fn empty_results_explain_themselves() {
    let state = app_state(numbered_catalog(3));
    let body = body_string(get(&state, "/listings/results?q=castle"));
    assert!(body.contains("No listings found for"));
    assert!(body.contains("castle"));
    assert_eq!(card_count(&body), 0);
}

#[test]
fn search_term_survives_a_reload() {
    let state = app_state(numbered_catalog(3));

    let resp = handle(request("/listings/results?q=Listing%202", None), &state).unwrap();
    let cookie = cookie_pair(&resp).expect("new session cookie");
    assert!(cookie.starts_with("listings_session="));

    let reload = handle(request("/", Some(&cookie)), &state).unwrap();
    // Existing sessions are not reissued.
    assert!(cookie_pair(&reload).is_none());

    let body = body_string(reload);
    assert!(body.contains("value=\"Listing 2\""));
    assert_eq!(card_count(&body), 1);
}

#[test]
fn new_term_resets_the_reveal_count() {
    let state = app_state(numbered_catalog(30));

    let first = handle(request("/?q=listing", None), &state).unwrap();
    let cookie = cookie_pair(&first).unwrap();

    let deep = body_string(
        handle(request("/?q=listing&shown=24", Some(&cookie)), &state).unwrap(),
    );
    assert_eq!(card_count(&deep), 24);

    // A count carried over from another term does not apply.
    let changed = body_string(
        handle(request("/?q=list&shown=24", Some(&cookie)), &state).unwrap(),
    );
    assert_eq!(card_count(&changed), 8);
}

#[test]
fn fresh_session_starts_from_the_initial_search() {
    let mut state = app_state(Catalog::new(vec![
        listing(1, "Oak House"),
        listing(2, "Pine House"),
    ]));
    state.view = ViewSettings {
        initial_search: "pine".into(),
        recompute: RecomputePolicy::from_millis(300),
    };

    let body = body_string(get(&state, "/"));
    assert!(body.contains("value=\"pine\""));
    assert!(!body.contains("Oak House"));
    assert!(body.contains("input changed delay:300ms, search"));
}

#[test]
fn stylesheet_is_served() {
    let state = app_state(numbered_catalog(1));
    let resp = get(&state, "/static/main.css");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_routes_are_not_found() {
    let state = app_state(numbered_catalog(1));
    match handle(request("/nope", None), &state) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(_) => panic!("expected not found"),
    }
}
