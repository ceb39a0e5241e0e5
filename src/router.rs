use crate::catalog::Catalog;
use crate::config::ViewSettings;
use crate::domain::{filter_listings, Key, MediaCounts, MediaEvent, ModalState, Reveal, SearchState};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, Page};
use crate::session::{new_session_token, session_cookie, token_from_cookie_header, SessionStore};
use crate::templates::{self, components::modal_root, pages};
use astra::Request;
use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Everything a request handler can reach. Built once in `main`.
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: Box<dyn SessionStore>,
    pub view: ViewSettings,
}

type Params = HashMap<String, String>;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);
    let session = session_token(&req);

    match (method, path) {
        ("GET", "/") => list_page(state, &params, session),
        ("GET", "/listings/results") => results(state, &params, session),
        ("GET", "/listings/more") => more(state, &params),
        ("GET", "/static/main.css") => css_response(templates::MAIN_CSS),
        ("GET", p) if p.starts_with("/details/") => {
            let rest = &p["/details/".len()..];
            match rest.split_once('/') {
                None => details(state, &decode_segment(rest), &params),
                Some((id, "modal")) => modal(state, &decode_segment(id), &params),
                Some(_) => Err(ServerError::NotFound),
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

fn list_page(state: &AppState, params: &Params, session: Option<&str>) -> ResultResp {
    let now = Utc::now();
    let saved = match session {
        Some(token) => state.sessions.load(token, now)?,
        None => None,
    };

    let requested = params
        .get("shown")
        .and_then(|s| s.parse().ok())
        .map(Reveal::from_requested)
        .unwrap_or_default();

    // The reveal count belongs to the term it was produced for; without a
    // session we can only trust the link that carried it.
    let previous = saved
        .or_else(|| params.get("q").cloned())
        .unwrap_or_else(|| state.view.initial_search.clone());
    let mut search = SearchState::restore(previous, requested);

    let mut cookie = None;
    if let Some(term) = params.get("q") {
        search.set_term(term);
        cookie = remember_search(state, session, term, now)?;
    }

    let all = state.catalog.all_listings();
    let results = filter_listings(&all, search.term());
    let vm = pages::ListingsVm {
        term: search.term(),
        results: &results,
        reveal: search.reveal(),
        recompute: state.view.recompute,
    };

    Page::new(pages::listings_page(&vm))
        .set_cookie(cookie)
        .into_response()
}

/// Fresh results for a changed search term, starting at the first batch.
fn results(state: &AppState, params: &Params, session: Option<&str>) -> ResultResp {
    let term = params.get("q").map(String::as_str).unwrap_or_default();
    let search = SearchState::new(term);
    let cookie = remember_search(state, session, term, Utc::now())?;

    let all = state.catalog.all_listings();
    let results = filter_listings(&all, search.term());
    let vm = pages::ListingsVm {
        term: search.term(),
        results: &results,
        reveal: search.reveal(),
        recompute: state.view.recompute,
    };

    Page::new(pages::results_fragment(&vm))
        .set_cookie(cookie)
        .into_response()
}

/// The next batch after `shown` cards.
fn more(state: &AppState, params: &Params) -> ResultResp {
    let term = params.get("q").map(String::as_str).unwrap_or_default();
    let shown: usize = match params.get("shown") {
        Some(raw) => raw
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid shown count: {raw}")))?,
        None => 0,
    };

    let all = state.catalog.all_listings();
    let results = filter_listings(&all, term);
    let total = results.len();

    let mut search = SearchState::restore(term, Reveal::from_requested(shown));
    let start = search.reveal().visible().min(total);
    search.reveal_more(total);
    let end = search.reveal().visible().min(total);

    Page::new(pages::more_fragment(
        term,
        &results[start..end],
        search.reveal(),
        total,
    ))
    .into_response()
}

fn details(state: &AppState, raw_id: &str, params: &Params) -> ResultResp {
    let Some(listing) = state.catalog.listing_by_id(raw_id) else {
        tracing::debug!(id = raw_id, "listing not found");
        return Page::new(pages::listing_not_found_page())
            .status(404)
            .into_response();
    };

    let vm = pages::DetailsVm {
        listing,
        modal: modal_param(params).sanitize(MediaCounts::of(listing)),
        full_description: params.get("full").is_some_and(|v| v == "1"),
    };

    Page::new(pages::details_page(&vm)).into_response()
}

/// Applies a key press or button action to the modal and re-renders it.
fn modal(state: &AppState, raw_id: &str, params: &Params) -> ResultResp {
    let listing = state
        .catalog
        .listing_by_id(raw_id)
        .ok_or(ServerError::NotFound)?;
    let counts = MediaCounts::of(listing);

    let event = match (params.get("key"), params.get("action")) {
        (Some(key), _) => Key::parse(key).map(Key::event),
        (None, Some(action)) => Some(parse_action(action)?),
        (None, None) => None,
    };

    let mut current = modal_param(params).sanitize(counts);
    if let Some(event) = event {
        current = current.apply(event, counts);
    }

    Page::new(modal_root(listing, current)).into_response()
}

fn parse_action(action: &str) -> Result<MediaEvent, ServerError> {
    match action {
        "next" => Ok(MediaEvent::Next),
        "prev" => Ok(MediaEvent::Previous),
        "close" => Ok(MediaEvent::Close),
        "outside" => Ok(MediaEvent::OutsideClick),
        "video" => Ok(MediaEvent::OpenVideo),
        other => Err(ServerError::BadRequest(format!("unknown action: {other}"))),
    }
}

fn modal_param(params: &Params) -> ModalState {
    params
        .get("m")
        .and_then(|m| m.parse().ok())
        .unwrap_or_default()
}

/// Saves the term to the caller's session, starting one if needed.
/// Returns the `Set-Cookie` value for a new session.
fn remember_search(
    state: &AppState,
    session: Option<&str>,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Option<String>, ServerError> {
    match session {
        Some(token) => {
            state.sessions.save(token, term, now)?;
            Ok(None)
        }
        None => {
            let token = new_session_token();
            state.sessions.save(&token, term, now)?;
            Ok(Some(session_cookie(&token)))
        }
    }
}

/// Percent-decodes a path segment. Invalid UTF-8 is replaced, not rejected;
/// the id coercion ignores anything after the leading digits anyway.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn session_token(req: &Request) -> Option<&str> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
