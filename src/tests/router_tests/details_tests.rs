use crate::catalog::Catalog;
use crate::domain::{Listing, PriceRange};
use crate::router::{handle, AppState};
use crate::tests::utils::{app_state, body_string, get, listing, request};

fn gallery_listing() -> Listing {
    let mut l = listing(1, "Oak House");
    l.description = "A".repeat(200);
    l.address = Some("4 Mill Lane".into());
    l.phone_number = Some("+91 555 0100".into());
    l.detail_images = vec![
        "https://img.test/a0.jpg".into(),
        "https://img.test/a1.jpg".into(),
        "https://img.test/a2.jpg".into(),
    ];
    l.floor_plan_images = vec!["https://img.test/p0.jpg".into()];
    l.video_url = Some("https://img.test/tour.mp4".into());
    l.brochure_url = Some("https://img.test/brochure.pdf".into());
    l.price_range = Some(PriceRange {
        min: 5_500_000,
        max: 7_250_000,
    });
    l
}

fn state() -> AppState {
    let mut hidden = listing(3, "Secret Loft");
    hidden.show = Some(false);
    app_state(Catalog::new(vec![gallery_listing(), listing(2, "Pine House"), hidden]))
}

#[test]
fn unknown_listing_renders_not_found_page() {
    let resp = get(&state(), "/details/99");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Listing Not Found"));
    assert!(body.contains("href=\"/\""));
}

#[test]
fn non_numeric_id_is_not_found() {
    let resp = get(&state(), "/details/oak");
    assert_eq!(resp.status(), 404);
}

#[test]
fn hidden_listing_is_reachable_directly() {
    let resp = get(&state(), "/details/3");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Secret Loft"));
}

#[test]
fn details_page_shows_all_present_sections() {
    let body = body_string(get(&state(), "/details/1"));

    assert!(body.contains("<h1>Oak House</h1>"));
    assert!(body.contains("4 Mill Lane"));
    assert!(body.contains("+91 555 0100"));
    assert!(body.contains("$5,500,000 – $7,250,000"));
    assert!(body.contains("https://img.test/brochure.pdf"));
    assert!(body.contains("maps.google.com/maps?q=18.52,73.85&amp;t="));
    assert!(body.contains("Gallery"));
    assert!(body.contains("Floor Plans"));
    assert!(body.contains("Video Tour"));
    assert!(body.contains("href=\"/details/1?m=image-2\""));
    assert!(body.contains("href=\"/details/1?m=floorplan-0\""));
    assert!(body.contains("href=\"/details/1?m=video\""));
    // No modal until one is opened.
    assert!(!body.contains("modal-overlay"));
}

#[test]
fn absent_optional_fields_suppress_sections() {
    let body = body_string(get(&state(), "/details/2"));

    assert!(body.contains("Pine House"));
    assert!(!body.contains("Gallery"));
    assert!(!body.contains("Floor Plans"));
    assert!(!body.contains("Video Tour"));
    assert!(!body.contains("Phone:"));
    assert!(!body.contains("Nearby Schools"));
    assert!(!body.contains("Show more"));
}

#[test]
fn long_description_collapses_and_expands() {
    let collapsed = body_string(get(&state(), "/details/1"));
    assert!(collapsed.contains(&format!("{}...", "A".repeat(150))));
    assert!(!collapsed.contains(&"A".repeat(151)));
    assert!(collapsed.contains("href=\"/details/1?full=1\""));
    assert!(collapsed.contains("Show more"));

    let expanded = body_string(get(&state(), "/details/1?full=1"));
    assert!(expanded.contains(&"A".repeat(200)));
    assert!(expanded.contains("Show less"));
}

#[test]
fn open_image_links_wrap_in_both_directions() {
    let body = body_string(get(&state(), "/details/1?m=image-2"));

    assert!(body.contains("modal-overlay"));
    assert!(body.contains("src=\"https://img.test/a2.jpg\" alt=\"Enlarged view\""));
    // next from the last image goes back to the first
    assert!(body.contains("href=\"/details/1?m=image-0\""));
    assert!(body.contains("href=\"/details/1?m=image-1\""));
    assert!(body.contains("keyup[key=='ArrowRight'] from:body"));
}

#[test]
fn out_of_range_modal_is_ignored() {
    let body = body_string(get(&state(), "/details/1?m=image-9"));
    assert!(!body.contains("modal-overlay"));
}

#[test]
fn arrow_keys_move_the_open_modal() {
    let s = state();

    let right = body_string(get(&s, "/details/1/modal?m=image-2&key=ArrowRight"));
    assert!(right.contains("src=\"https://img.test/a0.jpg\" alt=\"Enlarged view\""));

    let left = body_string(get(&s, "/details/1/modal?m=image-0&key=ArrowLeft"));
    assert!(left.contains("src=\"https://img.test/a2.jpg\" alt=\"Enlarged view\""));

    // One floor plan: navigation stays on it.
    let plan = body_string(get(&s, "/details/1/modal?m=floorplan-0&key=ArrowRight"));
    assert!(plan.contains("src=\"https://img.test/p0.jpg\" alt=\"Floor plan\""));
}

#[test]
fn escape_and_close_shut_any_modal() {
    let s = state();

    for uri in [
        "/details/1/modal?m=image-1&key=Escape",
        "/details/1/modal?m=video&key=Escape",
        "/details/1/modal?m=floorplan-0&action=close",
        "/details/1/modal?m=image-0&action=outside",
    ] {
        let body = body_string(get(&s, uri));
        assert!(body.contains("id=\"modal-root\""), "{uri}");
        assert!(!body.contains("modal-overlay"), "{uri}");
    }
}

#[test]
fn video_modal_plays_the_tour() {
    let body = body_string(get(&state(), "/details/1/modal?m=&action=video"));
    assert!(body.contains("modal-video"));
    assert!(body.contains("https://img.test/tour.mp4"));
}

#[test]
fn unrelated_keys_leave_the_modal_alone() {
    let body = body_string(get(&state(), "/details/1/modal?m=image-1&key=Enter"));
    assert!(body.contains("src=\"https://img.test/a1.jpg\" alt=\"Enlarged view\""));
}

#[test]
fn modal_fragment_errors() {
    let s = state();

    match handle(request("/details/1/modal?m=image-0&action=zoom", None), &s) {
        Err(err) => assert_eq!(err.status(), 400),
        Ok(_) => panic!("expected a bad request"),
    }
    match handle(request("/details/42/modal?m=image-0", None), &s) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(_) => panic!("expected not found"),
    }
    match handle(request("/details/1/photos", None), &s) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(_) => panic!("expected not found"),
    }
}

#[test]
fn encoded_id_segments_are_decoded() {
    let s = state();

    let resp = get(&s, "/details/%201");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("<h1>Oak House</h1>"));

    let modal = body_string(get(&s, "/details/%31/modal?m=image-0"));
    assert!(modal.contains("src=\"https://img.test/a0.jpg\" alt=\"Enlarged view\""));
}

#[test]
fn modal_controls_send_actions() {
    let body = body_string(get(&state(), "/details/1?m=image-2"));

    assert!(body.contains("hx-get=\"/details/1/modal?m=image-2&amp;action=outside\""));
    assert!(body.contains("hx-get=\"/details/1/modal?m=image-2&amp;action=close\""));
    assert!(body.contains("hx-get=\"/details/1/modal?m=image-2&amp;action=next\""));
    assert!(body.contains("hx-get=\"/details/1/modal?m=image-2&amp;action=prev\""));

    // Following the emitted next control lands on the first image.
    let next = body_string(get(&state(), "/details/1/modal?m=image-2&action=next"));
    assert!(next.contains("src=\"https://img.test/a0.jpg\" alt=\"Enlarged view\""));

    let prev = body_string(get(&state(), "/details/1/modal?m=image-0&action=prev"));
    assert!(prev.contains("src=\"https://img.test/a2.jpg\" alt=\"Enlarged view\""));
}

#[test]
fn video_thumbnail_opens_through_an_action() {
    let body = body_string(get(&state(), "/details/1"));
    assert!(body.contains("hx-get=\"/details/1/modal?m=&amp;action=video\""));
}
