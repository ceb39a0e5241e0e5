use crate::domain::{Listing, MediaCounts, MediaEvent, ModalState};
use crate::templates::links::{self, ModalInput};
use maud::{html, Markup};

/// The modal container swapped by the gallery controls.
///
/// Controls and keyboard shortcuts send the current state plus an
/// `action=`/`key=` event; the server applies it and swaps the result in.
/// Each control's `href` points at the resulting state so the page works
/// without htmx too.
pub fn modal_root(listing: &Listing, state: ModalState) -> Markup {
    let counts = MediaCounts::of(listing);
    let state = state.sanitize(counts);

    html! {
        div id="modal-root" hx-target="this" hx-swap="outerHTML" {
            @if state.is_open() {
                (key_listener(listing.id, state, "Escape"))
                div
                    class="modal-overlay"
                    role="dialog"
                    aria-modal="true"
                    hx-get=(links::modal(listing.id, state, ModalInput::Action("outside")))
                    hx-trigger="click[target.classList.contains('modal-overlay')]"
                {
                    @match state {
                        ModalState::Image(i) => {
                            (gallery_modal(listing, state, counts, &listing.detail_images[i], "Enlarged view"))
                        }
                        ModalState::FloorPlan(i) => {
                            (gallery_modal(listing, state, counts, &listing.floor_plan_images[i], "Floor plan"))
                        }
                        ModalState::Video => {
                            @if let Some(video) = &listing.video_url {
                                div class="modal-content" {
                                    (close_button(listing.id, state, "Close video player"))
                                    video controls autoplay class="modal-video" {
                                        source src=(video) type="video/mp4";
                                        "Sorry, your browser doesn't support embedded videos."
                                    }
                                }
                            }
                        }
                        ModalState::Closed => {}
                    }
                }
            }
        }
    }
}

fn gallery_modal(
    listing: &Listing,
    state: ModalState,
    counts: MediaCounts,
    src: &str,
    alt: &str,
) -> Markup {
    let prev = state.apply(MediaEvent::Previous, counts);
    let next = state.apply(MediaEvent::Next, counts);

    html! {
        (key_listener(listing.id, state, "ArrowLeft"))
        (key_listener(listing.id, state, "ArrowRight"))

        a
            class="modal-arrow-button prev"
            href=(links::details_with(listing.id, prev, false))
            hx-get=(links::modal(listing.id, state, ModalInput::Action("prev")))
            aria-label="Previous image"
        { "❮" }

        div class="modal-content" {
            (close_button(listing.id, state, "Close image viewer"))
            img src=(src) alt=(alt) class="modal-image";
        }

        a
            class="modal-arrow-button next"
            href=(links::details_with(listing.id, next, false))
            hx-get=(links::modal(listing.id, state, ModalInput::Action("next")))
            aria-label="Next image"
        { "❯" }
    }
}

fn close_button(id: i64, state: ModalState, label: &str) -> Markup {
    html! {
        a
            class="modal-close-button"
            href=(links::details_with(id, ModalState::Closed, false))
            hx-get=(links::modal(id, state, ModalInput::Action("close")))
            aria-label=(label)
        { "×" }
    }
}

/// Invisible element that reports a key press on the page.
fn key_listener(id: i64, state: ModalState, key: &str) -> Markup {
    html! {
        span
            hidden
            hx-get=(links::modal(id, state, ModalInput::Key(key)))
            hx-trigger=(format!("keyup[key=='{key}'] from:body"))
        {}
    }
}
