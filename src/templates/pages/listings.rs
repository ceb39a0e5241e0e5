use crate::domain::{Listing, RecomputePolicy, Reveal};
use crate::templates::{desktop_layout, links, listing_card};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub term: &'a str,
    /// Every listing matching `term`; only the revealed window is rendered.
    pub results: &'a [&'a Listing],
    pub reveal: Reveal,
    pub recompute: RecomputePolicy,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Apartment Sale Listings",
        html! {
            main class="search-page" {
                h1 { "Apartment Sale Listings" }

                form class="search-container" method="get" action="/" {
                    input
                        type="text"
                        name="q"
                        class="search-box"
                        value=(vm.term)
                        placeholder="Search for listings..."
                        aria-label="Search for listings"
                        autocomplete="off"
                        hx-get=(links::RESULTS)
                        hx-trigger=(vm.recompute.hx_trigger())
                        hx-target="#results"
                        hx-swap="outerHTML";
                }

                (results_fragment(vm))
            }
        },
    )
}

/// The results grid, swapped on every search.
pub fn results_fragment(vm: &ListingsVm) -> Markup {
    let shown = vm.reveal.window(vm.results);

    html! {
        div id="results" class="results-grid" {
            @if vm.results.is_empty() {
                p class="no-results" { "No listings found for \"" (vm.term) "\"." }
            } @else {
                @for listing in shown {
                    (listing_card(listing))
                }
                (sentinel(vm.term, vm.reveal, vm.results.len()))
            }
        }
    }
}

/// Cards revealed by one scroll step, followed by the next sentinel.
pub fn more_fragment(term: &str, batch: &[&Listing], reveal: Reveal, total: usize) -> Markup {
    html! {
        @for listing in batch {
            (listing_card(listing))
        }
        (sentinel(term, reveal, total))
    }
}

/// Loads the next batch once it scrolls into view. Renders nothing when
/// every result is already shown.
fn sentinel(term: &str, reveal: Reveal, total: usize) -> Markup {
    let mut next = reveal;
    next.reveal_more(total);

    html! {
        @if reveal.has_more(total) {
            div
                class="reveal-sentinel"
                hx-get=(links::more(term, reveal.visible()))
                hx-trigger="revealed"
                hx-swap="outerHTML"
            {
                a href=(links::list(term, next.visible())) class="show-more" { "Show more" }
            }
        }
    }
}
