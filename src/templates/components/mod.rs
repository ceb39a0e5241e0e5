use crate::domain::Listing;
use crate::templates::links;
use maud::{html, Markup};

pub mod error;
pub mod modal;

pub use error::error_page;
pub use modal::modal_root;

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(links::details(listing.id)) class="grid-item-link" {
            div class="grid-item" {
                img src=(listing.image_url) alt=(listing.name) class="grid-item-image" loading="lazy";
                div class="grid-item-content" {
                    h2 { (listing.name) }
                    @if let Some(place) = &listing.place_name {
                        p class="item-place" { (place) }
                    }
                    @if let Some(range) = &listing.price_range {
                        p class="item-price" { (range.display()) }
                    }
                }
            }
        }
    }
}
