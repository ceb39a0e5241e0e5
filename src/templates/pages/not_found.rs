use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn listing_not_found_page() -> Markup {
    desktop_layout(
        "Listing Not Found",
        html! {
            main class="details-page" {
                h1 { "Listing Not Found" }
                p { "The listing you are looking for does not exist." }
                a href="/" class="back-link" { "Back to Listings" }
            }
        },
    )
}
