use crate::domain::{Listing, MediaCounts, MediaEvent, ModalState, DESCRIPTION_CHAR_LIMIT};
use crate::templates::components::modal_root;
use crate::templates::links::{self, ModalInput};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DetailsVm<'a> {
    pub listing: &'a Listing,
    pub modal: ModalState,
    pub full_description: bool,
}

pub fn details_page(vm: &DetailsVm) -> Markup {
    let listing = vm.listing;

    desktop_layout(
        &listing.name,
        html! {
            main class="details-page" {
                (modal_root(listing, vm.modal))

                a href="/" class="back-link" { "‹ Back to Listings" }

                div class="details-content" {
                    h1 { (listing.name) }
                    (description(vm))

                    @if let Some(range) = &listing.price_range {
                        p class="item-price" { strong { "Price: " } (range.display()) }
                    }

                    div class="contact-info" {
                        h3 { "Contact & Location" }
                        @if let Some(address) = &listing.address {
                            p { strong { "Address:" } " " (address) }
                        }
                        @if let Some(phone) = &listing.phone_number {
                            p { strong { "Phone:" } " " (phone) }
                        }
                        @if let Some(landmark) = &listing.landmark {
                            p { strong { "Landmark:" } " " (landmark) }
                        }
                        @if let Some(brochure) = &listing.brochure_url {
                            p { a href=(brochure) target="_blank" rel="noopener" { "Download brochure (PDF)" } }
                        }
                    }

                    (nearby("Nearby Schools", &listing.schools))
                    (nearby("Nearby Hospitals", &listing.hospitals))

                    div class="details-map" {
                        h3 { "On the Map" }
                        iframe
                            title="Listing Location"
                            width="100%"
                            height="450"
                            style="border: 0"
                            loading="lazy"
                            allowfullscreen
                            src=(listing.map_embed_url()) {}
                    }

                    div class="details-media" {
                        @if !listing.detail_images.is_empty() {
                            h2 { "Gallery" }
                            (thumbnails(listing, Gallery::Images))
                        }

                        @if !listing.floor_plan_images.is_empty() {
                            h2 { "Floor Plans" }
                            (thumbnails(listing, Gallery::FloorPlans))
                        }

                        @if let Some(video) = &listing.video_url {
                            div class="details-video" {
                                h2 { "Video Tour" }
                                (video_thumbnail(listing, video))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn description(vm: &DetailsVm) -> Markup {
    let listing = vm.listing;
    let long = listing.has_long_description();
    let text = if long && !vm.full_description {
        listing.description_preview(DESCRIPTION_CHAR_LIMIT)
    } else {
        listing.description.clone()
    };

    html! {
        p class="item-description" {
            (text)
            @if long {
                " "
                a class="show-more-less-button"
                    href=(links::details_with(listing.id, vm.modal, !vm.full_description))
                {
                    @if vm.full_description { "Show less" } @else { "Show more" }
                }
            }
        }
    }
}

fn nearby(title: &str, places: &[String]) -> Markup {
    html! {
        @if !places.is_empty() {
            div class="nearby" {
                h3 { (title) }
                ul {
                    @for place in places {
                        li { (place) }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Gallery {
    Images,
    FloorPlans,
}

impl Gallery {
    fn open(self, index: usize) -> MediaEvent {
        match self {
            Gallery::Images => MediaEvent::OpenImage(index),
            Gallery::FloorPlans => MediaEvent::OpenFloorPlan(index),
        }
    }
}

fn thumbnails(listing: &Listing, gallery: Gallery) -> Markup {
    let counts = MediaCounts::of(listing);
    let (urls, class, label) = match gallery {
        Gallery::Images => (&listing.detail_images, "details-images", "view"),
        Gallery::FloorPlans => (&listing.floor_plan_images, "details-floorplans", "floor plan"),
    };

    html! {
        div class=(class) {
            @for (index, url) in urls.iter().enumerate() {
                @let target = ModalState::Closed.apply(gallery.open(index), counts);
                @let alt = format!("{} - {} {}", listing.name, label, index + 1);
                a
                    href=(links::details_with(listing.id, target, false))
                    hx-get=(links::modal(listing.id, target, ModalInput::Show))
                    hx-target="#modal-root"
                    hx-swap="outerHTML"
                {
                    img src=(url) alt=(alt) class="gallery-image" loading="lazy";
                }
            }
        }
    }
}

fn video_thumbnail(listing: &Listing, video: &str) -> Markup {
    let counts = MediaCounts::of(listing);
    let target = ModalState::Closed.apply(MediaEvent::OpenVideo, counts);

    html! {
        a
            class="video-thumbnail-container"
            href=(links::details_with(listing.id, target, false))
            hx-get=(links::modal(listing.id, ModalState::Closed, ModalInput::Action("video")))
            hx-target="#modal-root"
            hx-swap="outerHTML"
        {
            video width="100%" preload="metadata" {
                source src=(video) type="video/mp4";
            }
            div class="play-button-overlay" {}
        }
    }
}
