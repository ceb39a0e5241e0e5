// src/domain/media.rs

use crate::domain::listing::Listing;
use std::fmt;
use std::str::FromStr;

/// Sizes of the media collections a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaCounts {
    pub images: usize,
    pub floor_plans: usize,
    pub has_video: bool,
}

impl MediaCounts {
    pub fn of(listing: &Listing) -> Self {
        Self {
            images: listing.detail_images.len(),
            floor_plans: listing.floor_plan_images.len(),
            has_video: listing.video_url.is_some(),
        }
    }
}

/// Which modal, if any, is open on the details page.
/// The three modals are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Image(usize),
    FloorPlan(usize),
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    OpenImage(usize),
    OpenFloorPlan(usize),
    OpenVideo,
    Close,
    Escape,
    OutsideClick,
    Next,
    Previous,
}

/// Keys the modal viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` name. Other keys are ignored.
    pub fn parse(name: &str) -> Option<Key> {
        match name {
            "Escape" | "Esc" => Some(Key::Escape),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    pub fn event(self) -> MediaEvent {
        match self {
            Key::Escape => MediaEvent::Escape,
            Key::ArrowLeft => MediaEvent::Previous,
            Key::ArrowRight => MediaEvent::Next,
        }
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn apply(self, event: MediaEvent, counts: MediaCounts) -> ModalState {
        match event {
            MediaEvent::OpenImage(i) if i < counts.images => ModalState::Image(i),
            MediaEvent::OpenFloorPlan(i) if i < counts.floor_plans => ModalState::FloorPlan(i),
            MediaEvent::OpenVideo if counts.has_video => ModalState::Video,
            MediaEvent::OpenImage(_) | MediaEvent::OpenFloorPlan(_) | MediaEvent::OpenVideo => {
                self
            }

            MediaEvent::Close | MediaEvent::Escape | MediaEvent::OutsideClick => {
                ModalState::Closed
            }

            MediaEvent::Next => self.step(counts, 1),
            MediaEvent::Previous => self.step(counts, -1),
        }
    }

    /// Moves within the open collection, wrapping at either end.
    /// Only index-bearing states move.
    fn step(self, counts: MediaCounts, delta: isize) -> ModalState {
        match self {
            ModalState::Image(i) if counts.images > 0 => {
                ModalState::Image(wrap(i, delta, counts.images))
            }
            ModalState::FloorPlan(i) if counts.floor_plans > 0 => {
                ModalState::FloorPlan(wrap(i, delta, counts.floor_plans))
            }
            other => other,
        }
    }

    /// Closes states that point at media the listing does not have.
    pub fn sanitize(self, counts: MediaCounts) -> ModalState {
        match self {
            ModalState::Image(i) if i >= counts.images => ModalState::Closed,
            ModalState::FloorPlan(i) if i >= counts.floor_plans => ModalState::Closed,
            ModalState::Video if !counts.has_video => ModalState::Closed,
            other => other,
        }
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

// URL token form: "image-2", "floorplan-0", "video". Empty means closed.
impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalState::Closed => Ok(()),
            ModalState::Image(i) => write!(f, "image-{i}"),
            ModalState::FloorPlan(i) => write!(f, "floorplan-{i}"),
            ModalState::Video => write!(f, "video"),
        }
    }
}

impl FromStr for ModalState {
    type Err = std::convert::Infallible;

    /// Anything unrecognised reads as closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s.split_once('-') {
            Some(("image", i)) => i.parse().map(ModalState::Image).ok(),
            Some(("floorplan", i)) => i.parse().map(ModalState::FloorPlan).ok(),
            None if s == "video" => Some(ModalState::Video),
            _ => None,
        };
        Ok(state.unwrap_or(ModalState::Closed))
    }
}
