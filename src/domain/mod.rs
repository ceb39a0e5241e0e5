pub mod listing;
pub mod media;
pub mod reveal;
pub mod search;

pub use listing::{Listing, PriceRange, DESCRIPTION_CHAR_LIMIT};
pub use media::{Key, MediaCounts, MediaEvent, ModalState};
pub use reveal::{Reveal, SearchState, BATCH_SIZE};
pub use search::{filter_listings, RecomputePolicy};
