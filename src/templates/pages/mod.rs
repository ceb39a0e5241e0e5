pub mod details;
pub mod listings;
pub mod not_found;

pub use details::{details_page, DetailsVm};
pub use listings::{listings_page, more_fragment, results_fragment, ListingsVm};
pub use not_found::listing_not_found_page;
