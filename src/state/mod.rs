//! State module for prerender queue entries
//!
//! # Components
//!
//! - `PrerenderLocation`: one canonicalized page waiting to be (or already) rendered
//! - `LocationStatus`: lifecycle flag of a queued location
//! - `PageResults` / `Anchor`: what the render step hands back for a page

mod location;
mod location_status;
mod page;

// Re-export main types
pub use location::PrerenderLocation;
pub use location_status::LocationStatus;
pub use page::{Anchor, PageResults};
