//! Dioxus components that make up the site chrome.
//!
//! [`SiteLayout`] provides the navigation snapshot, theme and route context to everything
//! below it. [`TopNav`] reads those contexts and renders the link bar with [`ExternalLink`]
//! and [`InternalLink`].

mod layout;
pub use layout::SiteLayout;

mod link;
pub use link::{ExternalLink, InternalLink};

mod top_nav;
pub use top_nav::{top_nav_stylesheet, TopNav, TOP_NAV_VARIANT};
