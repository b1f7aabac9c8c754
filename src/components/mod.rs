//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod error_banner;
pub mod loading;
pub mod nav;

pub use error_banner::ErrorBanner;
pub use loading::{CardGridSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
