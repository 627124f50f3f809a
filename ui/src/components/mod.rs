//! Shared components for the site shell: the header with its mobile menu,
//! the footer, and the building blocks page shells are made of.
pub mod page_interactions;
pub mod section;
pub mod site_footer;
pub mod site_header;
