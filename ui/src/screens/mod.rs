// Page shells rendered inside the site layout, one per route.

pub mod about;
pub mod contact;
pub mod features;
pub mod home;
pub mod pricing;
pub mod security;
