pub mod use_page_interactions;
