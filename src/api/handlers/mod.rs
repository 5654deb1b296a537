//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod basic;
pub mod redirect;
pub mod urls;

pub use basic::{ping_handler, status_handler};
pub use redirect::redirect_handler;
pub use urls::{
    create_url_handler, delete_url_handler, get_url_handler, list_urls_handler,
    update_url_handler,
};
