//! Custom widget components

mod footer;
mod header;
mod result_card;
mod url_form;

pub use footer::Footer;
pub use header::Header;
pub use result_card::ResultCard;
pub use url_form::UrlForm;
