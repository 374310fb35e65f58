pub mod element;
pub mod footer;
pub mod form;
pub mod navbar;
