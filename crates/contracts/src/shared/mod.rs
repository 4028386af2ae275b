pub mod apply_form;
pub mod error;
pub mod pagination;
pub mod phone;
