pub mod form;
pub mod sent;
