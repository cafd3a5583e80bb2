pub mod form;
pub mod status;
