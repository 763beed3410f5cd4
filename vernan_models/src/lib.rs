pub mod contact;
pub mod field;
pub mod form;
pub mod status;
