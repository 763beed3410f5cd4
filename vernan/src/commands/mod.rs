pub mod interactive;
pub mod submit;
pub mod validate;
