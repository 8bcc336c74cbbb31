pub mod form;
pub mod kind;
pub mod model;
