pub mod blend;
pub mod ease;
pub mod engine;
pub mod timing;
