pub mod completion;
pub mod generation;
pub mod message;
