pub mod patterns;
pub mod providers;
