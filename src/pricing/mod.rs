pub mod types;

#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod console;
