pub mod fs;
pub mod host;
pub mod intent;
pub mod opener;
pub mod strategy;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use host::*;
pub use intent::*;
pub use opener::*;
pub use strategy::*;
