pub mod board;
pub mod error;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::BoardError;
pub use types::*;
