pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use error::ApiError;
pub use models::*;
pub use registry::{DirectionTables, PacketInfo, PacketRegistry, PacketTable, RegistryEntry};
