pub mod naming;
pub mod protocol;

pub use naming::*;
pub use protocol::*;
