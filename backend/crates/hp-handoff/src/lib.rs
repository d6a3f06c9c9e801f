pub mod channel;
pub mod error;
pub mod memory_storage;
pub mod storage;

pub use channel::{CHAT_DOCTOR, HandoffChannels, SELECTED_DOCTOR};
pub use error::{HandoffError, Result};
pub use memory_storage::MemoryStorage;
pub use storage::HandoffStorage;
