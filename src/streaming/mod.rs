pub mod item;
pub mod multiplexer;
pub mod observer;

// Re-export commonly used types
pub use item::StreamItem;
pub use multiplexer::{MultiplexedStream, SourceMultiplexer};
pub use observer::{Observer, observe};
