// Purpose - where rendered frames go: device bridges and test sinks

#[cfg(feature = "rtrb")]
pub mod ring;
pub mod sink;

#[cfg(feature = "rtrb")]
pub use ring::{ring, RingSink, RingSource};
pub use sink::{AudioSink, MemorySink};
