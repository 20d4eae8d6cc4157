// Adapters layer: concrete sinks for the Output port.

pub mod output;

pub use output::{ConsoleOutput, MemoryOutput};
