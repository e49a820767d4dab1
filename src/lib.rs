// Pulse transmitter core modules
pub mod tx;

// Re-exports
pub use tx::PulseTx;
pub use tx::TxError;

pub use tx::output::CarrierSink;
pub use tx::program::Symbol;
pub use tx::units::interrupt_latch::EventFlags;
