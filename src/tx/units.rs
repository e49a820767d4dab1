pub mod duration;
pub mod hold_timer;
pub mod interrupt_latch;
