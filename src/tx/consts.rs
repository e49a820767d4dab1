// Register offsets (byte addresses within the peripheral's window).
pub const REG_CONTROL: u8 = 0x00;
pub const REG_ADDRESSING: u8 = 0x04;
pub const REG_MAIN_DURATIONS: u8 = 0x08;
pub const REG_AUXILIARY: u8 = 0x0C;
pub const REG_CARRIER: u8 = 0x10;

// Word-addressed window into the program store.
pub const PROGRAM_WINDOW_START: u8 = 0x20;
pub const PROGRAM_WINDOW_END: u8 = 0x3F;

/// Program store size: 8 words = 256 stored bits
/// (128 two-bit symbols, or 256 one-bit symbols).
pub const PROGRAM_WORDS: usize = 8;
pub const PROGRAM_BIT_MASK: u16 = 0xFF;

/// Internal program-counter capacity in half-bit units. Power of two, so
/// the counter wraps by masking.
pub const PC_CAP: u16 = 512;
pub const PC_MASK: u16 = PC_CAP - 1;

/// Crossing this internal position on the way up raises the mid event.
pub const PC_MID: u16 = PC_CAP / 2;

/// The loop-count field is 7 bits wide.
pub const LOOP_COUNT_MASK: u32 = 0x7F;
