use bitflags::bitflags;

bitflags! {
    /* Control register, offset 0x00:
        bit  0..3  : interrupt clear strobes (timer, loop, program end,
                     position mid) - write-1-to-clear, read back as the
                     live latch state
        bit  4     : start strobe
        bit  5     : stop strobe
        bit  8..11 : interrupt enables (timer, loop, program end,
                     position mid)
        bit 12     : loop forever
        bit 13     : idle level
        bit 14     : invert output
        bit 15     : carrier enable
        bit 16     : two bits per symbol
        bit 17..24 : one-bit-mode expansion codes, 2 bits each
                     (low_symbol_0, low_symbol_1, high_symbol_0,
                     high_symbol_1) - decoded in Config, not flags
    */
    #[derive(Clone, Copy)]
    pub struct Control: u32 {
        const CLEAR_TIMER        = 1 << 0;
        const CLEAR_LOOP         = 1 << 1;
        const CLEAR_PROGRAM_END  = 1 << 2;
        const CLEAR_POSITION_MID = 1 << 3;
        const START              = 1 << 4;
        const STOP               = 1 << 5;

        const TIMER_INT_EN        = 1 << 8;
        const LOOP_INT_EN         = 1 << 9;
        const PROGRAM_END_INT_EN  = 1 << 10;
        const POSITION_MID_INT_EN = 1 << 11;

        const LOOP_FOREVER        = 1 << 12;
        const IDLE_LEVEL          = 1 << 13;
        const INVERT_OUTPUT       = 1 << 14;
        const CARRIER_EN          = 1 << 15;
        const TWO_BITS_PER_SYMBOL = 1 << 16;

        // act-on-write bits, never stored
        const STROBES = 0b0011_1111;
    }
}

/// Bit position of the first one-bit-mode expansion code field.
pub const EXPANSION_CODE_SHIFT: u32 = 17;
