use crate::tx::config::Config;
use crate::tx::program::Symbol;

/// A symbol resolved to concrete output: how many cycles to hold, at what
/// line level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub cycles: u32,
    pub level: bool,
}

/// Map the symbol at `pc` to `(cycles, level)`.
///
/// The first 8 symbol positions can be steered onto the auxiliary timing
/// track by `aux_mask`; everything else uses the main table, indexed by
/// `(level, selector)`. The resolved hold is `(duration + 2) << prescaler`,
/// so no symbol is ever shorter than 2 cycles. Pure function of the
/// arguments.
pub fn resolve(config: &Config, pc: u16, symbol: Symbol) -> Resolved {
    let position = if config.two_bits_per_symbol() {
        pc >> 2
    } else {
        pc >> 1
    };

    let (duration, prescaler) = if position < 8 && config.aux_mask() & (1 << position) != 0 {
        (
            config.aux_duration(symbol.selector),
            config.aux_prescaler(),
        )
    } else {
        (
            config.main_duration(symbol.code()),
            config.main_prescaler(),
        )
    };

    Resolved {
        cycles: (duration as u32 + 2) << prescaler,
        level: symbol.level ^ config.invert_output(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::control::Control;

    fn config_2bps() -> Config {
        let mut config = Config::new();
        config.write_control(Control::TWO_BITS_PER_SYMBOL.bits(), u32::MAX);
        config
    }

    #[test]
    fn hold_formula_over_full_duration_and_prescaler_range() {
        for prescaler in 0..16u32 {
            for duration in 0..256u32 {
                let mut config = config_2bps();
                config.write_main_durations(duration, u32::MAX); // low_a
                config.write_auxiliary(prescaler << 28, u32::MAX);

                let resolved = resolve(&config, 0, Symbol::from_code(0));
                assert_eq!(resolved.cycles, (duration + 2) << prescaler);
                assert!(resolved.cycles >= 2);
            }
        }
    }

    #[test]
    fn main_table_indexed_by_level_and_selector() {
        let mut config = config_2bps();
        config.write_main_durations(0x0D0A_0301, u32::MAX);

        let cases = [(0u8, 1u32), (1, 3), (2, 10), (3, 13)];
        for (code, duration) in cases {
            let resolved = resolve(&config, 0, Symbol::from_code(code));
            assert_eq!(resolved.cycles, duration + 2, "code {}", code);
        }
    }

    #[test]
    fn aux_mask_steers_first_eight_positions() {
        let mut config = config_2bps();
        config.write_main_durations(0x0101_0101, u32::MAX);
        // mask covers positions 1 and 3; aux_a = 50, aux_b = 100, aux prescaler 3
        config.write_auxiliary(0b0000_1010 | (50 << 8) | (100 << 16) | (3 << 24), u32::MAX);

        // position 0: main track
        assert_eq!(resolve(&config, 0, Symbol::from_code(0)).cycles, 3);
        // position 1: aux track, selector A
        assert_eq!(resolve(&config, 4, Symbol::from_code(0)).cycles, (50 + 2) << 3);
        // position 1, selector B
        assert_eq!(resolve(&config, 4, Symbol::from_code(1)).cycles, (100 + 2) << 3);
        // position 3: aux track
        assert_eq!(resolve(&config, 12, Symbol::from_code(2)).cycles, (50 + 2) << 3);
    }

    #[test]
    fn positions_past_eight_ignore_the_mask() {
        let mut config = config_2bps();
        config.write_main_durations(0x0505_0505, u32::MAX);
        config.write_auxiliary(0xFF | (200 << 8) | (200 << 16), u32::MAX);

        // position 8 (pc = 32) stays on the main track even with a full mask
        assert_eq!(resolve(&config, 32, Symbol::from_code(0)).cycles, 7);
        // position 100 likewise
        assert_eq!(resolve(&config, 400, Symbol::from_code(3)).cycles, 7);
    }

    #[test]
    fn invert_flips_the_resolved_level() {
        let mut config = config_2bps();
        assert!(resolve(&config, 0, Symbol::from_code(2)).level);
        assert!(!resolve(&config, 0, Symbol::from_code(0)).level);

        config.write_control(
            (Control::TWO_BITS_PER_SYMBOL | Control::INVERT_OUTPUT).bits(),
            u32::MAX,
        );
        assert!(!resolve(&config, 0, Symbol::from_code(2)).level);
        assert!(resolve(&config, 0, Symbol::from_code(0)).level);
    }

    #[test]
    fn one_bit_mode_tracks_by_stored_bit_index() {
        let mut config = Config::new();
        config.write_main_durations(0x0101_0101, u32::MAX);
        config.write_auxiliary(0b0000_0010 | (60 << 8) | (60 << 16), u32::MAX);

        // pc 2 and 3 are the two halves of stored bit 1: both auxiliary
        assert_eq!(resolve(&config, 2, Symbol::from_code(0)).cycles, 62);
        assert_eq!(resolve(&config, 3, Symbol::from_code(1)).cycles, 62);
        // pc 4 is stored bit 2: main
        assert_eq!(resolve(&config, 4, Symbol::from_code(0)).cycles, 3);
    }
}
