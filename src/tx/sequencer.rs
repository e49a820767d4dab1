use crate::tx::config::Config;
use crate::tx::consts::{PC_MASK, PC_MID};
use crate::tx::program::ProgramStore;
use crate::tx::units::duration::resolve;
use crate::tx::units::hold_timer::HoldTimer;
use crate::tx::units::interrupt_latch::EventFlags;

#[cfg(feature = "tracing")]
use log::trace;

/// The sequencer execution engine.
///
/// Owns the internal program counter (half-bit units, wrapping by mask),
/// the loop counter and the hold timer. One `clock()` call is one timing
/// tick; events raised by an advance are returned to the caller.
pub struct Sequencer {
    running: bool,
    pc: u16,
    loop_remaining: u8,
    level: bool,
    hold: HoldTimer,
}

impl Sequencer {
    pub fn new() -> Sequencer {
        Sequencer {
            running: false,
            pc: 0,
            loop_remaining: 0,
            level: false,
            hold: HoldTimer::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn level(&self) -> bool {
        self.level
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn start(&mut self, config: &Config, program: &ProgramStore) {
        self.pc = (config.start_index() as u16) << 1;
        self.loop_remaining = config.loop_count();
        self.load(config, program);
        self.running = true;
    }

    /// Immediate; the output decays to the idle level on the same tick.
    pub fn stop(&mut self) {
        self.running = false;
    }

    fn load(&mut self, config: &Config, program: &ProgramStore) {
        let symbol = program.symbol_at(self.pc, config);
        let resolved = resolve(config, self.pc, symbol);
        self.level = resolved.level;
        self.hold.load(resolved.cycles);

        #[cfg(feature = "tracing")]
        trace!(
            "symbol at pc={} level={} hold={}",
            self.pc, resolved.level, resolved.cycles
        );
    }

    pub fn clock(&mut self, config: &Config, program: &ProgramStore) -> EventFlags {
        if !self.running {
            return EventFlags::empty();
        }
        if self.hold.clock() {
            self.advance(config, program)
        } else {
            EventFlags::empty()
        }
    }

    fn advance(&mut self, config: &Config, program: &ProgramStore) -> EventFlags {
        let mut events = EventFlags::empty();

        if self.pc == (config.end_index() as u16) << 1 {
            if config.loop_forever() {
                self.pc = (config.loopback_index() as u16) << 1;
                events |= EventFlags::LOOP;
            } else if self.loop_remaining > 0 {
                self.loop_remaining -= 1;
                self.pc = (config.loopback_index() as u16) << 1;
                events |= EventFlags::LOOP;
            } else {
                // timer fires with the end of the run on this revision
                events |= EventFlags::PROGRAM_END | EventFlags::TIMER;
                self.running = false;
                return events;
            }
        } else {
            let step = if config.two_bits_per_symbol() { 4 } else { 1 };
            let old = self.pc;
            self.pc = (self.pc + step) & PC_MASK;
            if old < PC_MID && self.pc >= PC_MID {
                events |= EventFlags::POSITION_MID;
            }
        }

        self.load(config, program);
        events
    }
}
