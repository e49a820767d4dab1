use log::{debug, warn};
use thiserror::Error;

use config::Config;
use consts::{
    PROGRAM_WINDOW_END, PROGRAM_WINDOW_START, REG_ADDRESSING, REG_AUXILIARY, REG_CARRIER,
    REG_CONTROL, REG_MAIN_DURATIONS,
};
use control::Control;
use output::CarrierSink;
use program::ProgramStore;
use sequencer::Sequencer;
use units::interrupt_latch::{EventFlags, InterruptLatch};

pub mod config;
pub mod consts;
pub mod control;
pub mod output;
pub mod program;
pub mod sequencer;
pub mod units;


#[derive(Debug, Error)]
pub enum TxError {
    #[error("Invalid pulse register read: 0x{0:02X}")]
    InvalidRegisterRead(u8),

    #[error("Invalid pulse register write: 0x{0:02X}")]
    InvalidRegisterWrite(u8),
}

/// The pulse transmitter peripheral core.
///
/// Hosts drive it through word/byte register writes and one `clock()` call
/// per timing tick; the output surface is the resolved line level, the
/// running ("valid") flag and the gated interrupt line.
///
/// Register and program writes are accepted at any time. Writing either
/// while the engine is running yields undefined waveform content, though
/// the state machine itself stays well-defined; hosts are expected to
/// configure while stopped.
pub struct PulseTx {
    config: Config,
    program: ProgramStore,
    sequencer: Sequencer,
    interrupts: InterruptLatch,

    pub error: Option<TxError>,
}

impl Default for PulseTx {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseTx {
    pub fn new() -> PulseTx {
        PulseTx {
            config: Config::new(),
            program: ProgramStore::new(),
            sequencer: Sequencer::new(),
            interrupts: InterruptLatch::new(),
            error: None,
        }
    }

    pub fn reset(&mut self) {
        self.config = Config::new();
        self.program.clear();
        self.sequencer = Sequencer::new();
        self.interrupts = InterruptLatch::new();
        self.error = None;
    }

    /// Full-word register write; all fields of the register update in one
    /// tick.
    pub fn write_word(&mut self, addr: u8, value: u32) {
        match addr {
            REG_CONTROL => self.control_write(value, u32::MAX),
            REG_ADDRESSING => self.config.write_addressing(value, u32::MAX),
            REG_MAIN_DURATIONS => self.config.write_main_durations(value, u32::MAX),
            REG_AUXILIARY => self.config.write_auxiliary(value, u32::MAX),
            REG_CARRIER => self.config.write_carrier(value, u32::MAX),
            PROGRAM_WINDOW_START..=PROGRAM_WINDOW_END => {
                let offset = (addr & !3) - PROGRAM_WINDOW_START;
                self.program.write_word((offset >> 2) as usize, value);
            }
            _ => {
                warn!("invalid register write 0x{:02X}", addr);
                self.error = Some(TxError::InvalidRegisterWrite(addr));
            }
        }
    }

    /// Byte register write; touches only the addressed 8 bits and leaves
    /// the rest of the register unchanged.
    pub fn write_byte(&mut self, addr: u8, value: u8) {
        if (PROGRAM_WINDOW_START..=PROGRAM_WINDOW_END).contains(&addr) {
            self.program
                .write_byte((addr - PROGRAM_WINDOW_START) as usize, value);
            return;
        }

        let shift = ((addr & 3) as u32) * 8;
        let value = (value as u32) << shift;
        let mask = 0xFFu32 << shift;
        match addr & !3 {
            REG_CONTROL => self.control_write(value, mask),
            REG_ADDRESSING => self.config.write_addressing(value, mask),
            REG_MAIN_DURATIONS => self.config.write_main_durations(value, mask),
            REG_AUXILIARY => self.config.write_auxiliary(value, mask),
            REG_CARRIER => self.config.write_carrier(value, mask),
            _ => {
                warn!("invalid register write 0x{:02X}", addr);
                self.error = Some(TxError::InvalidRegisterWrite(addr));
            }
        }
    }

    pub fn read_word(&mut self, addr: u8) -> u32 {
        match addr {
            // bits 0..3 read as the live latch state; strobes read 0
            REG_CONTROL => self.config.control_bits() | self.interrupts.latched().bits() as u32,
            REG_ADDRESSING => self.config.addressing_bits(),
            REG_MAIN_DURATIONS => self.config.main_duration_bits(),
            REG_AUXILIARY => self.config.auxiliary_bits(),
            REG_CARRIER => self.config.carrier_bits(),
            PROGRAM_WINDOW_START..=PROGRAM_WINDOW_END => {
                let offset = (addr & !3) - PROGRAM_WINDOW_START;
                self.program.read_word((offset >> 2) as usize)
            }
            _ => {
                self.error = Some(TxError::InvalidRegisterRead(addr));
                0
            }
        }
    }

    fn control_write(&mut self, value: u32, mask: u32) {
        let strobes = Control::from_bits_retain(value & mask);
        self.config.write_control(value, mask);

        let mut clear = EventFlags::empty();
        if strobes.contains(Control::CLEAR_TIMER) {
            clear |= EventFlags::TIMER;
        }
        if strobes.contains(Control::CLEAR_LOOP) {
            clear |= EventFlags::LOOP;
        }
        if strobes.contains(Control::CLEAR_PROGRAM_END) {
            clear |= EventFlags::PROGRAM_END;
        }
        if strobes.contains(Control::CLEAR_POSITION_MID) {
            clear |= EventFlags::POSITION_MID;
        }
        if !clear.is_empty() {
            self.interrupts.clear(clear);
        }

        // stop wins when a single write carries both strobes
        if strobes.contains(Control::STOP) {
            self.stop();
        } else if strobes.contains(Control::START) {
            self.start();
        }
    }

    fn start(&mut self) {
        // a fresh run must not carry over stale interrupt state
        self.interrupts.clear(EventFlags::all());
        self.sequencer.start(&self.config, &self.program);
        debug!(
            "program started at index {} (loop count {})",
            self.config.start_index(),
            self.config.loop_count()
        );
    }

    fn stop(&mut self) {
        self.sequencer.stop();
        debug!("program stopped");
    }

    /// One timing tick. Returns the events raised on this tick; the same
    /// events are accumulated in the sticky interrupt latch.
    pub fn clock(&mut self) -> EventFlags {
        let events = self.sequencer.clock(&self.config, &self.program);
        if !events.is_empty() {
            self.interrupts.raise(events);
        }
        events
    }

    /// The waveform pin: resolved symbol level while running, idle level
    /// otherwise.
    pub fn output_level(&self) -> bool {
        output::line_level(&self.config, &self.sequencer)
    }

    /// The valid/running status pin.
    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    /// The level-asserted interrupt line: latched events gated by their
    /// enables.
    #[inline(always)]
    pub fn irq_asserted(&self) -> bool {
        self.interrupts.asserted(self.config.interrupt_enables())
    }

    pub fn latched_interrupts(&self) -> EventFlags {
        self.interrupts.latched()
    }

    /// Hand the raw (level, enable) pair to the external carrier
    /// modulator.
    pub fn drive_carrier(&self, sink: &mut dyn CarrierSink) {
        let enable = self.config.carrier_en() && self.sequencer.is_running();
        sink.carrier_update(self.output_level(), enable, self.config.carrier_duration());
    }
}
