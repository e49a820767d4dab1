use crate::tx::config::Config;
use crate::tx::sequencer::Sequencer;

/// Seam to the external carrier-modulation collaborator.
///
/// When carrier mode is on, the transmitter hands over the raw
/// (level, enable) pair plus the programmed carrier duration instead of
/// driving the line itself; the modulated waveform is the collaborator's
/// business.
pub trait CarrierSink {
    fn carrier_update(&mut self, level: bool, enable: bool, duration: u8);
}

/// Line level after the invert/idle policy: the resolved symbol level
/// while running, the idle level otherwise.
pub(crate) fn line_level(config: &Config, sequencer: &Sequencer) -> bool {
    if sequencer.is_running() {
        sequencer.level()
    } else {
        config.idle_level() ^ config.invert_output()
    }
}
