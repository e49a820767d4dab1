use bitflags::bitflags;

bitflags! {
    /// Sequencer event kinds, doubling as latch and enable masks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EventFlags: u8 {
        const TIMER        = 1 << 0;
        const LOOP         = 1 << 1;
        const PROGRAM_END  = 1 << 2;
        const POSITION_MID = 1 << 3;
    }
}

/// Sticky per-event flags.
///
/// An event sets its bit; the bit stays set until the host clears it. The
/// clear is a bitwise AND with the complement of the request, so a request
/// bit of 0 leaves that latch untouched.
pub struct InterruptLatch {
    latched: EventFlags,
}

impl InterruptLatch {
    pub fn new() -> InterruptLatch {
        InterruptLatch {
            latched: EventFlags::empty(),
        }
    }

    pub fn raise(&mut self, events: EventFlags) {
        self.latched |= events;
    }

    pub fn clear(&mut self, request: EventFlags) {
        self.latched &= !request;
    }

    pub fn latched(&self) -> EventFlags {
        self.latched
    }

    pub fn asserted(&self, enables: EventFlags) -> bool {
        !(self.latched & enables).is_empty()
    }
}
