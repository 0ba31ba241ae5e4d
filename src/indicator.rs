//! Show/hide bookkeeping for the transient zoom readout.
//!
//! Every `show` hands out a [`HideTicket`]. The caller arranges for the ticket
//! to come back through [`TransientIndicator::expire`] once the timeout fires;
//! a ticket from an earlier `show` no longer hides anything, so a retrigger
//! effectively cancels and reschedules the pending hide.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Default)]
pub struct TransientIndicator {
    visible: bool,
    generation: u64,
}

impl TransientIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> HideTicket {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        HideTicket(self.generation)
    }

    /// Hides the indicator if `ticket` is still the latest one. Returns whether
    /// it did.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if self.visible && ticket.0 == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Hides immediately and invalidates any outstanding ticket.
    pub fn hide(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.visible = false;
    }
}
