use std::cell::Cell;

/// Orders overlapping requests so only the most recently issued one may
/// apply its response.
#[derive(Debug, Default)]
pub struct RequestFence {
    latest: Cell<u64>,
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestFence {
    /// Issue a ticket for a new request, superseding all earlier tickets.
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
