/// Guard against out-of-order fetch completions. A view owns one sequence
/// per state slot, takes a ticket before each fetch, and applies a
/// response only while its ticket is still the latest issued. A slow early
/// response that lands after a newer request simply fails the check and is
/// discarded.
///
/// Library surface for interactive frontends that fetch concurrently; the
/// bundled CLI runs one fetch per invocation and has no use for it.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
