#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Picks queued at the desk; driven by the dock's +/−/reset buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
