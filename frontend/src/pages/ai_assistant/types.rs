#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSuggestion {
    pub id: &'static str,
    pub origin: &'static str,
    pub destinations: Vec<&'static str>,
    pub distance: &'static str,
    pub time: &'static str,
    pub fuel: &'static str,
    pub cost: &'static str,
    pub optimization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedVehicle {
    pub id: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub driver: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatedMessage {
    pub id: &'static str,
    pub kind: &'static str,
    pub content: &'static str,
    pub status: &'static str,
    pub sent: u32,
    pub opened: u32,
    pub converted: u32,
}

impl AutomatedMessage {
    /// Opened over sent, as a whole percentage.
    pub fn open_rate(&self) -> u32 {
        if self.sent == 0 {
            0
        } else {
            (f64::from(self.opened) * 100.0 / f64::from(self.sent)).round() as u32
        }
    }
}
