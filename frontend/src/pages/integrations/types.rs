#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub status: IntegrationStatus,
    /// Only meaningful while connected.
    pub last_sync: Option<&'static str>,
}

impl Integration {
    pub fn is_connected(&self) -> bool {
        self.status == IntegrationStatus::Connected
    }
}
