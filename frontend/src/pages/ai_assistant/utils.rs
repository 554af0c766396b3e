#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantTab {
    #[default]
    Suggestions,
    Tracking,
    Messages,
}

impl AssistantTab {
    pub const TABS: [(&'static str, &'static str); 3] = [
        ("suggestions", "Sugestões de Rotas"),
        ("tracking", "Rastreamento em Tempo Real"),
        ("messages", "Mensagens Automáticas"),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AssistantTab::Suggestions => "suggestions",
            AssistantTab::Tracking => "tracking",
            AssistantTab::Messages => "messages",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "tracking" => AssistantTab::Tracking,
            "messages" => AssistantTab::Messages,
            _ => AssistantTab::Suggestions,
        }
    }
}

/// `-23.550520` -> `"-23.5505"`.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_fall_back_to_suggestions() {
        assert_eq!(AssistantTab::from_key("messages"), AssistantTab::Messages);
        assert_eq!(AssistantTab::from_key(""), AssistantTab::Suggestions);
    }

    #[test]
    fn coordinates_keep_four_decimals() {
        assert_eq!(format_coordinate(-23.550520), "-23.5505");
        assert_eq!(format_coordinate(-46.639416), "-46.6394");
    }
}
