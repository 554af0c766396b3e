use super::repository::Delivery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogisticsTab {
    #[default]
    Overview,
    Trucks,
    Deliveries,
}

impl LogisticsTab {
    pub const TABS: [(&'static str, &'static str); 3] = [
        ("overview", "Visão Geral"),
        ("trucks", "Frota"),
        ("deliveries", "Entregas"),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LogisticsTab::Overview => "overview",
            LogisticsTab::Trucks => "trucks",
            LogisticsTab::Deliveries => "deliveries",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "trucks" => LogisticsTab::Trucks,
            "deliveries" => LogisticsTab::Deliveries,
            _ => LogisticsTab::Overview,
        }
    }
}

/// Headline numbers of the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliverySummary {
    pub today: usize,
    pub in_route: usize,
    pub scheduled: usize,
    pub items: u32,
}

impl DeliverySummary {
    pub fn of(deliveries: &[Delivery], today: &str) -> Self {
        deliveries.iter().fold(Self::default(), |mut acc, d| {
            if d.date == today {
                acc.today += 1;
            }
            match d.status.as_str() {
                "Em Rota" => acc.in_route += 1,
                "Agendado" => acc.scheduled += 1,
                _ => {}
            }
            acc.items += d.items;
            acc
        })
    }
}

pub fn delivery_badge_class(status: &str) -> &'static str {
    match status {
        "Em Rota" => "bg-blue-100 text-blue-800",
        "Agendado" => "bg-yellow-100 text-yellow-800",
        "Entregue" => "bg-green-100 text-green-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::logistics::repository::LogisticsRepository;

    #[test]
    fn unknown_tab_key_falls_back_to_overview() {
        assert_eq!(LogisticsTab::from_key("trucks"), LogisticsTab::Trucks);
        assert_eq!(LogisticsTab::from_key("mapa"), LogisticsTab::Overview);
        for (key, _) in LogisticsTab::TABS {
            assert_eq!(LogisticsTab::from_key(key).key(), key);
        }
    }

    #[test]
    fn summary_counts_fixture_deliveries() {
        let deliveries = LogisticsRepository::new().deliveries();
        let summary = DeliverySummary::of(&deliveries, "2024-03-15");
        assert_eq!(
            summary,
            DeliverySummary {
                today: 2,
                in_route: 1,
                scheduled: 1,
                items: 6,
            }
        );
    }

    #[test]
    fn unknown_delivery_status_is_grey() {
        assert_eq!(delivery_badge_class("Pendente"), "bg-gray-100 text-gray-800");
        assert_eq!(delivery_badge_class("Em Rota"), "bg-blue-100 text-blue-800");
    }
}
