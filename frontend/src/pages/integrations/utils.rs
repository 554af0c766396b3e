use super::{repository::IntegrationsRepository, types::Integration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationsTab {
    #[default]
    Ecommerce,
    Shipping,
    Payments,
}

impl IntegrationsTab {
    pub const TABS: [(&'static str, &'static str); 3] = [
        ("ecommerce", "E-commerce"),
        ("shipping", "Envios"),
        ("payment", "Pagamentos"),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            IntegrationsTab::Ecommerce => "ecommerce",
            IntegrationsTab::Shipping => "shipping",
            IntegrationsTab::Payments => "payment",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "shipping" => IntegrationsTab::Shipping,
            "payment" => IntegrationsTab::Payments,
            _ => IntegrationsTab::Ecommerce,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            IntegrationsTab::Ecommerce => "Plataformas de E-commerce",
            IntegrationsTab::Shipping => "Serviços de Envio",
            IntegrationsTab::Payments => "Gateways de Pagamento",
        }
    }

    pub fn integrations(&self, repository: &IntegrationsRepository) -> Vec<Integration> {
        match self {
            IntegrationsTab::Ecommerce => repository.ecommerce(),
            IntegrationsTab::Shipping => repository.shipping(),
            IntegrationsTab::Payments => repository.payments(),
        }
    }
}

/// `"5 de 8 conectadas"`; the platform list is feminine, the others masculine.
pub fn connected_summary(tab: IntegrationsTab, integrations: &[Integration]) -> String {
    let connected = integrations.iter().filter(|i| i.is_connected()).count();
    let word = match tab {
        IntegrationsTab::Ecommerce => "conectadas",
        _ => "conectados",
    };
    format!("{} de {} {}", connected, integrations.len(), word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_count_connected_entries() {
        let repo = IntegrationsRepository::new();
        let cases = [
            (IntegrationsTab::Ecommerce, "5 de 8 conectadas"),
            (IntegrationsTab::Shipping, "5 de 8 conectados"),
            (IntegrationsTab::Payments, "3 de 3 conectados"),
        ];
        for (tab, expected) in cases {
            assert_eq!(connected_summary(tab, &tab.integrations(&repo)), expected);
        }
    }

    #[test]
    fn disconnected_entries_have_no_sync_time() {
        let repo = IntegrationsRepository::new();
        for integration in repo.shipping() {
            assert_eq!(integration.is_connected(), integration.last_sync.is_some());
        }
        assert_eq!(IntegrationsTab::from_key("payment"), IntegrationsTab::Payments);
        assert_eq!(IntegrationsTab::from_key("erp"), IntegrationsTab::Ecommerce);
    }
}
