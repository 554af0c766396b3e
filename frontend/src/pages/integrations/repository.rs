use super::types::{Integration, IntegrationStatus};

fn build(entries: &[(&'static str, &'static str, Option<&'static str>)]) -> Vec<Integration> {
    entries
        .iter()
        .map(|&(id, name, last_sync)| Integration {
            id,
            name,
            status: if last_sync.is_some() {
                IntegrationStatus::Connected
            } else {
                IntegrationStatus::Disconnected
            },
            last_sync,
        })
        .collect()
}

/// Integration catalogue. Display only; nothing here talks to a provider.
#[derive(Clone, Default)]
pub struct IntegrationsRepository;

impl IntegrationsRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn ecommerce(&self) -> Vec<Integration> {
        build(&[
            ("yampi", "Yampi", Some("2024-03-15 14:30")),
            ("shopify", "Shopify", Some("2024-03-15 15:45")),
            ("lojaintegrada", "Loja Integrada", None),
            ("nuvemshop", "NuvemShop", Some("2024-03-15 12:20")),
            ("tray", "Tray", None),
            ("baggy", "Baggy", None),
            ("woocommerce", "WooCommerce", Some("2024-03-15 13:15")),
            ("wordpress", "WordPress", Some("2024-03-15 13:15")),
        ])
    }

    pub fn shipping(&self) -> Vec<Integration> {
        build(&[
            ("correios", "Correios", Some("2024-03-15 14:00")),
            ("fedex", "FedEx", Some("2024-03-15 15:30")),
            ("loggi", "Loggi", None),
            ("jadlog", "JadLog", Some("2024-03-15 11:45")),
            ("melhorenvio", "Melhor Envio", Some("2024-03-15 13:20")),
            ("mandae", "Mandaê", None),
            ("frenet", "Frenet", Some("2024-03-15 12:10")),
            ("gologgy", "GoLoggy", None),
        ])
    }

    pub fn payments(&self) -> Vec<Integration> {
        build(&[
            ("appmax", "Appmax", Some("2024-03-15 14:15")),
            ("pagarme", "Pagar.me", Some("2024-03-15 15:00")),
            ("mercadopago", "MercadoPago", Some("2024-03-15 13:45")),
        ])
    }
}
