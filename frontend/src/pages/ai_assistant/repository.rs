use super::types::{AutomatedMessage, RouteSuggestion, TrackedVehicle};

/// Canned assistant output. Nothing is computed or sent.
#[derive(Clone, Default)]
pub struct AssistantRepository;

impl AssistantRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn routes(&self) -> Vec<RouteSuggestion> {
        vec![
            RouteSuggestion {
                id: "R001",
                origin: "Centro de Distribuição - SP",
                destinations: vec!["Vila Mariana", "Moema", "Itaim Bibi"],
                distance: "15.4 km",
                time: "45 min",
                fuel: "3.2 L",
                cost: "R$ 28,50",
                optimization: "12% mais eficiente que a rota anterior",
            },
            RouteSuggestion {
                id: "R002",
                origin: "Centro de Distribuição - SP",
                destinations: vec!["Pinheiros", "Vila Madalena", "Perdizes"],
                distance: "12.8 km",
                time: "38 min",
                fuel: "2.8 L",
                cost: "R$ 24,30",
                optimization: "15% mais eficiente que a rota anterior",
            },
        ]
    }

    pub fn vehicles(&self) -> Vec<TrackedVehicle> {
        vec![
            TrackedVehicle {
                id: "V001",
                lat: -23.550520,
                lng: -46.633308,
                driver: "Carlos Silva",
                status: "Em entrega",
            },
            TrackedVehicle {
                id: "V002",
                lat: -23.555994,
                lng: -46.639416,
                driver: "Ana Santos",
                status: "Retornando",
            },
            TrackedVehicle {
                id: "V003",
                lat: -23.548147,
                lng: -46.628756,
                driver: "Pedro Lima",
                status: "Em rota",
            },
        ]
    }

    pub fn messages(&self) -> Vec<AutomatedMessage> {
        vec![
            AutomatedMessage {
                id: "M001",
                kind: "Promoção",
                content: "🎉 Super promoção de frete grátis para entregas hoje! Use o código FRETEOFF",
                status: "Enviado",
                sent: 150,
                opened: 89,
                converted: 23,
            },
            AutomatedMessage {
                id: "M002",
                kind: "Localização",
                content: "🚚 Seu pedido está a caminho! Acompanhe em tempo real: [link]",
                status: "Agendado",
                sent: 85,
                opened: 72,
                converted: 0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rate_rounds_and_handles_nothing_sent() {
        let messages = AssistantRepository::new().messages();
        assert_eq!(messages[0].open_rate(), 59);
        assert_eq!(messages[1].open_rate(), 85);
        let idle = AutomatedMessage {
            sent: 0,
            opened: 0,
            ..messages[0]
        };
        assert_eq!(idle.open_rate(), 0);
    }
}
