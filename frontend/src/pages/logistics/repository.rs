use crate::models::{Driver, FuelType, Truck, TruckDocuments, TruckStatus};

/// Scheduled delivery, shown read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: String,
    pub order: String,
    pub customer: String,
    pub address: String,
    pub date: String,
    pub status: String,
    pub items: u32,
}

/// Seed data for the logistics panel.
#[derive(Clone, Default)]
pub struct LogisticsRepository;

impl LogisticsRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn trucks(&self) -> Vec<Truck> {
        vec![Truck {
            id: "1".into(),
            license_plate: "ABC-1234".into(),
            model: "Volvo FH 460".into(),
            year: 2022,
            capacity: "30 toneladas".into(),
            status: TruckStatus::Available,
            driver: Driver {
                name: "João Silva".into(),
                license: "123456789".into(),
                phone: "(11) 98765-4321".into(),
                email: "joao.silva@email.com".into(),
            },
            last_maintenance: "2024-02-15".into(),
            next_maintenance: "2024-04-15".into(),
            fuel_type: FuelType::Diesel,
            fuel_efficiency: 3.5,
            mileage: 50000.0,
            documents: TruckDocuments {
                insurance: "2025-03-15".into(),
                inspection: "2024-09-15".into(),
                registration: "2024-12-31".into(),
            },
        }]
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        [
            ("1", "#12345", "João Silva", "Rua das Flores, 123 - São Paulo, SP", "2024-03-15", "Em Rota", 3),
            ("2", "#12346", "Maria Santos", "Av. Paulista, 1000 - São Paulo, SP", "2024-03-15", "Agendado", 1),
            ("3", "#12347", "Pedro Oliveira", "Rua Augusta, 789 - São Paulo, SP", "2024-03-16", "Pendente", 2),
        ]
        .into_iter()
        .map(|(id, order, customer, address, date, status, items)| Delivery {
            id: id.into(),
            order: order.into(),
            customer: customer.into(),
            address: address.into(),
            date: date.into(),
            status: status.into(),
            items,
        })
        .collect()
    }
}
