use crate::models::{Address, Customer, CustomerGroup};

/// Seed data for the customers panel.
#[derive(Clone, Default)]
pub struct CustomersRepository;

impl CustomersRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn groups(&self) -> Vec<CustomerGroup> {
        [
            ("1", "VIP", "Clientes premium com alto valor de compra"),
            ("2", "Varejo", "Clientes de varejo regular"),
            ("3", "Empresarial", "Clientes corporativos"),
        ]
        .into_iter()
        .map(|(id, name, description)| CustomerGroup {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            created_at: "2024-03-15".into(),
        })
        .collect()
    }

    pub fn customers(&self) -> Vec<Customer> {
        vec![Customer {
            id: "1".into(),
            first_name: "João".into(),
            last_name: "Silva".into(),
            email: "joao.silva@email.com".into(),
            phone: "(11) 98765-4321".into(),
            birth_date: "1990-05-15".into(),
            address: Address {
                street: "Rua das Flores".into(),
                number: "123".into(),
                complement: String::new(),
                neighborhood: "Centro".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                zip_code: "01234-567".into(),
                country: "Brasil".into(),
            },
            group_ids: vec!["1".into()],
            created_at: "2024-03-15".into(),
            last_purchase: Some("2024-03-10".into()),
            total_purchases: 5,
        }]
    }
}
