use crate::crud::{
    leaf_fields, parse_nested, split_path, Assign, Entity, FieldError, FieldValue, Identity,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: String::new(),
            number: String::new(),
            complement: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "Brasil".to_string(),
        }
    }
}

impl Address {
    /// `"Rua das Flores, 123"`, with the complement appended when present.
    pub fn street_line(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if !self.complement.is_empty() {
            line.push_str(" - ");
            line.push_str(&self.complement);
        }
        line
    }

    pub fn city_line(&self) -> String {
        format!("{} - {}", self.city, self.state)
    }
}

leaf_fields! {
    pub enum AddressField {
        Street => "street",
        Number => "number",
        Complement => "complement",
        Neighborhood => "neighborhood",
        City => "city",
        State => "state",
        ZipCode => "zip_code",
        Country => "country",
    }
}

impl Assign for Address {
    type Field = AddressField;

    fn assign(&mut self, field: &AddressField, value: FieldValue) -> Result<(), FieldError> {
        let text = value.into_text(field)?;
        let slot = match field {
            AddressField::Street => &mut self.street,
            AddressField::Number => &mut self.number,
            AddressField::Complement => &mut self.complement,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::ZipCode => &mut self.zip_code,
            AddressField::Country => &mut self.country,
        };
        *slot = text;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub address: Address,
    pub group_ids: Vec<String>,
    pub created_at: String,
    pub last_purchase: Option<String>,
    pub total_purchases: u32,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.group_ids.iter().any(|id| id == group_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    Address(AddressField),
    GroupIds,
}

impl FromStr for CustomerField {
    type Err = FieldError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match split_path(path) {
            ("first_name", None) => Ok(CustomerField::FirstName),
            ("last_name", None) => Ok(CustomerField::LastName),
            ("email", None) => Ok(CustomerField::Email),
            ("phone", None) => Ok(CustomerField::Phone),
            ("birth_date", None) => Ok(CustomerField::BirthDate),
            ("group_ids", None) => Ok(CustomerField::GroupIds),
            ("address", Some(rest)) => parse_nested(path, rest).map(CustomerField::Address),
            _ => Err(FieldError::UnknownField(path.to_string())),
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerField::FirstName => f.write_str("first_name"),
            CustomerField::LastName => f.write_str("last_name"),
            CustomerField::Email => f.write_str("email"),
            CustomerField::Phone => f.write_str("phone"),
            CustomerField::BirthDate => f.write_str("birth_date"),
            CustomerField::Address(inner) => write!(f, "address.{}", inner),
            CustomerField::GroupIds => f.write_str("group_ids"),
        }
    }
}

impl Assign for Customer {
    type Field = CustomerField;

    fn assign(&mut self, field: &CustomerField, value: FieldValue) -> Result<(), FieldError> {
        match field {
            CustomerField::FirstName => self.first_name = value.into_text(field)?,
            CustomerField::LastName => self.last_name = value.into_text(field)?,
            CustomerField::Email => self.email = value.into_text(field)?,
            CustomerField::Phone => self.phone = value.into_text(field)?,
            CustomerField::BirthDate => self.birth_date = value.into_text(field)?,
            CustomerField::Address(inner) => self.address.assign(inner, value)?,
            CustomerField::GroupIds => self.group_ids = value.into_selection(field)?,
        }
        Ok(())
    }
}

impl Entity for Customer {
    const KIND: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp(&mut self, identity: &Identity) {
        self.id = identity.id.clone();
        self.created_at = identity.created_on.clone();
    }

    fn keep_identity(&mut self, stored: &Self) {
        self.id = stored.id.clone();
        self.created_at = stored.created_at.clone();
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.full_name(), self.email.clone(), self.phone.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

leaf_fields! {
    pub enum CustomerGroupField {
        Name => "name",
        Description => "description",
    }
}

impl Assign for CustomerGroup {
    type Field = CustomerGroupField;

    fn assign(&mut self, field: &CustomerGroupField, value: FieldValue) -> Result<(), FieldError> {
        let text = value.into_text(field)?;
        match field {
            CustomerGroupField::Name => self.name = text,
            CustomerGroupField::Description => self.description = text,
        }
        Ok(())
    }
}

impl Entity for CustomerGroup {
    const KIND: &'static str = "customer group";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp(&mut self, identity: &Identity) {
        self.id = identity.id.clone();
        self.created_at = identity.created_on.clone();
    }

    fn keep_identity(&mut self, stored: &Self) {
        self.id = stored.id.clone();
        self.created_at = stored.created_at.clone();
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_parse_into_typed_fields() {
        assert_eq!(
            "address.city".parse::<CustomerField>(),
            Ok(CustomerField::Address(AddressField::City))
        );
        assert_eq!(
            CustomerField::Address(AddressField::ZipCode).to_string(),
            "address.zip_code"
        );
        assert_eq!(
            "address.planet".parse::<CustomerField>(),
            Err(FieldError::UnknownField("address.planet".into()))
        );
        assert!("address".parse::<CustomerField>().is_err());
        assert!("first_name.x".parse::<CustomerField>().is_err());
    }

    #[test]
    fn group_membership_is_replaced_wholesale() {
        let customer = Customer {
            group_ids: vec!["1".into(), "2".into()],
            ..Customer::default()
        };
        let updated = customer
            .with_field(&CustomerField::GroupIds, vec!["3".to_string()].into())
            .unwrap();
        assert_eq!(updated.group_ids, vec!["3".to_string()]);
        assert!(customer
            .with_field(&CustomerField::GroupIds, "3".into())
            .is_err());
    }

    #[test]
    fn blank_draft_lives_in_brazil() {
        let draft = Customer::default();
        assert_eq!(draft.address.country, "Brasil");
        assert!(draft.group_ids.is_empty());
        assert_eq!(draft.total_purchases, 0);
    }

    #[test]
    fn address_lines_include_complement_only_when_present() {
        let mut address = Address {
            street: "Rua A".into(),
            number: "10".into(),
            city: "Campinas".into(),
            state: "SP".into(),
            ..Address::default()
        };
        assert_eq!(address.street_line(), "Rua A, 10");
        address.complement = "Apto 2".into();
        assert_eq!(address.street_line(), "Rua A, 10 - Apto 2");
        assert_eq!(address.city_line(), "Campinas - SP");
    }
}
