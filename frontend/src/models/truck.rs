use crate::crud::{
    leaf_fields, parse_nested, split_path, Assign, Entity, FieldError, FieldValue, Identity,
};
use crate::utils::time::current_year;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TruckStatus {
    #[default]
    Available,
    InRoute,
    Maintenance,
}

impl TruckStatus {
    pub const ALL: [TruckStatus; 3] = [
        TruckStatus::Available,
        TruckStatus::InRoute,
        TruckStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Available => "available",
            TruckStatus::InRoute => "in_route",
            TruckStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TruckStatus::Available => "Disponível",
            TruckStatus::InRoute => "Em Rota",
            TruckStatus::Maintenance => "Em Manutenção",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TruckStatus::Available => "bg-green-100 text-green-800",
            TruckStatus::InRoute => "bg-blue-100 text-blue-800",
            TruckStatus::Maintenance => "bg-red-100 text-red-800",
        }
    }
}

impl FromStr for TruckStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TruckStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or(())
    }
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuelType {
    #[default]
    Diesel,
    Gas,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Diesel, FuelType::Gas, FuelType::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Gas => "gas",
            FuelType::Electric => "electric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Gas => "Gasolina",
            FuelType::Electric => "Elétrico",
        }
    }
}

impl FromStr for FuelType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == value)
            .ok_or(())
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Driver {
    pub name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
}

leaf_fields! {
    pub enum DriverField {
        Name => "name",
        License => "license",
        Phone => "phone",
        Email => "email",
    }
}

impl Assign for Driver {
    type Field = DriverField;

    fn assign(&mut self, field: &DriverField, value: FieldValue) -> Result<(), FieldError> {
        let text = value.into_text(field)?;
        match field {
            DriverField::Name => self.name = text,
            DriverField::License => self.license = text,
            DriverField::Phone => self.phone = text,
            DriverField::Email => self.email = text,
        }
        Ok(())
    }
}

/// Expiry dates of the vehicle paperwork.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TruckDocuments {
    pub insurance: String,
    pub inspection: String,
    pub registration: String,
}

leaf_fields! {
    pub enum DocumentField {
        Insurance => "insurance",
        Inspection => "inspection",
        Registration => "registration",
    }
}

impl Assign for TruckDocuments {
    type Field = DocumentField;

    fn assign(&mut self, field: &DocumentField, value: FieldValue) -> Result<(), FieldError> {
        let text = value.into_text(field)?;
        match field {
            DocumentField::Insurance => self.insurance = text,
            DocumentField::Inspection => self.inspection = text,
            DocumentField::Registration => self.registration = text,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub id: String,
    pub license_plate: String,
    pub model: String,
    pub year: i32,
    /// Free text, e.g. `"30 toneladas"`.
    pub capacity: String,
    pub status: TruckStatus,
    pub driver: Driver,
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub fuel_type: FuelType,
    /// km/L
    pub fuel_efficiency: f64,
    pub mileage: f64,
    pub documents: TruckDocuments,
}

impl Default for Truck {
    fn default() -> Self {
        Self {
            id: String::new(),
            license_plate: String::new(),
            model: String::new(),
            year: current_year(),
            capacity: String::new(),
            status: TruckStatus::default(),
            driver: Driver::default(),
            last_maintenance: String::new(),
            next_maintenance: String::new(),
            fuel_type: FuelType::default(),
            fuel_efficiency: 0.0,
            mileage: 0.0,
            documents: TruckDocuments::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckField {
    LicensePlate,
    Model,
    Year,
    Capacity,
    Status,
    FuelType,
    FuelEfficiency,
    Mileage,
    LastMaintenance,
    NextMaintenance,
    Driver(DriverField),
    Documents(DocumentField),
}

impl FromStr for TruckField {
    type Err = FieldError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match split_path(path) {
            ("license_plate", None) => Ok(TruckField::LicensePlate),
            ("model", None) => Ok(TruckField::Model),
            ("year", None) => Ok(TruckField::Year),
            ("capacity", None) => Ok(TruckField::Capacity),
            ("status", None) => Ok(TruckField::Status),
            ("fuel_type", None) => Ok(TruckField::FuelType),
            ("fuel_efficiency", None) => Ok(TruckField::FuelEfficiency),
            ("mileage", None) => Ok(TruckField::Mileage),
            ("last_maintenance", None) => Ok(TruckField::LastMaintenance),
            ("next_maintenance", None) => Ok(TruckField::NextMaintenance),
            ("driver", Some(rest)) => parse_nested(path, rest).map(TruckField::Driver),
            ("documents", Some(rest)) => parse_nested(path, rest).map(TruckField::Documents),
            _ => Err(FieldError::UnknownField(path.to_string())),
        }
    }
}

impl fmt::Display for TruckField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaf = match self {
            TruckField::LicensePlate => "license_plate",
            TruckField::Model => "model",
            TruckField::Year => "year",
            TruckField::Capacity => "capacity",
            TruckField::Status => "status",
            TruckField::FuelType => "fuel_type",
            TruckField::FuelEfficiency => "fuel_efficiency",
            TruckField::Mileage => "mileage",
            TruckField::LastMaintenance => "last_maintenance",
            TruckField::NextMaintenance => "next_maintenance",
            TruckField::Driver(inner) => return write!(f, "driver.{}", inner),
            TruckField::Documents(inner) => return write!(f, "documents.{}", inner),
        };
        f.write_str(leaf)
    }
}

impl Assign for Truck {
    type Field = TruckField;

    fn assign(&mut self, field: &TruckField, value: FieldValue) -> Result<(), FieldError> {
        match field {
            TruckField::LicensePlate => self.license_plate = value.into_text(field)?,
            TruckField::Model => self.model = value.into_text(field)?,
            TruckField::Year => self.year = value.into_year(field)?,
            TruckField::Capacity => self.capacity = value.into_text(field)?,
            TruckField::Status => self.status = value.into_option(field)?,
            TruckField::FuelType => self.fuel_type = value.into_option(field)?,
            TruckField::FuelEfficiency => self.fuel_efficiency = value.into_number(field)?,
            TruckField::Mileage => self.mileage = value.into_number(field)?,
            TruckField::LastMaintenance => self.last_maintenance = value.into_text(field)?,
            TruckField::NextMaintenance => self.next_maintenance = value.into_text(field)?,
            TruckField::Driver(inner) => self.driver.assign(inner, value)?,
            TruckField::Documents(inner) => self.documents.assign(inner, value)?,
        }
        Ok(())
    }
}

impl Entity for Truck {
    const KIND: &'static str = "truck";

    fn id(&self) -> &str {
        &self.id
    }

    /// Trucks carry no creation date; a blank last maintenance is taken to
    /// be the creation day.
    fn stamp(&mut self, identity: &Identity) {
        self.id = identity.id.clone();
        self.fill_blanks(&identity.created_on);
    }

    fn keep_identity(&mut self, stored: &Self) {
        self.id = stored.id.clone();
    }

    fn fill_blanks(&mut self, today: &str) {
        if self.last_maintenance.trim().is_empty() {
            self.last_maintenance = today.to_string();
        }
    }

    fn search_text(&self) -> Vec<String> {
        vec![
            self.license_plate.clone(),
            self.model.clone(),
            self.driver.name.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_truck_defaults() {
        let truck = Truck::default();
        assert_eq!(truck.year, current_year());
        assert_eq!(truck.status, TruckStatus::Available);
        assert_eq!(truck.fuel_type, FuelType::Diesel);
    }

    #[test]
    fn nested_driver_and_document_paths() {
        assert_eq!(
            "driver.license".parse::<TruckField>(),
            Ok(TruckField::Driver(DriverField::License))
        );
        assert_eq!(
            TruckField::Documents(DocumentField::Inspection).to_string(),
            "documents.inspection"
        );
        let truck = Truck::default()
            .with_path("documents.insurance", "2025-01-01".into())
            .unwrap();
        assert_eq!(truck.documents.insurance, "2025-01-01");
        assert!(truck.documents.inspection.is_empty());
    }

    #[test]
    fn stamp_fills_last_maintenance_only_when_blank() {
        let identity = Identity::new("t1", "2024-05-01");
        let mut fresh = Truck::default();
        fresh.stamp(&identity);
        assert_eq!(fresh.id, "t1");
        assert_eq!(fresh.last_maintenance, "2024-05-01");

        let mut serviced = Truck {
            last_maintenance: "2024-01-10".into(),
            ..Truck::default()
        };
        serviced.stamp(&identity);
        assert_eq!(serviced.last_maintenance, "2024-01-10");
    }

    #[test]
    fn blank_last_maintenance_is_filled_on_any_save() {
        let mut cleared = Truck {
            last_maintenance: " ".into(),
            ..Truck::default()
        };
        cleared.fill_blanks("2024-06-30");
        assert_eq!(cleared.last_maintenance, "2024-06-30");
        cleared.fill_blanks("2024-07-01");
        assert_eq!(cleared.last_maintenance, "2024-06-30");
    }

    #[test]
    fn numeric_fields_reject_text() {
        let truck = Truck::default();
        assert!(truck.with_path("capacity", "30 toneladas".into()).is_ok());
        assert!(truck.with_path("fuel_efficiency", "3.5".into()).is_ok());
        assert!(truck.with_path("year", "2020.5".into()).is_err());
        assert!(matches!(
            truck.with_path("mileage", "muito".into()),
            Err(FieldError::ExpectedNumber { .. })
        ));
    }

    #[test]
    fn search_includes_driver_name() {
        let truck = Truck {
            license_plate: "ABC-1234".into(),
            model: "Volvo FH 460".into(),
            driver: Driver {
                name: "Carlos Oliveira".into(),
                ..Driver::default()
            },
            ..Truck::default()
        };
        assert!(truck.matches("abc"));
        assert!(truck.matches("volvo"));
        assert!(truck.matches("oliveira"));
        assert!(!truck.matches("scania"));
    }
}
