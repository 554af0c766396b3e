use crate::crud::{leaf_fields, Assign, Entity, FieldError, FieldValue, Identity};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub category: String,
    pub last_updated: String,
    pub marketing_enabled: bool,
    /// Marketing positioning, e.g. `"Notebook Premium"`.
    pub product_type: String,
    pub target_audience: Vec<String>,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }
}

leaf_fields! {
    pub enum ProductField {
        Name => "name",
        Sku => "sku",
        Category => "category",
        Quantity => "quantity",
        MinStock => "min_stock",
        MarketingEnabled => "marketing_enabled",
        ProductType => "product_type",
        TargetAudience => "target_audience",
    }
}

impl Assign for Product {
    type Field = ProductField;

    fn assign(&mut self, field: &ProductField, value: FieldValue) -> Result<(), FieldError> {
        match field {
            ProductField::Name => self.name = value.into_text(field)?,
            ProductField::Sku => self.sku = value.into_text(field)?,
            ProductField::Category => self.category = value.into_text(field)?,
            ProductField::Quantity => self.quantity = value.into_count(field)?,
            ProductField::MinStock => self.min_stock = value.into_count(field)?,
            ProductField::MarketingEnabled => self.marketing_enabled = value.into_flag(field)?,
            ProductField::ProductType => self.product_type = value.into_text(field)?,
            ProductField::TargetAudience => self.target_audience = value.into_selection(field)?,
        }
        Ok(())
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp(&mut self, identity: &Identity) {
        self.id = identity.id.clone();
        self.last_updated = identity.created_on.clone();
    }

    fn keep_identity(&mut self, stored: &Self) {
        self.id = stored.id.clone();
        self.last_updated = stored.last_updated.clone();
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.sku.clone(), self.category.clone()]
    }
}
