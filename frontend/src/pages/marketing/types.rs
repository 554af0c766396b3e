#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceShare {
    pub age: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignIdea {
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_roi: &'static str,
    pub duration: &'static str,
}

/// Canned marketing material for one product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingSuggestions {
    pub seo_terms: Vec<&'static str>,
    pub audience: Vec<AudienceShare>,
    pub channels: Vec<&'static str>,
    pub campaigns: Vec<CampaignIdea>,
}
