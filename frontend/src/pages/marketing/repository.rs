use super::types::{AudienceShare, CampaignIdea, MarketingSuggestions};
use crate::models::Product;
use crate::pages::inventory::repository::InventoryRepository;

fn audience(shares: &[(&'static str, u8)]) -> Vec<AudienceShare> {
    shares
        .iter()
        .map(|&(age, percentage)| AudienceShare { age, percentage })
        .collect()
}

fn campaigns(ideas: &[(&'static str, &'static str, &'static str, &'static str)]) -> Vec<CampaignIdea> {
    ideas
        .iter()
        .map(|&(title, description, estimated_roi, duration)| CampaignIdea {
            title,
            description,
            estimated_roi,
            duration,
        })
        .collect()
}

#[derive(Clone, Default)]
pub struct MarketingRepository;

impl MarketingRepository {
    pub fn new() -> Self {
        Self
    }

    /// The full catalogue; the panel shows only marketing-enabled items.
    pub fn products(&self) -> Vec<Product> {
        InventoryRepository::new().products()
    }

    /// Exact, case-sensitive category lookup.
    pub fn suggestions(&self, category: &str) -> Option<MarketingSuggestions> {
        match category {
            "Eletrônicos" => Some(MarketingSuggestions {
                seo_terms: vec![
                    "melhor smartphone 2024",
                    "comparativo celulares",
                    "smartphone custo benefício",
                    "review técnico celular",
                    "smartphone premium features",
                ],
                audience: audience(&[("18-34", 45), ("35-44", 30), ("45-54", 15), ("55+", 10)]),
                channels: vec!["Instagram", "YouTube", "Google Ads", "Tech Blogs", "Email Marketing"],
                campaigns: campaigns(&[
                    (
                        "Upgrade Tecnológico",
                        "Campanha focada em destacar as inovações tecnológicas e recursos únicos do produto.",
                        "250%",
                        "30 dias",
                    ),
                    (
                        "Cashback Digital",
                        "Programa de recompensas para compras recorrentes de tecnologia.",
                        "180%",
                        "60 dias",
                    ),
                    (
                        "Tech Influencer Partnership",
                        "Parcerias com influenciadores tech para reviews e demonstrações.",
                        "300%",
                        "45 dias",
                    ),
                ]),
            }),
            "Computadores" => Some(MarketingSuggestions {
                seo_terms: vec![
                    "notebook para trabalho",
                    "melhor computador custo benefício",
                    "pc gamer 2024",
                    "notebook para estudante",
                    "computador para home office",
                ],
                audience: audience(&[("18-24", 25), ("25-34", 35), ("35-44", 25), ("45+", 15)]),
                channels: vec![
                    "LinkedIn",
                    "YouTube",
                    "Tech Forums",
                    "Professional Networks",
                    "Email Marketing",
                ],
                campaigns: campaigns(&[
                    (
                        "Home Office Setup",
                        "Campanha focada em soluções completas para trabalho remoto.",
                        "200%",
                        "45 dias",
                    ),
                    (
                        "Student Tech",
                        "Descontos especiais para estudantes com ID verificado.",
                        "150%",
                        "90 dias",
                    ),
                    (
                        "Gaming Evolution",
                        "Campanha focada no público gamer com bundles especiais.",
                        "280%",
                        "30 dias",
                    ),
                ]),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_shares_add_up() {
        let repo = MarketingRepository::new();
        for category in ["Eletrônicos", "Computadores"] {
            let suggestions = repo.suggestions(category).unwrap();
            let total: u32 = suggestions.audience.iter().map(|a| u32::from(a.percentage)).sum();
            assert_eq!(total, 100, "{category}");
            assert_eq!(suggestions.campaigns.len(), 3);
        }
    }

    #[test]
    fn unknown_category_has_no_suggestions() {
        let repo = MarketingRepository::new();
        assert!(repo.suggestions("Periféricos").is_none());
        assert!(repo.suggestions("eletrônicos").is_none());
    }
}
