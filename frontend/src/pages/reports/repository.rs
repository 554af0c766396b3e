use crate::utils::format::format_brl;

/// Percent change against the previous period; negative is a drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend(pub f64);

impl Trend {
    pub fn is_up(&self) -> bool {
        self.0 >= 0.0
    }

    /// `"12,5%"`, sign shown by the arrow rather than the text.
    pub fn label(&self) -> String {
        format!("{:.1}%", self.0.abs()).replace('.', ",")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub trend: Option<Trend>,
}

/// A titled list of `(label, value)` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub trend: Option<Trend>,
    pub rows: Vec<(&'static str, String)>,
}

#[derive(Clone, Default)]
pub struct ReportsRepository;

impl ReportsRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn charts(&self) -> Vec<ChartSection> {
        vec![
            ChartSection {
                title: "Vendas Mensais",
                placeholder: "Gráfico de Vendas",
                trend: Some(Trend(12.5)),
            },
            ChartSection {
                title: "Produtos Mais Vendidos",
                placeholder: "Gráfico de Produtos",
                trend: None,
            },
        ]
    }

    pub fn breakdowns(&self) -> Vec<BreakdownSection> {
        vec![
            BreakdownSection {
                title: "Faturamento",
                icon: "fas fa-dollar-sign",
                trend: Some(Trend(8.3)),
                rows: vec![
                    ("Este Mês", format_brl(45_678.0)),
                    ("Mês Anterior", format_brl(42_156.0)),
                    ("Este Ano", format_brl(523_897.0)),
                ],
            },
            BreakdownSection {
                title: "Pedidos",
                icon: "fas fa-shopping-cart",
                trend: Some(Trend(-3.2)),
                rows: vec![
                    ("Concluídos", "234".to_string()),
                    ("Em Processamento", "45".to_string()),
                    ("Cancelados", "12".to_string()),
                ],
            },
            BreakdownSection {
                title: "Categorias",
                icon: "fas fa-chart-pie",
                trend: None,
                rows: vec![
                    ("Eletrônicos", "45%".to_string()),
                    ("Computadores", "30%".to_string()),
                    ("Acessórios", "25%".to_string()),
                ],
            },
        ]
    }
}
