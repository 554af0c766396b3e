/// Audiences offered in the product form.
pub const AUDIENCES: [&str; 5] = [
    "Jovens Adultos",
    "Profissionais",
    "Criativos",
    "Estudantes",
    "Gamers",
];

pub fn audience_options() -> Vec<(String, String)> {
    AUDIENCES
        .iter()
        .map(|audience| (audience.to_string(), audience.to_string()))
        .collect()
}

/// Label and colour of the stock column.
pub fn stock_badge(is_low: bool) -> (&'static str, &'static str) {
    if is_low {
        ("Estoque Baixo", "bg-red-100 text-red-800")
    } else {
        ("Em Estoque", "bg-green-100 text-green-800")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_options_use_the_name_as_id() {
        let options = audience_options();
        assert_eq!(options.len(), AUDIENCES.len());
        assert_eq!(options[1], ("Profissionais".to_string(), "Profissionais".to_string()));
    }

    #[test]
    fn low_stock_badge_is_red() {
        assert_eq!(stock_badge(true).0, "Estoque Baixo");
        assert!(stock_badge(false).1.contains("green"));
    }
}
