use crate::{
    components::cards::{PlaceholderCard, StatCard},
    models::CashSummary,
    utils::format::format_brl,
};
use leptos::*;

#[component]
pub fn FinanceOverview(#[prop(into)] summary: Signal<CashSummary>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {move || {
                    let totals = summary.get();
                    view! {
                        <StatCard title="Entradas" value=format_brl(totals.income) icon="fas fa-arrow-down" />
                        <StatCard title="Saídas" value=format_brl(totals.expense) icon="fas fa-arrow-up" />
                        <StatCard title="Saldo" value=format_brl(totals.net()) icon="fas fa-wallet" />
                    }
                }}
            </div>
            <PlaceholderCard title="Gráfico Financeiro" description="Gráfico com dados financeiros" />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_income_expense_and_net() {
        let html = render_to_string(move || {
            let summary = CashSummary {
                income: 1500.0,
                expense: 2000.0,
            };
            view! { <FinanceOverview summary=Signal::derive(move || summary) /> }
        });
        assert!(html.contains("R$ 1.500,00"));
        assert!(html.contains("R$ 2.000,00"));
        assert!(html.contains("-R$ 500,00"));
        assert!(html.contains("Gráfico Financeiro"));
    }
}
