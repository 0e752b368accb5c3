use crate::domain::a001_sales_summary::ui::list::SalesSummaryList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesSummaryList />
    }
}
