use crate::shared::format::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_sales_summary::aggregate::SalesSummary;
use leptos::prelude::*;

/// Detail dialog for one upload: headline stats plus the per-product
/// breakdown table.
#[component]
#[allow(non_snake_case)]
pub fn SummaryDetails(summary: SalesSummary, on_close: Callback<()>) -> impl IntoView {
    let upload_date = format_date(&summary.timestamp);
    let total_revenue = format!("${}", format_money(summary.total_revenue));

    let detail_rows = summary
        .details
        .iter()
        .map(|item| {
            view! {
                <tr>
                    <td class="cell-strong">{item.product.clone()}</td>
                    <td class="text-right">{item.quantity}</td>
                    <td class="text-right">{format!("${:.2}", item.price)}</td>
                    <td class="text-right cell-strong">{format!("${:.2}", item.revenue)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Modal title="Sales Summary Details".to_string() on_close=on_close modal_class="modal-wide".to_string()>
            <p class="muted">{format!("Detailed breakdown for upload: {}", summary.file_name)}</p>

            <div class="cards-grid cards-grid-4">
                <div class="card">
                    <div class="card-row">
                        {icon("calendar")}
                        <div>
                            <p class="card-label">"Upload Date"</p>
                            <p class="card-value-sm">{upload_date}</p>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-row">
                        {icon("file-text")}
                        <div>
                            <p class="card-label">"Total Records"</p>
                            <p class="card-value-sm">{summary.total_records}</p>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-row">
                        {icon("package")}
                        <div>
                            <p class="card-label">"Total Quantity"</p>
                            <p class="card-value-sm">{summary.total_quantity}</p>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <div class="card-row">
                        {icon("dollar-sign")}
                        <div>
                            <p class="card-label">"Total Revenue"</p>
                            <p class="card-value-sm">{total_revenue}</p>
                        </div>
                    </div>
                </div>
            </div>

            <h3 class="section-title">"Product Breakdown"</h3>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th class="text-right">"Quantity"</th>
                            <th class="text-right">"Unit Price"</th>
                            <th class="text-right">"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>{detail_rows}</tbody>
                </table>
            </div>
        </Modal>
    }
}
