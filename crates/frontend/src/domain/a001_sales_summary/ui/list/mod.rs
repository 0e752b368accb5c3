use crate::domain::a001_sales_summary::ui::details::SummaryDetails;
use crate::domain::a001_sales_summary::ui::upload::UploadDialog;
use crate::shared::api_utils::api_url;
use crate::shared::format::{format_money, format_timestamp, short_id};
use crate::shared::icons::icon;
use contracts::domain::a001_sales_summary::aggregate::SalesSummary;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SummaryRow {
    pub id_short: String,
    pub uploaded_at: String,
    pub file_name: String,
    pub total_revenue: String,
    pub total_records: i32,
}

impl SummaryRow {
    fn from_summary(s: &SalesSummary) -> Self {
        Self {
            id_short: short_id(&s.id.to_string()),
            uploaded_at: format_timestamp(&s.timestamp),
            file_name: s.file_name.clone(),
            total_revenue: format!("${}", format_money(s.total_revenue)),
            total_records: s.total_records,
        }
    }
}

/// The dashboard page: headline stats, the summaries table, and the upload
/// and detail dialogs.
#[component]
#[allow(non_snake_case)]
pub fn SalesSummaryList() -> impl IntoView {
    let (summaries, set_summaries) = signal::<Vec<SalesSummary>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<SalesSummary>>(None);
    let (show_upload, set_show_upload) = signal(false);

    // Перечитать список итогов с сервера
    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_summaries().await {
                Ok(v) => {
                    set_summaries.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    let total_records = move || {
        summaries
            .get()
            .iter()
            .map(|s| i64::from(s.total_records))
            .sum::<i64>()
    };
    let total_revenue = move || summaries.get().iter().map(|s| s.total_revenue).sum::<f64>();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h1>"Sales Data Dashboard"</h1>
                    <p class="muted">"View and analyze your uploaded CSV sales data"</p>
                </div>
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| set_show_upload.set(true)>
                        {icon("plus")}
                        "Upload CSV"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}

            <div class="panel">
                <div class="panel-header">
                    <h2 class="panel-title">
                        {icon("file-text")}
                        "Sales Summaries"
                        {move || {
                            let n = summaries.get().len();
                            (n > 0).then(|| {
                                view! {
                                    <span class="badge">
                                        {format!("{} {}", n, if n == 1 { "file" } else { "files" })}
                                    </span>
                                }
                            })
                        }}
                    </h2>
                    <p class="muted">"Click on any row to view detailed breakdown"</p>
                </div>

                {move || {
                    if summaries.get().is_empty() {
                        view! {
                            <EmptyState on_upload=Callback::new(move |_| set_show_upload.set(true)) />
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="panel-body">
                                <div class="cards-grid cards-grid-3">
                                    <div class="card">
                                        <div class="card-row">
                                            {icon("file-text")}
                                            <div>
                                                <p class="card-label">"Total Files"</p>
                                                <p class="card-value">{summaries.get().len()}</p>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="card">
                                        <div class="card-row">
                                            {icon("package")}
                                            <div>
                                                <p class="card-label">"Total Records"</p>
                                                <p class="card-value">{total_records()}</p>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="card">
                                        <div class="card-row">
                                            {icon("dollar-sign")}
                                            <div>
                                                <p class="card-label">"Total Revenue"</p>
                                                <p class="card-value">
                                                    {format!("${}", format_money(total_revenue()))}
                                                </p>
                                            </div>
                                        </div>
                                    </div>
                                </div>

                                <div class="table-container">
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Upload ID"</th>
                                                <th>"Upload Timestamp"</th>
                                                <th>"File Name"</th>
                                                <th class="text-right">"Total Revenue"</th>
                                                <th class="text-right">"Records"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {summaries
                                                .get()
                                                .into_iter()
                                                .map(|summary| {
                                                    let row = SummaryRow::from_summary(&summary);
                                                    view! {
                                                        <tr
                                                            class="row-clickable"
                                                            on:click=move |_| set_selected.set(Some(summary.clone()))
                                                        >
                                                            <td class="cell-mono">{row.id_short}</td>
                                                            <td>{row.uploaded_at}</td>
                                                            <td>{row.file_name}</td>
                                                            <td class="text-right cell-strong">{row.total_revenue}</td>
                                                            <td class="text-right">
                                                                <span class="badge">{row.total_records}</span>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>

            {move || {
                show_upload.get().then(|| {
                    view! {
                        <UploadDialog
                            on_close=Callback::new(move |_| set_show_upload.set(false))
                            on_uploaded=Callback::new(move |_| fetch())
                        />
                    }
                })
            }}

            {move || {
                selected.get().map(|summary| {
                    view! {
                        <SummaryDetails
                            summary=summary
                            on_close=Callback::new(move |_| set_selected.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EmptyState(on_upload: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon("file-text")}</div>
            <h3>"No sales data yet"</h3>
            <p class="muted">"Upload your first CSV file to start analyzing sales data"</p>
            <button class="btn btn-primary btn-lg" on:click=move |_| on_upload.run(())>
                {icon("upload")}
                "Upload Your First CSV"
            </button>
        </div>
    }
}

async fn fetch_summaries() -> Result<Vec<SalesSummary>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let url = api_url("/api/sales-summaries");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<SalesSummary> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
