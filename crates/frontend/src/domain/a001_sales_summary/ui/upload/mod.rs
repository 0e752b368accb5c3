use crate::shared::api_utils::api_url;
use crate::shared::format::format_kb;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_sales_summary::aggregate::SalesSummary;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

/// Upload dialog: pick a CSV file, submit it, surface the outcome.
///
/// Only files the browser reports as `text/csv` are accepted; anything else
/// clears the selection. A successful upload resets the input, notifies the
/// host to refresh its list and closes the dialog after a short delay.
#[component]
#[allow(non_snake_case)]
pub fn UploadDialog(
    /// Callback при закрытии диалога
    on_close: Callback<()>,
    /// Callback after successful upload (e.g. refresh list)
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let (file_name, set_file_name) = signal(Option::<String>::None);
    let (file_size, set_file_size) = signal(0.0f64);
    let (message, set_message) = signal(Option::<Notice>::None);
    let (uploading, set_uploading) = signal(false);

    // web_sys::File is not threadsafe, so it lives outside the signal graph.
    let file_sv = StoredValue::new_local(Option::<web_sys::File>::None);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else {
            return;
        };

        let file = input.files().and_then(|files| files.get(0));
        match file {
            Some(file) if file.type_() == "text/csv" => {
                set_file_name.set(Some(file.name()));
                set_file_size.set(file.size());
                set_message.set(None);
                file_sv.set_value(Some(file));
            }
            _ => {
                input.set_value("");
                file_sv.set_value(None);
                set_file_name.set(None);
                set_message.set(Some(Notice::Error(
                    "Please select a valid CSV file.".to_string(),
                )));
            }
        }
    };

    let handle_upload = move |_| {
        let Some(file) = file_sv.get_value() else {
            set_message.set(Some(Notice::Error("Please select a file first.".to_string())));
            return;
        };

        set_uploading.set(true);
        set_message.set(None);

        leptos::task::spawn_local(async move {
            match upload_sales_file(file).await {
                Ok(summary) => {
                    set_message.set(Some(Notice::Success(format!(
                        "File uploaded successfully! Processed {} records.",
                        summary.total_records
                    ))));
                    file_sv.set_value(None);
                    set_file_name.set(None);
                    if let Some(input) = file_input_ref.get_untracked() {
                        input.set_value("");
                    }
                    set_uploading.set(false);

                    on_uploaded.run(());

                    // Leave the success message visible for a beat, then close.
                    TimeoutFuture::new(100).await;
                    on_close.run(());
                }
                Err(e) => {
                    set_message.set(Some(Notice::Error(e)));
                    set_uploading.set(false);
                }
            }
        });
    };

    // Cancel and overlay close are ignored while an upload is in flight.
    let request_close = Callback::new(move |_: ()| {
        if uploading.get_untracked() {
            return;
        }
        on_close.run(());
    });

    view! {
        <Modal title="Upload CSV File".to_string() on_close=request_close>
            <p class="muted">"Select a CSV file containing sales data to upload and process"</p>

            <input
                id="file-input"
                type="file"
                accept=".csv"
                node_ref=file_input_ref
                on:change=handle_file_select
            />

            {move || {
                file_name.get().map(|name| {
                    view! {
                        <p class="file-hint">
                            {format!("Selected: {} ({})", name, format_kb(file_size.get()))}
                        </p>
                    }
                })
            }}

            {move || {
                message.get().map(|notice| {
                    let (class, text) = match notice {
                        Notice::Success(text) => ("alert alert-success", text),
                        Notice::Error(text) => ("alert alert-error", text),
                    };
                    view! { <div class=class>{text}</div> }
                })
            }}

            <div class="form-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || uploading.get()
                    on:click=move |_| request_close.run(())
                >
                    "Cancel"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || file_name.get().is_none() || uploading.get()
                    on:click=handle_upload
                >
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </Modal>
    }
}

/// POST the file as multipart form data and decode the stored summary.
async fn upload_sales_file(file: web_sys::File) -> Result<SalesSummary, String> {
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/api/upload-sales-data");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "An unexpected error occurred.".to_string())?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        // The backend reports rejections as {"error": "..."}.
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| "An unexpected error occurred.".to_string());
        return Err(message);
    }

    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
