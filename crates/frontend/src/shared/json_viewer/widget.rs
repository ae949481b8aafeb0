use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn JsonViewer(
    /// Pretty-printed JSON
    json_content: String,
    #[prop(optional)]
    title: Option<String>,
    /// Name used by the download button
    #[prop(optional)]
    file_name: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content_for_copy = json_content.clone();
    let json_content_for_download = json_content.clone();
    let line_count = json_content.lines().count();
    let char_count = json_content.chars().count();
    let file_name = file_name.unwrap_or_else(|| "request.json".to_string());

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        leptos::task::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {:?}", e);
                return;
            }
            let _ = set_copied.try_set(true);

            // Reset after 2 seconds
            gloo_timers::future::TimeoutFuture::new(2000).await;
            let _ = set_copied.try_set(false);
        });
    };

    let handle_download = move |_| {
        if let Err(e) = download_json(&json_content_for_download, &file_name) {
            log::error!("download failed: {}", e);
        }
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "Request".to_string())}
                </h3>
                <div class="json-viewer__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! { <>{icon("check")}{"Copied!"}</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}{"Copy"}</> }.into_any()
                        }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{json_content}</pre>
            </div>

            <div class="json-viewer__footer">
                {format!("{} characters | {} lines", char_count, line_count)}
            </div>
        </div>
    }
}

fn download_json(content: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document not available")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));
    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor element".to_string())?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| format!("{:?}", e))
}
