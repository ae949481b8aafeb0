use contracts::domain::{
    EnhancementConfig, EnhancementMode, EnhancementRequest, ProcessingState, MAX_PROMPT_CHARS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, RadioGroup, Textarea};
use crate::shared::components::{ImagePicker, ProcessingStatus};
use crate::shared::json_viewer::JsonViewer;
use crate::shared::media_file::MediaFile;
use crate::shared::page_frame::PageFrame;
use crate::usecases::common::{finish, load_image, to_pretty_json};

#[component]
pub fn ImageEnhancer() -> impl IntoView {
    let image = RwSignal::new_local(None::<MediaFile>);
    let config = RwSignal::new(EnhancementConfig::auto());
    let processing = RwSignal::new(ProcessingState::idle());
    let error = RwSignal::new(None::<String>);
    let request_json = RwSignal::new(None::<String>);

    let is_busy = Signal::derive(move || processing.with(|p| p.is_processing));
    let is_prompt_mode = move || config.with(|c| c.mode == EnhancementMode::Prompt);

    let mode_options: Vec<(String, String)> = EnhancementMode::all()
        .iter()
        .map(|m| (m.as_str().to_string(), m.label().to_string()))
        .collect();

    let on_mode = Callback::new(move |value: String| match EnhancementMode::from_str(&value) {
        Ok(mode) => config.update(|c| c.mode = mode),
        Err(e) => log::warn!("{}", e),
    });

    let prepare = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        request_json.set(None);

        let Some((file, info)) =
            image.with_untracked(|f| f.as_ref().map(|m| (m.file.clone(), m.info())))
        else {
            error.set(Some("Upload an image first".to_string()));
            return;
        };
        let cfg = config.get_untracked();
        if let Err(e) = cfg.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        processing.set(ProcessingState::started("Reading image"));
        spawn_local(async move {
            let result: Result<String, String> = async {
                let format = load_image(&file, processing).await?;
                let request =
                    EnhancementRequest::new(info, format, &cfg).map_err(|e| e.to_string())?;
                to_pretty_json(&request)
            }
            .await;
            finish(result, processing, request_json, error);
        });
    };

    view! {
        <PageFrame
            surface="image_enhancer"
            title="Image Enhancer"
            subtitle="Upscale and clean up an image automatically or with your own instruction."
        >
            <div class="studio-grid">
                <div class="studio-grid__input">
                    <ImagePicker
                        file=image
                        label="Upload an image"
                        disabled=is_busy
                        on_error=Callback::new(move |e| error.set(Some(e)))
                    />
                    <RadioGroup
                        name="enhance-mode"
                        label="Mode"
                        value=Signal::derive(move || config.with(|c| c.mode.as_str().to_string()))
                        on_change=on_mode
                        options=mode_options
                        disabled=is_busy
                    />
                    <Show when=is_prompt_mode>
                        <Textarea
                            id="enhance-prompt"
                            label="Instruction"
                            placeholder="e.g. restore faded colours and remove film grain"
                            value=Signal::derive(move || config.with(|c| c.prompt.clone().unwrap_or_default()))
                            on_input=Callback::new(move |text: String| config.update(|c| c.prompt = Some(text)))
                            max_chars=MAX_PROMPT_CHARS
                            disabled=is_busy
                        />
                    </Show>
                    <Button disabled=is_busy on_click=Callback::new(prepare)>
                        {move || if is_busy.get() { "Preparing..." } else { "Prepare Enhancement" }}
                    </Button>
                </div>
                <div class="studio-grid__output">
                    <ProcessingStatus state=processing />
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                    {move || request_json.get().map(|json| view! {
                        <JsonViewer
                            json_content=json
                            title="Enhancement request".to_string()
                            file_name="enhancement_request.json".to_string()
                        />
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
