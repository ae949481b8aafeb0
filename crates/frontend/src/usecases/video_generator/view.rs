use contracts::domain::{ProcessingState, VideoGenConfig, VideoGenerationRequest};
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::components::{ProcessingStatus, VideoConfigForm};
use crate::shared::config::use_config;
use crate::shared::json_viewer::JsonViewer;
use crate::shared::page_frame::PageFrame;
use crate::usecases::common::{finish, to_pretty_json};

#[component]
pub fn VideoGenerator() -> impl IntoView {
    let bounds = use_config().video.bounds().unwrap_or_default();

    let config = RwSignal::new(VideoGenConfig::new(&bounds));
    let processing = RwSignal::new(ProcessingState::idle());
    let error = RwSignal::new(None::<String>);
    let request_json = RwSignal::new(None::<String>);

    let prepare = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        request_json.set(None);

        // No file to read, so this completes synchronously
        let result = config.with_untracked(|cfg| {
            VideoGenerationRequest::new(cfg, &bounds)
                .map_err(|e| e.to_string())
                .and_then(|request| to_pretty_json(&request))
        });
        finish(result, processing, request_json, error);
    };

    view! {
        <PageFrame
            surface="video_generator"
            title="Video Generator"
            subtitle="Describe a scene and pick a look; the studio turns it into a clip."
        >
            <div class="studio-grid">
                <div class="studio-grid__input">
                    <VideoConfigForm
                        config=config
                        bounds=bounds
                        id_prefix="generate"
                        prompt_label="Prompt"
                        prompt_placeholder="e.g. a slow dolly shot through a rain-soaked neon alley at night"
                    />
                    <Button on_click=Callback::new(prepare)>"Prepare Video"</Button>
                </div>
                <div class="studio-grid__output">
                    <ProcessingStatus state=processing />
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                    {move || request_json.get().map(|json| view! {
                        <JsonViewer
                            json_content=json
                            title="Video generation request".to_string()
                            file_name="video_generation_request.json".to_string()
                        />
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
