use contracts::domain::{LogoAnimationRequest, ProcessingState, VideoGenConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::Button;
use crate::shared::components::{ImagePicker, ProcessingStatus, VideoConfigForm};
use crate::shared::config::use_config;
use crate::shared::json_viewer::JsonViewer;
use crate::shared::media_file::MediaFile;
use crate::shared::page_frame::PageFrame;
use crate::usecases::common::{finish, load_image, to_pretty_json};

#[component]
pub fn LogoAnimator() -> impl IntoView {
    let bounds = use_config().video.bounds().unwrap_or_default();

    let logo = RwSignal::new_local(None::<MediaFile>);
    let config = RwSignal::new(VideoGenConfig::new(&bounds));
    let processing = RwSignal::new(ProcessingState::idle());
    let error = RwSignal::new(None::<String>);
    let request_json = RwSignal::new(None::<String>);

    let is_busy = Signal::derive(move || processing.with(|p| p.is_processing));

    let prepare = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        request_json.set(None);

        let Some((file, info)) =
            logo.with_untracked(|f| f.as_ref().map(|m| (m.file.clone(), m.info())))
        else {
            error.set(Some("Upload a logo first".to_string()));
            return;
        };
        let cfg = config.get_untracked();
        if let Err(e) = cfg.validate(&bounds, false) {
            error.set(Some(e.to_string()));
            return;
        }

        processing.set(ProcessingState::started("Reading logo"));
        spawn_local(async move {
            let result: Result<String, String> = async {
                let format = load_image(&file, processing).await?;
                let request = LogoAnimationRequest::new(info, format, &cfg, &bounds)
                    .map_err(|e| e.to_string())?;
                to_pretty_json(&request)
            }
            .await;
            finish(result, processing, request_json, error);
        });
    };

    view! {
        <PageFrame
            surface="logo_animator"
            title="Logo Animator"
            subtitle="Bring a static logo to life with a short generated clip."
        >
            <div class="studio-grid">
                <div class="studio-grid__input">
                    <ImagePicker
                        file=logo
                        label="Upload your logo"
                        disabled=is_busy
                        on_error=Callback::new(move |e| error.set(Some(e)))
                    />
                    <VideoConfigForm
                        config=config
                        bounds=bounds
                        id_prefix="logo"
                        prompt_label="Motion direction (optional)"
                        prompt_placeholder="e.g. letters assemble from particles, then a soft glow"
                        disabled=is_busy
                    />
                    <Button disabled=is_busy on_click=Callback::new(prepare)>
                        {move || if is_busy.get() { "Preparing..." } else { "Prepare Animation" }}
                    </Button>
                </div>
                <div class="studio-grid__output">
                    <ProcessingStatus state=processing />
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                    {move || request_json.get().map(|json| view! {
                        <JsonViewer
                            json_content=json
                            title="Logo animation request".to_string()
                            file_name="logo_animation_request.json".to_string()
                        />
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
