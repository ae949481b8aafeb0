//! Shared editor for `VideoGenConfig`, used by the logo animator and the video generator.

use contracts::domain::{
    DurationBounds, Orientation, Resolution, VideoGenConfig, VideoStyle, MAX_PROMPT_CHARS,
};
use leptos::prelude::*;

use crate::shared::components::ui::{NumberInput, RadioGroup, Select, Textarea};

#[component]
pub fn VideoConfigForm(
    config: RwSignal<VideoGenConfig>,
    bounds: DurationBounds,
    /// Used for element ids
    #[prop(into)]
    id_prefix: String,
    #[prop(into)]
    prompt_label: String,
    #[prop(optional, into)]
    prompt_placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let style_options: Vec<(String, String)> = VideoStyle::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect();
    let orientation_options: Vec<(String, String)> = Orientation::all()
        .iter()
        .map(|o| (o.as_str().to_string(), o.label().to_string()))
        .collect();
    let resolution_options: Vec<(String, String)> = Resolution::all()
        .iter()
        .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
        .collect();

    let on_style = Callback::new(move |value: String| match VideoStyle::from_str(&value) {
        Ok(style) => config.update(|c| c.style = style),
        Err(e) => log::warn!("{}", e),
    });
    let on_orientation = Callback::new(move |value: String| match Orientation::from_str(&value) {
        Ok(orientation) => config.update(|c| c.orientation = orientation),
        Err(e) => log::warn!("{}", e),
    });
    let on_resolution = Callback::new(move |value: String| match Resolution::from_str(&value) {
        Ok(resolution) => config.update(|c| c.resolution = resolution),
        Err(e) => log::warn!("{}", e),
    });
    // Out-of-range values are kept and reported on submit
    let on_duration = Callback::new(move |value: String| {
        if let Ok(seconds) = value.trim().parse::<u32>() {
            config.update(|c| c.duration = seconds);
        }
    });

    view! {
        <div class="video-config">
            <Textarea
                id=format!("{}-prompt", id_prefix)
                label=prompt_label
                placeholder=prompt_placeholder
                value=Signal::derive(move || config.with(|c| c.prompt.clone()))
                on_input=Callback::new(move |text: String| config.update(|c| c.prompt = text))
                max_chars=MAX_PROMPT_CHARS
                disabled=disabled
            />
            <div class="video-config__grid">
                <Select
                    id=format!("{}-style", id_prefix)
                    label="Style"
                    value=Signal::derive(move || config.with(|c| c.style.as_str().to_string()))
                    on_change=on_style
                    options=style_options
                    disabled=disabled
                />
                <NumberInput
                    id=format!("{}-duration", id_prefix)
                    label=format!("Duration ({}-{}s)", bounds.min, bounds.max)
                    value=Signal::derive(move || config.with(|c| c.duration))
                    on_input=on_duration
                    min=bounds.min
                    max=bounds.max
                    suffix="sec"
                    disabled=disabled
                />
            </div>
            <RadioGroup
                name=format!("{}-orientation", id_prefix)
                label="Orientation"
                value=Signal::derive(move || config.with(|c| c.orientation.as_str().to_string()))
                on_change=on_orientation
                options=orientation_options
                disabled=disabled
            />
            <RadioGroup
                name=format!("{}-resolution", id_prefix)
                label="Resolution"
                value=Signal::derive(move || config.with(|c| c.resolution.as_str().to_string()))
                on_change=on_resolution
                options=resolution_options
                disabled=disabled
            />
        </div>
    }
}
