use web_sys::HtmlInputElement;
use yew::prelude::*;

use touch_motion::config::DEFAULT_SENSITIVITY;
use touch_motion::{Axis, ControllerConfig, PriorityAxis};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: ControllerConfig,
    pub on_change: Callback<ControllerConfig>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let priority_cb = |priority: PriorityAxis| {
        let cb = props.on_change.clone();
        let config = props.config.clone();
        Callback::from(move |_: MouseEvent| cb.emit(config.clone().with_priority(priority)))
    };
    let sensitivity_cb = |axis: Axis| {
        let cb = props.on_change.clone();
        let config = props.config.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(px) = input.value().parse::<f64>() {
                cb.emit(config.clone().with_axis_sensitivity(axis, px));
            }
        })
    };
    let reset_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .map(|win| {
                    win.confirm_with_message("Reset swipe settings to their defaults?")
                        .unwrap_or(false)
                })
                .unwrap_or(true);
            if confirmed {
                cb.emit(ControllerConfig::default());
            }
        })
    };

    let slider = |axis: Axis, label: &'static str| {
        let value = props.config.sensitivity_for(axis).unwrap_or(DEFAULT_SENSITIVITY);
        html! {
            <label style="display:flex; align-items:center; gap:8px;">
                <span style="min-width:110px;">{label}</span>
                <input type="range" min="10" max="200" step="5" value={value.to_string()} oninput={sensitivity_cb(axis)} />
                <span>{format!("{value:.0}px")}</span>
            </label>
        }
    };
    let priority_button = |priority: PriorityAxis, label: &'static str| {
        let selected = props.config.priority_axis == priority;
        let style = if selected { "border:1px solid #58a6ff;" } else { "border:1px solid #30363d;" };
        html! { <button style={style} onclick={priority_cb(priority)}>{label}</button> }
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Swipe Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { slider(Axis::X, "Horizontal") }
                { slider(Axis::Y, "Vertical") }
            </div>
            <div style="display:flex; gap:8px; align-items:center;">
                <span>{"Priority axis"}</span>
                { priority_button(PriorityAxis::None, "None") }
                { priority_button(PriorityAxis::X, "X") }
                { priority_button(PriorityAxis::Y, "Y") }
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset to Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Sensitivity is how far a swipe must travel before it commits. With a priority axis, the other axis only moves while the priority axis is below its threshold."}</div>
        </div>
    </div>}
}
