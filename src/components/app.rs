use super::{settings_modal::SettingsModal, swipe_panel::SwipePanel};
use touch_motion::util::{load_json, save_json};
use touch_motion::{Axis, ControllerConfig, Point};
use yew::prelude::*;

const SETTINGS_KEY: &str = "tm_controller_config";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| load_json::<ControllerConfig>(SETTINGS_KEY).unwrap_or_default());
    let show_settings = use_state(|| false);
    let status = use_state(|| String::from("Swipe sideways to change page, pull up or down to refresh."));

    // Persist settings changes
    {
        use_effect_with((*config).clone(), move |cfg| {
            save_json(SETTINGS_KEY, cfg);
            || ()
        });
    }

    let on_tap = {
        let status = status.clone();
        Callback::from(move |p: Point| status.set(format!("Tap at ({:.0}, {:.0})", p.x, p.y)))
    };
    let on_settle = {
        let status = status.clone();
        Callback::from(move |(axis, delta): (Axis, f64)| {
            let what = match (axis, delta > 0.0) {
                (Axis::X, true) => "previous page",
                (Axis::X, false) => "next page",
                (Axis::Y, _) => "refresh",
            };
            status.set(format!("Committed {what} ({delta:.0}px)"));
        })
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let change_settings = {
        let config = config.clone();
        Callback::from(move |c: ControllerConfig| config.set(c))
    };
    let pages: Vec<AttrValue> = vec!["Inbox".into(), "Archive".into(), "Starred".into(), "Trash".into()];

    html! {
        <div id="root" style="position:relative; min-height:100vh; color:#c9d1d9; background:#0d1117; font-family:sans-serif;">
            <div id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:8px 12px; border-bottom:1px solid #30363d;">
                <span>{"Touch Motion"}</span>
                <button onclick={open_settings}>{"Settings"}</button>
            </div>
            <SwipePanel config={(*config).clone()} pages={pages} on_tap={on_tap} on_settle={on_settle} />
            <div style="text-align:center; font-size:14px; opacity:0.8;">{ (*status).clone() }</div>
            <SettingsModal
                show={*show_settings}
                config={(*config).clone()}
                on_change={change_settings}
                on_close={close_settings}
            />
        </div>
    }
}
