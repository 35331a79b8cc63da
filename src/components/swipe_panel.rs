use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use touch_motion::{Axis, AxisOutcome, ControllerConfig, DomTransitions, GestureController, Handlers, Point, TouchBinding};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePanelProps {
    pub config: ControllerConfig,
    pub pages: Vec<AttrValue>,
    pub on_tap: Callback<Point>,
    /// Fired when an axis commits, with the committed displacement.
    pub on_settle: Callback<(Axis, f64)>,
}

fn set_transform(el: &HtmlElement, value: &str) {
    el.style().set_property("transform", value).ok();
}

// Horizontal swipes page through the track.
fn follow_x(track: HtmlElement, page: Rc<RefCell<i32>>, page_count: i32, on_settle: Callback<(Axis, f64)>) -> Callback<AxisOutcome> {
    Callback::from(move |outcome: AxisOutcome| {
        let mut page = page.borrow_mut();
        let offset = match outcome {
            AxisOutcome::Move(d) => d,
            AxisOutcome::End(d) => {
                if d != 0.0 {
                    *page = (*page - d.signum() as i32).clamp(0, (page_count - 1).max(0));
                    on_settle.emit((Axis::X, d));
                }
                0.0
            }
        };
        set_transform(&track, &format!("translateX(calc({}% + {}px))", -100 * *page, offset));
    })
}

// Vertical pulls follow the finger and always spring back; a committed pull is reported.
fn follow_y(card: HtmlElement, on_settle: Callback<(Axis, f64)>) -> Callback<AxisOutcome> {
    Callback::from(move |outcome: AxisOutcome| match outcome {
        AxisOutcome::Move(d) => set_transform(&card, &format!("translateY({}px)", d)),
        AxisOutcome::End(d) => {
            set_transform(&card, "translateY(0px)");
            if d != 0.0 {
                on_settle.emit((Axis::Y, d));
            }
        }
    })
}

#[function_component(SwipePanel)]
pub fn swipe_panel(props: &SwipePanelProps) -> Html {
    let surface_ref = use_node_ref();
    let card_ref = use_node_ref();
    let track_ref = use_node_ref();
    let page = use_mut_ref(|| 0_i32);
    let error = use_state_eq(|| None::<String>);

    // Rebind whenever the options change; the old binding is dropped by the teardown.
    {
        let surface_ref = surface_ref.clone();
        let card_ref = card_ref.clone();
        let track_ref = track_ref.clone();
        let page = page.clone();
        let page_count = props.pages.len() as i32;
        let on_tap = props.on_tap.clone();
        let on_settle = props.on_settle.clone();
        let error = error.clone();
        use_effect_with(props.config.clone(), move |config| {
            let mut binding = None;
            if let (Some(surface), Some(card), Some(track)) = (
                surface_ref.cast::<HtmlElement>(),
                card_ref.cast::<HtmlElement>(),
                track_ref.cast::<HtmlElement>(),
            ) {
                let handlers = Handlers {
                    x: Some(follow_x(track.clone(), page, page_count, on_settle.clone())),
                    y: Some(follow_y(card.clone(), on_settle)),
                    click: Some(on_tap),
                };
                let transitions = DomTransitions::new(vec![track], vec![card]);
                match GestureController::new(config, handlers, transitions)
                    .and_then(|c| TouchBinding::attach(&surface, c))
                {
                    Ok(b) => {
                        error.set(None);
                        binding = Some(b);
                    }
                    Err(e) => {
                        log::error!("swipe panel: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            }
            move || drop(binding)
        });
    }

    html! {
        <div ref={surface_ref} style="position:relative; overflow:hidden; touch-action:none; width:100%; max-width:480px; height:320px; margin:24px auto; border-radius:12px; background:#0e1116;">
            <div ref={card_ref} style="height:100%; transition:transform 250ms ease;">
                <div ref={track_ref} style="display:flex; height:100%; transition:transform 250ms ease;">
                    { for props.pages.iter().enumerate().map(|(i, text)| html! {
                        <div key={i} style="flex:0 0 100%; display:flex; align-items:center; justify-content:center; background:#161b22; border:1px solid #30363d; box-sizing:border-box; font-size:20px;">
                            { format!("{} / {}: {}", i + 1, props.pages.len(), text) }
                        </div>
                    }) }
                </div>
            </div>
            if let Some(msg) = &*error {
                <div style="position:absolute; bottom:8px; left:8px; right:8px; color:#f85149; font-size:12px;">{ msg.clone() }</div>
            }
        </div>
    }
}
