mod components;

use components::app::App;

fn main() {
    touch_motion::util::init_logging(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
