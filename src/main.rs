use yew_kitchen_rush::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
