use oddsboard::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
