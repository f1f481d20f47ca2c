use cutout_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting landing page");
    yew::Renderer::<App>::new().render();
}
