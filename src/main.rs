mod components;
mod config;
mod error;
mod loader;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    util::init_logging();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    #[test]
    fn panics_still_unwind_with_console_hook() {
        console_error_panic_hook::set_once();
        console_error_panic_hook::set_once();
        let caught = std::panic::catch_unwind(|| -> u32 { panic!("boom") });
        assert!(caught.is_err());
    }
}
