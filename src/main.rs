//! Browser entry point: installs the panic hook and console logger, then
//! mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("todo client starting against {}", todo_client::config::API_BASE_URL);
        leptos::mount::mount_to_body(todo_client::app::App);
    }
}
