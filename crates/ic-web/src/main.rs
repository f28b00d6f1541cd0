use ic_web::app_root::app_root;

fn main() {
    ic_web::app::logging::init();
    dioxus::launch(app_root);
}
