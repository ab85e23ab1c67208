const COMMANDS: &[&str] = &["has_permission", "request_permission"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
