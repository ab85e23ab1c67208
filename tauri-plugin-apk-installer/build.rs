const COMMANDS: &[&str] = &["install_package"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
