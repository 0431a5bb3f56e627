#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
