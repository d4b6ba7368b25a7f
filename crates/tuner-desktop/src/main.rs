#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    tuner_desktop::run();
}
