// crates/distortion-app/src/pages/mod.rs
// Page components for Distortion Check

mod classify;

pub use classify::ClassifyPage;
