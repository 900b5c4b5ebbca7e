//! Labeled horizontal progress bar.
//!
//! The fill is an SVG `rect` whose width is the value as a percentage of the
//! track. Values are not clamped: `150` overflows the track and `-10` renders a
//! negative width, exactly as given. [`check_value`] exists for callers that want
//! to flag such input before it reaches the component.

use leptos::prelude::*;
use thiserror::Error;

pub const TRACK_CLASS: &str = "h-4 w-96 bg-gray-200 rounded mt-2";

#[derive(Debug, Error, PartialEq)]
pub enum ProgressError {
    #[error("progress value {value} is outside 0..=100")]
    OutOfRangeInput { value: f64 },
}

/// `width` attribute of the filled segment, e.g. `"50%"`.
pub fn fill_width(value: f64) -> String {
    format!("{value}%")
}

pub fn check_value(value: f64) -> Result<f64, ProgressError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ProgressError::OutOfRangeInput { value })
    }
}

#[component]
pub fn ProgressBar(
    #[prop(into)] color: String,
    #[prop(into)] label: String,
    value: f64,
) -> impl IntoView {
    view! {
        <div class="mt-5 w-96">
            <span class="mr-2">{label}</span>
            <svg class=TRACK_CLASS>
                <rect fill=color width=fill_width(value) height="100%" />
            </svg>
        </div>
    }
}
