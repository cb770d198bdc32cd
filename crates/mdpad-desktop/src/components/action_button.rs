//! Toolbar button with a text icon and pulse feedback

use dioxus::prelude::*;

use crate::theme::ColorPalette;

#[component]
pub fn ActionButton(
    label: String,
    title: &'static str,
    scale: f64,
    colors: &'static ColorPalette,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "action-button",
            title: "{title}",
            style: "
                min-width: 44px;
                padding: 4px 10px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
                font-size: 12px;
                cursor: pointer;
                transform: scale({scale});
                transition: transform 0.1s ease;
            ",
            onclick: move |evt| onclick.call(evt),
            span { class: "text-icon", "{label}" }
        }
    }
}
