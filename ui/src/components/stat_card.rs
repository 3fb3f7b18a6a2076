use dioxus::prelude::*;

/// One dashboard figure with its icon and a small trend tag.
#[component]
pub fn StatCard(title: String, value: usize, trend: String, accent: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div {
                class: "stat-card-top",
                span { class: "stat-icon {accent}", {icon} }
                span { class: "stat-trend", "{trend}" }
            }
            h3 { class: "stat-value", "{value}" }
            p { class: "stat-title", "{title}" }
        }
    }
}
