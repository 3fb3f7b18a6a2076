//! SVG/CSS charts for the dashboard. Drawn from the derived stats on every
//! render; there is nothing to animate or cache.

use dioxus::prelude::*;

/// Donut showing the completion rate. The ring is a circle of circumference
/// 100 so the dash array maps one-to-one onto percentages.
#[component]
pub fn DonutChart(rate: u32) -> Element {
    let remainder = 100 - rate.min(100);

    rsx! {
        svg {
            class: "donut",
            view_box: "0 0 42 42",

            circle {
                cx: "21",
                cy: "21",
                r: "15.915",
                fill: "none",
                stroke: "#e2e8f0",
                stroke_width: "4",
            }
            circle {
                cx: "21",
                cy: "21",
                r: "15.915",
                fill: "none",
                stroke: "#6366f1",
                stroke_width: "4",
                stroke_linecap: "round",
                stroke_dasharray: "{rate} {remainder}",
                stroke_dashoffset: "25",
            }
            text {
                x: "21",
                y: "21.5",
                class: "donut-rate",
                text_anchor: "middle",
                "{rate}%"
            }
            text {
                x: "21",
                y: "27",
                class: "donut-caption",
                text_anchor: "middle",
                "Done"
            }
        }
    }
}

/// Two-column status distribution bar chart.
#[component]
pub fn StatusBars(completed: usize, pending: usize) -> Element {
    let max = completed.max(pending).max(1);
    let bars = [
        ("Completed", completed, completed * 100 / max),
        ("Pending", pending, pending * 100 / max),
    ];

    rsx! {
        div {
            class: "bar-chart",
            for (label, value, height) in bars {
                div {
                    key: "{label}",
                    class: "bar-col",
                    span { class: "bar-value", "{value}" }
                    div { class: "bar-track",
                        div { class: "bar-fill", style: "height: {height}%;" }
                    }
                    span { class: "bar-label", "{label}" }
                }
            }
        }
    }
}
