use dioxus::prelude::*;

/// Centered modal overlay. Clicking the backdrop closes it; clicks inside
/// the card do not.
#[component]
pub fn Modal(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-card",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
