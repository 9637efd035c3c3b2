//! Log Panel Component
//!
//! Shows the lines retained by the rolling logger. The snapshot is taken
//! when the panel opens or on Refresh, not on every new line.

use leptos::prelude::*;
use rolling_logger::RingBuffer;

#[component]
pub fn LogPanel() -> impl IntoView {
    let logs = StoredValue::new(expect_context::<RingBuffer>());
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(logs.with_value(RingBuffer::recent_lines));
    let on_toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|open| *open = !*open);
    };
    let on_clear = move |_| {
        logs.with_value(RingBuffer::clear);
        set_lines.set(Vec::new());
    };

    view! {
        <div class="log-panel">
            <button class="log-toggle" on:click=on_toggle>"Logs"</button>
            <Show when=move || open.get()>
                <div class="log-lines">
                    <div class="log-actions">
                        <button on:click=move |_| refresh()>"Refresh"</button>
                        <button on:click=on_clear>"Clear"</button>
                    </div>
                    <Show
                        when=move || !lines.read().is_empty()
                        fallback=|| view! { <p class="log-empty">"No log lines yet."</p> }
                    >
                        <pre>{move || lines.get().join("\n")}</pre>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
