use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Labelled text input with an inline validation message.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] required: bool,

    // NOTE: manual wiring instead of `bind:value`, which has moved between Leptos versions.
    #[prop(into)] bind_value: RwSignal<String>,

    /// Message shown under the input; `None` means the value is fine.
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_class = move || {
        tw_merge!(
            "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none md:text-sm",
            "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
            if error.with(Option::is_some) {
                "border-destructive ring-destructive/20"
            } else {
                ""
            }
        )
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value());
            }
        }
    };

    let label_for = id.clone();
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div data-name="TextField" class=tw_merge!("flex flex-col gap-1.5", class)>
            <label
                class="flex items-center gap-2 text-sm leading-none font-medium select-none"
                r#for=label_for
            >
                {label}
            </label>
            <input
                type="text"
                id=id
                class=input_class
                placeholder=placeholder
                required=required
                aria-required=required.then_some("true")
                aria-invalid=move || error.with(Option::is_some).then_some("true")
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                prop:value=move || bind_value.get()
                on:input=on_input
            />
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <span id=error_id.clone() class="text-xs text-destructive" role="alert">
                                {msg}
                            </span>
                        }
                    })
            }}
        </div>
    }
}
