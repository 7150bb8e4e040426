use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextField};
use crate::forms::{validate_item, FormErrors, ItemFields};
use icons::{Check, X};
use leptos::prelude::*;

/// Label + URL form used for adding and editing menu items.
///
/// Errors appear after the first submit attempt and then track the input live.
#[component]
pub fn ItemForm(
    /// Prefix for the input ids, unique per open form.
    #[prop(into)]
    id_prefix: String,
    #[prop(into, optional)] initial_label: String,
    #[prop(into, optional)] initial_url: String,
    #[prop(into)] submit_label: String,
    on_submit: Callback<ItemFields>,
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let label = RwSignal::new(initial_label.clone());
    let url = RwSignal::new(initial_url.clone());
    let attempted = RwSignal::new(false);

    let errors = Memo::new(move |_| {
        if !attempted.get() {
            return FormErrors::default();
        }
        label.with(|l| url.with(|u| validate_item(l, u).err().unwrap_or_default()))
    });
    let label_error = Signal::derive(move || errors.with(|e| e.label.as_ref().map(ToString::to_string)));
    let url_error = Signal::derive(move || errors.with(|e| e.url.as_ref().map(ToString::to_string)));

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        attempted.set(true);
        match validate_item(&label.get_untracked(), &url.get_untracked()) {
            Ok(fields) => {
                on_submit.run(fields);
                label.set(initial_label.clone());
                url.set(initial_url.clone());
                attempted.set(false);
            }
            Err(e) => tracing::debug!(?e, "item form rejected"),
        }
    };

    let label_id = format!("{id_prefix}-label");
    let url_id = format!("{id_prefix}-url");

    view! {
        <form
            data-name="ItemForm"
            class="flex flex-col gap-4 rounded-md border bg-card p-4 shadow-xs"
            novalidate=true
            on:submit=on_form_submit
        >
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField
                    id=label_id
                    label="Label"
                    placeholder="e.g. Promotions"
                    required=true
                    bind_value=label
                    error=label_error
                />
                <TextField
                    id=url_id
                    label="URL"
                    placeholder="https://example.com or /path"
                    bind_value=url
                    error=url_error
                />
            </div>
            <div class="flex items-center justify-end gap-2">
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                attr:r#type="button"
                                on:click=move |_| cancel.run(())
                            >
                                <X />
                                "Cancel"
                            </Button>
                        }
                    })}
                <Button size=ButtonSize::Sm attr:r#type="submit">
                    <Check />
                    {submit_label}
                </Button>
            </div>
        </form>
    }
}
