use super::item_form::ItemForm;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::drag::TargetRect;
use crate::forms::ItemFields;
use crate::models::{DropIntent, NodeId};
use crate::state::{AddTarget, AppContext, EditorUi, Intent, NudgeDirection};
use icons::{ChevronDown, ChevronUp};
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Extra row classes for the hint shown under the pointer.
pub(crate) fn drop_hint_class(intent: Option<DropIntent>) -> &'static str {
    match intent {
        Some(DropIntent::Before) => "border-t-2 border-t-primary rounded-t-none",
        Some(DropIntent::After) => "border-b-2 border-b-primary rounded-b-none",
        Some(DropIntent::Into) => "bg-primary/10 ring-2 ring-primary/40",
        None => "",
    }
}

fn target_rect(ev: &web_sys::DragEvent) -> Option<TargetRect> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let r = el.get_bounding_client_rect();
    Some(TargetRect::new(r.top(), r.height()))
}

/// `dragleave` also fires when the pointer crosses into a child element.
fn left_for_child(ev: &web_sys::DragEvent) -> bool {
    let current = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let related = ev
        .related_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (current, related) {
        (Some(current), Some(related)) => current.contains(Some(&related)),
        _ => false,
    }
}

#[component]
pub fn MenuItemRow(node_id: NodeId, depth: usize) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let ui = expect_context::<EditorUi>();
    let id_sv = StoredValue::new(node_id);

    // Each row subscribes to its own slice of the store, so a drag only
    // re-renders the rows whose hint actually changes.
    let content = Memo::new(move |_| {
        app.store.with(|s| {
            id_sv.with_value(|id| s.node(id).map(|n| (n.label.clone(), n.url.clone())))
        })
    });
    let child_ids = Memo::new(move |_| {
        app.store.with(|s| {
            id_sv.with_value(|id| {
                s.node(id)
                    .map(|n| n.children.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                    .unwrap_or_default()
            })
        })
    });
    let hover = Memo::new(move |_| {
        app.store
            .with(|s| id_sv.with_value(|id| s.gesture().hover_intent_for(id)))
    });
    let dragging = Memo::new(move |_| {
        app.store
            .with(|s| id_sv.with_value(|id| s.gesture().is_dragging(id)))
    });
    let editing = Memo::new(move |_| {
        ui.editing_id
            .with(|e| id_sv.with_value(|id| e.as_ref() == Some(id)))
    });
    let adding_child = Memo::new(move |_| {
        ui.adding
            .with(|a| id_sv.with_value(|id| matches!(a, Some(AddTarget::Child(c)) if c == id)))
    });

    let label_text = move || content.with(|c| c.as_ref().map(|(l, _)| l.clone()).unwrap_or_default());
    let url_text = move || content.with(|c| c.as_ref().and_then(|(_, u)| u.clone()));

    let nudge = move |direction: NudgeDirection| {
        app.dispatch(Intent::Nudge {
            id: id_sv.get_value(),
            direction,
        });
    };

    let on_dragstart = move |ev: web_sys::DragEvent| {
        ev.stop_propagation();
        let id = id_sv.get_value();
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", id.as_str());
            dt.set_effect_allowed("move");
        }
        app.dispatch(Intent::DragStart { id });
    };
    let on_dragover = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let Some(rect) = target_rect(&ev) else {
            return;
        };
        app.dispatch(Intent::DragOver {
            target: id_sv.get_value(),
            pointer_y: f64::from(ev.client_y()),
            rect,
        });
    };
    let on_dragleave = move |ev: web_sys::DragEvent| {
        if !left_for_child(&ev) {
            app.dispatch(Intent::DragLeave);
        }
    };
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        // The last dragover may be a few pixels stale.
        if let Some(rect) = target_rect(&ev) {
            app.dispatch(Intent::DragOver {
                target: id_sv.get_value(),
                pointer_y: f64::from(ev.client_y()),
                rect,
            });
        }
        app.dispatch(Intent::DragEnd);
    };
    // Fires on the source after a drop, or alone when the drag is abandoned.
    let on_dragend = move |_: web_sys::DragEvent| app.dispatch(Intent::DragCancel);

    let on_edit_submit = Callback::new(move |fields: ItemFields| {
        app.dispatch(Intent::Edit {
            id: id_sv.get_value(),
            label: fields.label,
            url: fields.url,
        });
        ui.editing_id.set(None);
    });
    let on_edit_cancel = Callback::new(move |_: ()| ui.editing_id.set(None));

    let on_add_submit = Callback::new(move |fields: ItemFields| {
        app.dispatch(Intent::Add {
            label: fields.label,
            url: fields.url,
            parent: Some(id_sv.get_value()),
        });
        ui.adding.set(None);
    });
    let on_add_cancel = Callback::new(move |_: ()| ui.adding.set(None));

    let row_class = move || {
        tw_merge!(
            "group flex items-center gap-3 rounded-md border bg-card px-3 py-2 shadow-xs transition-colors",
            drop_hint_class(hover.get()),
            if dragging.get() { "opacity-50" } else { "" }
        )
    };

    let row = move || {
        if editing.get() {
            let (label, url) = content.get_untracked().unwrap_or_default();
            let prefix = id_sv.with_value(|id| format!("edit-{id}"));
            return view! {
                <ItemForm
                    id_prefix=prefix
                    initial_label=label
                    initial_url=url.unwrap_or_default()
                    submit_label="Save"
                    on_submit=on_edit_submit
                    on_cancel=Some(on_edit_cancel)
                />
            }
            .into_any();
        }

        view! {
            <div
                data-name="MenuItemRowContent"
                class=row_class
                draggable="true"
                data-drop=move || hover.get().map(|i| i.as_ref().to_string())
                on:dragstart=on_dragstart
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
                on:dragend=on_dragend
            >
                <button
                    type="button"
                    class="cursor-grab rounded-sm p-1 text-muted-foreground hover:text-foreground focus-visible:ring-2 focus-visible:ring-ring/50 outline-none"
                    aria-label=move || format!("Reorder {}", label_text())
                    title="Drag to move, or use the arrow keys"
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "ArrowUp" => {
                            ev.prevent_default();
                            nudge(NudgeDirection::Up);
                        }
                        "ArrowDown" => {
                            ev.prevent_default();
                            nudge(NudgeDirection::Down);
                        }
                        _ => {}
                    }
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <circle cx="9" cy="12" r="1"></circle>
                        <circle cx="9" cy="5" r="1"></circle>
                        <circle cx="9" cy="19" r="1"></circle>
                        <circle cx="15" cy="12" r="1"></circle>
                        <circle cx="15" cy="5" r="1"></circle>
                        <circle cx="15" cy="19" r="1"></circle>
                    </svg>
                </button>

                <div class="flex min-w-0 flex-1 flex-col">
                    <span class="truncate text-sm font-medium">{label_text}</span>
                    {move || {
                        url_text()
                            .map(|u| {
                                view! { <span class="truncate text-xs text-muted-foreground">{u}</span> }
                            })
                    }}
                </div>

                <div class="flex items-center gap-1 opacity-60 group-hover:opacity-100 group-focus-within:opacity-100">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Move up"
                        attr:aria-label="Move up"
                        on:click=move |_| nudge(NudgeDirection::Up)
                    >
                        <ChevronUp />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Move down"
                        attr:aria-label="Move down"
                        on:click=move |_| nudge(NudgeDirection::Down)
                    >
                        <ChevronDown />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Edit"
                        attr:aria-label="Edit"
                        on:click=move |_| {
                            ui.adding.set(None);
                            ui.editing_id.set(Some(id_sv.get_value()));
                        }
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <path d="M12 20h9" />
                            <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                        </svg>
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Add sub-item"
                        attr:aria-label="Add sub-item"
                        on:click=move |_| {
                            ui.editing_id.set(None);
                            ui.adding.set(Some(AddTarget::Child(id_sv.get_value())));
                        }
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <path d="M5 12h14" />
                            <path d="M12 5v14" />
                        </svg>
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Icon
                        attr:title="Delete"
                        attr:aria-label="Delete"
                        on:click=move |_| {
                            let id = id_sv.get_value();
                            if ui.editing_id.with_untracked(|e| e.as_ref() == Some(&id)) {
                                ui.editing_id.set(None);
                            }
                            app.dispatch(Intent::Delete { id });
                        }
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <path d="M3 6h18" />
                            <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
                            <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
                        </svg>
                    </Button>
                </div>
            </div>
        }
        .into_any()
    };

    let add_child_form = move || {
        adding_child.get().then(|| {
            let prefix = id_sv.with_value(|id| format!("add-{id}"));
            view! {
                <div class="ml-8 mt-2">
                    <ItemForm
                        id_prefix=prefix
                        submit_label="Add"
                        on_submit=on_add_submit
                        on_cancel=Some(on_add_cancel)
                    />
                </div>
            }
        })
    };

    // Type-erased so the component can nest itself.
    let children = view! {
        <Show when=move || child_ids.with(|ids| !ids.is_empty())>
            <ul role="group" class="ml-8 mt-2 flex flex-col gap-2 border-l-2 pl-4">
                <For
                    each=move || child_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <MenuItemRow node_id=id depth=depth + 1 /> }
                />
            </ul>
        </Show>
    }
    .into_any();

    view! {
        <li
            data-name="MenuItemRow"
            role="treeitem"
            {..::leptos::tachys::html::attribute::custom::custom_attribute("aria-level", (depth + 1).to_string())}
            aria-expanded=move || child_ids.with(|ids| (!ids.is_empty()).then_some("true"))
            class="flex flex-col"
        >
            {row}
            {add_child_form}
            {children}
        </li>
    }
    .into_any()
}
