mod item_form;
mod item_row;

pub use item_form::ItemForm;
pub use item_row::MenuItemRow;

use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardDescription, CardFooter,
    CardHeader, CardTitle,
};
use crate::forms::ItemFields;
use crate::state::{AddTarget, AppContext, EditorUi, Intent};
use crate::tree::TreeError;
use icons::X;
use leptos::prelude::*;

pub(crate) fn notice_message(err: &TreeError) -> String {
    match err {
        TreeError::InvalidMove { .. } => {
            "An item can't be moved into itself or one of its sub-items.".to_string()
        }
        other => other.to_string(),
    }
}

#[component]
pub fn MenuEditor() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let ui = EditorUi::new();
    provide_context(ui);

    let root_ids = Memo::new(move |_| {
        app.store
            .with(|s| s.tree().iter().map(|n| n.id.clone()).collect::<Vec<_>>())
    });
    let notice = Memo::new(move |_| app.store.with(|s| s.notice().map(notice_message)));
    let adding_root = Memo::new(move |_| ui.adding.with(|a| a == &Some(AddTarget::Root)));

    let open_add_root = move |_: web_sys::MouseEvent| {
        ui.editing_id.set(None);
        ui.adding.set(Some(AddTarget::Root));
    };

    let on_add_submit = Callback::new(move |fields: ItemFields| {
        app.dispatch(Intent::Add {
            label: fields.label,
            url: fields.url,
            parent: None,
        });
        ui.adding.set(None);
    });
    let on_add_cancel = Callback::new(move |_: ()| ui.adding.set(None));

    let add_root_form = move || {
        adding_root.get().then(|| {
            view! {
                <ItemForm
                    id_prefix="add-root"
                    submit_label="Add"
                    on_submit=on_add_submit
                    on_cancel=Some(on_add_cancel)
                />
            }
        })
    };

    view! {
        <main data-name="MenuEditor" class="mx-auto flex w-full max-w-3xl flex-col gap-6 p-6">
            <header class="flex flex-col gap-1">
                <h1 class="text-xl font-semibold">"Navigation"</h1>
                <p class="text-sm text-muted-foreground">
                    "Drag items to reorder them. Drop onto the middle of an item to nest it."
                </p>
            </header>

            {move || {
                notice
                    .get()
                    .map(|msg| {
                        view! {
                            <Alert class="flex items-start justify-between gap-2">
                                <AlertDescription>{msg}</AlertDescription>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Icon
                                    class="h-6 w-6"
                                    attr:aria-label="Dismiss"
                                    on:click=move |_| app.dispatch(Intent::DismissNotice)
                                >
                                    <X />
                                </Button>
                            </Alert>
                        }
                    })
            }}

            <Show
                when=move || !root_ids.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <Card>
                            <CardHeader>
                                <CardTitle>"The menu is empty"</CardTitle>
                                <CardDescription>"There are no links in this menu yet."</CardDescription>
                            </CardHeader>
                            <Show when=move || !adding_root.get()>
                                <CardFooter>
                                    <Button on:click=open_add_root>"Add menu item"</Button>
                                </CardFooter>
                            </Show>
                        </Card>
                    }
                }
            >
                <ul role="tree" aria-label="Navigation menu" class="flex flex-col gap-2">
                    <For
                        each=move || root_ids.get()
                        key=|id| id.clone()
                        children=move |id| view! { <MenuItemRow node_id=id depth=0 /> }
                    />
                </ul>
                <Show when=move || !adding_root.get()>
                    <Button variant=ButtonVariant::Outline on:click=open_add_root>
                        "Add menu item"
                    </Button>
                </Show>
            </Show>

            {add_root_form}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    #[test]
    fn test_notice_message_for_rejected_move() {
        let err = TreeError::InvalidMove {
            active: NodeId::from("2"),
            target: NodeId::from("2-1"),
        };
        assert_eq!(
            notice_message(&err),
            "An item can't be moved into itself or one of its sub-items."
        );
    }

    #[test]
    fn test_notice_message_falls_back_to_error_text() {
        let err = TreeError::NotFound(NodeId::from("9"));
        assert_eq!(notice_message(&err), "node `9` not found");
    }
}
