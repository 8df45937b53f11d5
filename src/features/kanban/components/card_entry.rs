use leptos::html::Input;
use leptos::prelude::*;
use crate::core::services::console;

#[derive(Debug, Clone, Copy, PartialEq)]
enum EntryKey {
    Confirm,
    Cancel,
}

// An Enter that finishes an IME composition belongs to the composition, not
// to the form.
fn entry_key(key: &str, composing: bool) -> Option<EntryKey> {
    match key {
        "Enter" if !composing => Some(EntryKey::Confirm),
        "Escape" if !composing => Some(EntryKey::Cancel),
        _ => None,
    }
}

/// Inline text entry for a new card. Enter confirms, Escape cancels.
#[component]
pub fn NewCardEntry(
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let input_ref: NodeRef<Input> = NodeRef::new();

    // Focus the input as soon as it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            console::log_err("Failed to focus card input", input.focus());
        }
    });

    let confirm = move || on_confirm.run(text.get_untracked());
    let cancel = move || on_cancel.run(());

    view! {
        <div class="new-card-wrapper">
            <input
                node_ref=input_ref
                type="text"
                class="new-card-input"
                placeholder="Enter card text"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev| match entry_key(&ev.key(), ev.is_composing()) {
                    Some(EntryKey::Confirm) => confirm(),
                    Some(EntryKey::Cancel) => cancel(),
                    None => {}
                }
            />
            <button class="save-card" on:click=move |_| confirm()>"Save"</button>
            <button class="cancel-card" on:click=move |_| cancel()>"Cancel"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Enter", false, Some(EntryKey::Confirm))]
    #[case("Escape", false, Some(EntryKey::Cancel))]
    #[case("Enter", true, None)]
    #[case("Escape", true, None)]
    #[case("a", false, None)]
    #[case("Tab", false, None)]
    fn maps_keys_to_entry_actions(
        #[case] key: &str,
        #[case] composing: bool,
        #[case] expected: Option<EntryKey>,
    ) {
        assert_eq!(entry_key(key, composing), expected);
    }
}
