use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;

use crate::input::debounce::{Debouncer, TimeoutScheduler};

/// Query input with debounced live search, explicit submit and clear.
///
/// `on_search` receives the raw input value for every triggered search; an
/// empty value is the clear signal. The submit and clear buttons are optional,
/// so a host page that disables them still gets live search.
#[component]
pub fn SearchBox<F>(
    on_search: F,
    debounce_ms: u32,
    #[prop(default = true)] submit_button: bool,
    #[prop(default = true)] clear_button: bool,
) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let input_ref = NodeRef::<html::Input>::new();
    let debouncer = Rc::new(RefCell::new(Debouncer::new(TimeoutScheduler, debounce_ms)));

    let immediate = {
        let on_search = on_search.clone();
        let debouncer = debouncer.clone();
        move || {
            let Some(input) = input_ref.get() else { return };
            // explicit triggers skip the quiet window
            debouncer.borrow_mut().cancel();
            on_search(input.value());
        }
    };

    let on_input = {
        let on_search = on_search.clone();
        let debouncer = debouncer.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let on_search = on_search.clone();
            debouncer.borrow_mut().call(move || on_search(value));
        }
    };

    let on_keydown = {
        let immediate = immediate.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                immediate();
            }
        }
    };

    let on_submit = {
        let immediate = immediate.clone();
        move |_: leptos::ev::MouseEvent| immediate()
    };

    let on_clear = {
        let on_search = on_search.clone();
        move |_: leptos::ev::MouseEvent| {
            debouncer.borrow_mut().cancel();
            if let Some(input) = input_ref.get() {
                input.set_value("");
                let _ = input.focus();
            }
            on_search(String::new());
        }
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Search posts..."
                node_ref=input_ref
                on:input=on_input
                on:keydown=on_keydown
            />
            {submit_button.then(|| view! {
                <button type="button" class="search-button" on:click=on_submit>
                    "Search"
                </button>
            })}
            {clear_button.then(|| view! {
                <button type="button" class="clear-search" on:click=on_clear>
                    "Clear"
                </button>
            })}
        </div>
    }
}
