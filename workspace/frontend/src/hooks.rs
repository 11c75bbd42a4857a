use std::ops::Deref;
use std::rc::Rc;

use common::{load_users, PointerTarget, UsersAction, UsersView};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};
use yew::prelude::*;

use crate::api_client::HttpUsersApi;

/// DOM id of the wrapper around a user's accounts button and menu.
pub fn dropdown_element_id(user_id: &str) -> String {
    format!("dropdown-{}", user_id)
}

/// Reducer wrapper so `UsersView` can drive `use_reducer`.
#[derive(Default, PartialEq)]
pub struct UsersStore(UsersView);

impl Deref for UsersStore {
    type Target = UsersView;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for UsersStore {
    type Action = UsersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = self.0.clone();
        if view.apply(action) {
            Rc::new(Self(view))
        } else {
            self
        }
    }
}

/// Page state, loading the users once on mount.
#[hook]
pub fn use_users_store() -> UseReducerHandle<UsersStore> {
    let store = use_reducer_eq(UsersStore::default);

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpUsersApi::from_settings();
                load_users(&api, |action| dispatcher.dispatch(action)).await;
            });
            || ()
        });
    }

    store
}

/// Dismisses the open dropdown on outside pointer-down/touch-start or Escape.
///
/// Document listeners exist only while a dropdown is open. They are owned by
/// the effect and dropped (and thereby removed) when the open id changes or
/// the component unmounts.
#[hook]
pub fn use_dismiss_listeners(open_id: Option<String>, dispatcher: UseReducerDispatcher<UsersStore>) {
    use_effect_with(open_id, move |open_id| {
        let listeners = open_id.as_ref().and_then(|id| register_dismiss_listeners(id, dispatcher));
        move || {
            if let Some(listeners) = listeners {
                log::trace!("Removing {} dropdown listeners", listeners.len());
                drop(listeners);
            }
        }
    });
}

fn register_dismiss_listeners(
    open_id: &str,
    dispatcher: UseReducerDispatcher<UsersStore>,
) -> Option<Vec<EventListener>> {
    let document = web_sys::window()?.document()?;
    let element_id = dropdown_element_id(open_id);
    log::trace!("Registering dropdown listeners for {}", element_id);

    let on_pointer = {
        let dispatcher = dispatcher.clone();
        move |event: &Event| {
            let target = classify_target(event, &element_id);
            dispatcher.dispatch(UsersAction::PointerDown(target));
        }
    };

    let listeners = vec![
        EventListener::new(&document, "mousedown", on_pointer.clone()),
        EventListener::new(&document, "touchstart", on_pointer),
        EventListener::new(&document, "keydown", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                dispatcher.dispatch(UsersAction::KeyDown(event.key()));
            }
        }),
    ];

    Some(listeners)
}

/// A missing dropdown element or a non-node target counts as outside.
fn classify_target(event: &Event, element_id: &str) -> PointerTarget {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());

    match (container, target) {
        (Some(container), Some(node)) if container.contains(Some(&node)) => PointerTarget::Inside,
        _ => PointerTarget::Outside,
    }
}
