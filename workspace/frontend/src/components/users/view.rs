use common::{User, UserId, UsersAction};
use yew::prelude::*;

use super::search_bar::SearchBar;
use super::table::UsersTable;
use crate::components::feedback::{ErrorBanner, Loading};
use crate::hooks::{use_dismiss_listeners, use_users_store};

#[function_component(UsersAdmin)]
pub fn users_admin() -> Html {
    let store = use_users_store();

    let open_id = store.dropdown().open_id().map(str::to_string);
    use_dismiss_listeners(open_id, store.dispatcher());

    let on_query = {
        let dispatcher = store.dispatcher();
        Callback::from(move |query: String| dispatcher.dispatch(UsersAction::SetQuery(query)))
    };

    let on_toggle = {
        let dispatcher = store.dispatcher();
        Callback::from(move |user_id: UserId| {
            log::debug!("Accounts toggled for user {}", user_id);
            dispatcher.dispatch(UsersAction::ToggleAccounts(user_id))
        })
    };

    // Resolved against the collection: a stale id renders no menu.
    let open_id = store.open_user().map(|user| AttrValue::from(user.id.clone()));
    let users: Vec<User> = store.visible_users().into_iter().cloned().collect();

    html! {
        <>
            <SearchBar
                value={store.query().to_string()}
                summary={store.summary().map(AttrValue::from)}
                on_change={on_query}
            />
            if let Some(message) = store.error_banner() {
                <ErrorBanner {message} />
            }
            if store.is_loading() {
                <Loading />
            } else {
                <UsersTable {users} {open_id} {on_toggle} />
            }
        </>
    }
}
