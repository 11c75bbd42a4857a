use common::{User, UserId};
use yew::prelude::*;

use super::accounts_dropdown::AccountsDropdown;

#[derive(Properties, PartialEq)]
pub struct UsersTableProps {
    pub users: Vec<User>,
    /// Id of the user whose dropdown is open, already checked to exist.
    #[prop_or_default]
    pub open_id: Option<AttrValue>,
    pub on_toggle: Callback<UserId>,
}

#[function_component(UsersTable)]
pub fn users_table(props: &UsersTableProps) -> Html {
    let is_open = |user: &User| props.open_id.as_deref() == Some(user.id.as_str());

    html! {
        <div class="overflow-visible bg-base-100 shadow rounded-box">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Accounts"}</th>
                        <th>{"ID"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.users.is_empty() {
                        <tr>
                            <td colspan="5" class="text-center text-gray-500">{"No users found"}</td>
                        </tr>
                    } else {
                        { for props.users.iter().enumerate().map(|(idx, user)| html! {
                            <tr key={user.id.clone()} class="hover">
                                <td>{idx + 1}</td>
                                <td class="font-medium">{&user.username}</td>
                                <td>{user.email_or_empty()}</td>
                                <td>
                                    <AccountsDropdown
                                        user={user.clone()}
                                        open={is_open(user)}
                                        on_toggle={props.on_toggle.clone()}
                                    />
                                </td>
                                <td><code>{&user.id}</code></td>
                            </tr>
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}
