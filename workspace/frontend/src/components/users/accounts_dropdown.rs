use chrono::{DateTime, Utc};
use common::{Account, User, UserId};
use yew::prelude::*;

use crate::hooks::dropdown_element_id;

#[derive(Properties, PartialEq)]
pub struct AccountsDropdownProps {
    pub user: User,
    pub open: bool,
    pub on_toggle: Callback<UserId>,
}

/// "Accounts (n)" button with the account list underneath when open.
///
/// The wrapper carries `dropdown-{id}` so document listeners can tell
/// clicks inside the menu from clicks elsewhere.
#[function_component(AccountsDropdown)]
pub fn accounts_dropdown(props: &AccountsDropdownProps) -> Html {
    let user = &props.user;
    let count = user.accounts.len();

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let user_id = user.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(user_id.clone()))
    };

    html! {
        <div class="relative inline-block" id={dropdown_element_id(&user.id)}>
            <button
                class="btn btn-sm btn-outline"
                aria-expanded={props.open.to_string()}
                disabled={!user.has_accounts()}
                {onclick}
            >
                {format!("Accounts ({})", count)}
            </button>
            if props.open && user.has_accounts() {
                <div
                    class="absolute z-10 mt-2 w-80 rounded-box bg-base-100 p-2 shadow-lg"
                    role="menu"
                    aria-label={format!("Accounts for {}", user.username)}
                >
                    { for user.accounts.iter().map(account_item) }
                </div>
            }
        </div>
    }
}

fn account_item(account: &Account) -> Html {
    html! {
        <div key={account.id.clone()} class="border-b border-base-200 p-2 text-sm last:border-b-0">
            <div class="font-semibold">{&account.bank_name}</div>
            <div>{"Account: "}<code>{&account.account_number}</code></div>
            <div>{"Holder: "}{&account.account_holder_name}</div>
            <div>{"IFSC: "}{&account.ifsc_code}</div>
            <div>{"Branch: "}{&account.branch_name}</div>
            if let Some(created) = &account.created_at {
                <div class="text-xs text-gray-500">{format!("Added {}", format_date(created))}</div>
            }
        </div>
    }
}

fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
