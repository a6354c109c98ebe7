//! Account directory page — admin-only role administration.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::net::types::{Account, Role};

const ALLOWED: &[Role] = &[Role::Admin, Role::Admindev];

const ROLE_TAGS: &[&str] = &["client", "employee", "admin", "admindev"];

#[component]
pub fn AccountsPage() -> impl IntoView {
    view! {
        <RequireRole allowed=ALLOWED>
            <AccountsInner/>
        </RequireRole>
    }
}

#[component]
fn AccountsInner() -> impl IntoView {
    let accounts = LocalResource::new(|| crate::net::api::fetch_accounts());

    let change_role = move |id: String, role: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::update_account_role(&id, &role).await.is_ok() {
                    accounts.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, role);
        }
    };

    view! {
        <div class="accounts-page">
            <NavBar/>
            <main class="accounts-page__body">
                <header class="page-header">
                    <h1>"Accounts"</h1>
                </header>

                <Suspense fallback=move || view! { <p>"Loading accounts..."</p> }>
                    {move || {
                        accounts.get().map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Member since"</th>
                                            <th>"Role"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|account: Account| account_row(account, change_role))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

fn account_row(account: Account, change_role: impl Fn(String, String) + Copy + 'static) -> impl IntoView {
    let current = account.role.as_str();
    let id = account.id.clone();

    let options = ROLE_TAGS
        .iter()
        .map(|&tag| {
            let is_current = tag == current;
            view! {
                <option value=tag selected=is_current>
                    {tag}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <td>{account.name.clone()}</td>
            <td>{account.email.clone()}</td>
            <td>{account.member_since.clone()}</td>
            <td>
                <select
                    class="accounts-page__role"
                    on:change=move |ev| change_role(id.clone(), event_target_value(&ev))
                >
                    {options}
                </select>
            </td>
        </tr>
    }
}
