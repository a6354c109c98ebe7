//! Invoices page — billing list with staff create/issue/void actions.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::net::types::Invoice;
use crate::state::session::SessionState;
use crate::util::money::{format_cents, parse_dollars};

/// Billing page. Any signed-in user may open it: staff see every invoice,
/// clients only their own (the server scopes the listing).
#[component]
pub fn InvoicesPage() -> impl IntoView {
    view! {
        <RequireRole>
            <InvoicesInner/>
        </RequireRole>
    }
}

#[component]
fn InvoicesInner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let is_staff = move || session.get().user.is_some_and(|u| u.role.is_staff());
    let is_admin = move || session.get().user.is_some_and(|u| u.role.is_admin());

    let invoices = LocalResource::new(|| crate::net::api::fetch_invoices());

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |_: ()| show_create.set(false));

    let set_status = move |id: String, status: &'static str| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::update_invoice_status(&id, status).await.is_ok() {
                    invoices.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    view! {
        <div class="invoices-page">
            <NavBar/>
            <main class="invoices-page__body">
                <header class="page-header">
                    <h1>{move || if is_staff() { "Invoices" } else { "My Invoices" }}</h1>
                    <Show when=is_staff>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Invoice"
                        </button>
                    </Show>
                </header>

                <Suspense fallback=move || view! { <p>"Loading invoices..."</p> }>
                    {move || {
                        let staff = is_staff();
                        let admin = is_admin();
                        invoices.get().map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty-state">"No invoices yet."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Description"</th>
                                                <th>"Amount"</th>
                                                <th>"Status"</th>
                                                <th>"Issued"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|inv: Invoice| {
                                                    let is_draft = inv.status == "draft";
                                                    let is_voidable = matches!(inv.status.as_str(), "draft" | "issued");
                                                    let issue_button = (staff && is_draft).then(|| {
                                                        let id = inv.id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| set_status(id.clone(), "issued")
                                                            >
                                                                "Issue"
                                                            </button>
                                                        }
                                                    });
                                                    let void_button = (admin && is_voidable).then(|| {
                                                        let id = inv.id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| set_status(id.clone(), "void")
                                                            >
                                                                "Void"
                                                            </button>
                                                        }
                                                    });
                                                    view! {
                                                        <tr>
                                                            <td>{inv.description.clone()}</td>
                                                            <td class="data-table__amount">{format_cents(inv.amount_cents)}</td>
                                                            <td>
                                                                <span class=format!("status status--{}", inv.status)>
                                                                    {inv.status.clone()}
                                                                </span>
                                                            </td>
                                                            <td>{inv.issued_at.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                            <td class="data-table__actions">{issue_button}{void_button}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>

                <Show when=move || show_create.get()>
                    <CreateInvoiceDialog on_cancel=on_cancel invoices=invoices/>
                </Show>
            </main>
        </div>
    }
}

/// Modal dialog for creating a draft invoice.
#[component]
fn CreateInvoiceDialog(on_cancel: Callback<()>, invoices: LocalResource<Vec<Invoice>>) -> impl IntoView {
    let customer_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_: ()| {
        let customer_value = customer_id.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        let Some(amount_cents) = parse_dollars(&amount.get()) else {
            info.set("Enter an amount like 125.00".to_owned());
            return;
        };
        if customer_value.is_empty() || description_value.is_empty() {
            info.set("Customer and description are required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_invoice(&customer_value, &description_value, amount_cents).await {
                    Some(_) => {
                        invoices.refetch();
                        on_cancel.run(());
                    }
                    None => info.set("Creating the invoice failed.".to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (customer_value, description_value, amount_cents);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Invoice"</h2>
                <label class="dialog__label">
                    "Customer ID"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || customer_id.get()
                        on:input=move |ev| customer_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="125.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
