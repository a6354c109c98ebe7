//! Payments page — record and review payments against issued invoices.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::net::types::{Invoice, Payment, Role};
use crate::util::money::{format_cents, parse_dollars};

/// Only admins move money.
const ALLOWED: &[Role] = &[Role::Admin, Role::Admindev];

#[component]
pub fn PaymentsPage() -> impl IntoView {
    view! {
        <RequireRole allowed=ALLOWED>
            <PaymentsInner/>
        </RequireRole>
    }
}

#[component]
fn PaymentsInner() -> impl IntoView {
    let invoices = LocalResource::new(|| crate::net::api::fetch_invoices());

    // Invoice selected for payment history / recording.
    let selected = RwSignal::new(None::<Invoice>);
    let payments = LocalResource::new(move || {
        let picked = selected.get();
        async move {
            match picked {
                Some(inv) => crate::net::api::fetch_payments(&inv.id).await,
                None => Vec::new(),
            }
        }
    });

    let show_record = RwSignal::new(false);
    let on_cancel = Callback::new(move |_: ()| show_record.set(false));
    let on_recorded = Callback::new(move |_: ()| {
        show_record.set(false);
        invoices.refetch();
        payments.refetch();
    });

    view! {
        <div class="payments-page">
            <NavBar/>
            <main class="payments-page__body">
                <header class="page-header">
                    <h1>"Payments"</h1>
                </header>

                <Suspense fallback=move || view! { <p>"Loading invoices..."</p> }>
                    {move || {
                        invoices.get().map(|list| {
                            let open: Vec<Invoice> =
                                list.into_iter().filter(|inv| inv.status == "issued").collect();
                            if open.is_empty() {
                                view! { <p class="empty-state">"No issued invoices awaiting payment."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Description"</th>
                                                <th>"Amount"</th>
                                                <th>"Issued"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {open
                                                .into_iter()
                                                .map(|inv| {
                                                    let pick = inv.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{inv.description.clone()}</td>
                                                            <td class="data-table__amount">{format_cents(inv.amount_cents)}</td>
                                                            <td>{inv.issued_at.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                            <td class="data-table__actions">
                                                                <button
                                                                    class="btn btn--small btn--primary"
                                                                    on:click=move |_| {
                                                                        selected.set(Some(pick.clone()));
                                                                        show_record.set(true);
                                                                    }
                                                                >
                                                                    "Record payment"
                                                                </button>
                                                            </td>
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

                <Show when=move || selected.get().is_some()>
                    <section class="payments-page__history">
                        <h2>
                            {move || {
                                selected
                                    .get()
                                    .map(|inv| format!("Payments — {}", inv.description))
                                    .unwrap_or_default()
                            }}
                        </h2>
                        <Suspense fallback=move || view! { <p>"Loading payments..."</p> }>
                            {move || {
                                payments.get().map(|list: Vec<Payment>| {
                                    if list.is_empty() {
                                        view! { <p class="empty-state">"No payments recorded yet."</p> }.into_any()
                                    } else {
                                        view! {
                                            <ul class="payments-page__list">
                                                {list
                                                    .into_iter()
                                                    .map(|p| {
                                                        view! {
                                                            <li>
                                                                <span>{p.paid_at.clone()}</span>
                                                                <span>{format_cents(p.amount_cents)}</span>
                                                                <span>{p.method.clone()}</span>
                                                                <span>{p.reference.clone().unwrap_or_default()}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                        .into_any()
                                    }
                                })
                            }}
                        </Suspense>
                    </section>
                </Show>

                <Show when=move || show_record.get() && selected.get().is_some()>
                    <RecordPaymentDialog selected=selected on_cancel=on_cancel on_recorded=on_recorded/>
                </Show>
            </main>
        </div>
    }
}

/// Modal dialog for recording a payment against the selected invoice.
#[component]
fn RecordPaymentDialog(
    selected: RwSignal<Option<Invoice>>,
    on_cancel: Callback<()>,
    on_recorded: Callback<()>,
) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new("card".to_owned());
    let reference = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_: ()| {
        let Some(invoice) = selected.get_untracked() else {
            return;
        };
        let Some(amount_cents) = parse_dollars(&amount.get()) else {
            info.set("Enter an amount like 125.00".to_owned());
            return;
        };
        let method_value = method.get().trim().to_owned();
        if method_value.is_empty() {
            info.set("A payment method is required.".to_owned());
            return;
        }
        let reference_value = reference.get().trim().to_owned();

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let reference_opt = (!reference_value.is_empty()).then_some(reference_value);
                match crate::net::api::record_payment(
                    &invoice.id,
                    amount_cents,
                    &method_value,
                    reference_opt.as_deref(),
                )
                .await
                {
                    Ok(_) => on_recorded.run(()),
                    Err(e) => info.set(e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (invoice, amount_cents, method_value, reference_value);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Record Payment"</h2>
                <p class="dialog__context">
                    {move || {
                        selected
                            .get()
                            .map(|inv| format!("{} — {}", inv.description, format_cents(inv.amount_cents)))
                            .unwrap_or_default()
                    }}
                </p>
                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="125.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Method"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="card, cash, transfer"
                        prop:value=move || method.get()
                        on:input=move |ev| method.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Reference"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || reference.get()
                        on:input=move |ev| reference.set(event_target_value(&ev))
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
                        "Record"
                    </button>
                </div>
            </div>
        </div>
    }
}
