//! Appointments page — schedule list with booking and staff status actions.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::net::types::Appointment;
use crate::state::session::SessionState;

/// Scheduling page. Clients see and book their own appointments; staff see
/// the full schedule and drive the status lifecycle.
#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <RequireRole>
            <AppointmentsInner/>
        </RequireRole>
    }
}

#[component]
fn AppointmentsInner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let is_staff = move || session.get().user.is_some_and(|u| u.role.is_staff());

    let appointments = LocalResource::new(|| crate::net::api::fetch_appointments());

    let show_book = RwSignal::new(false);
    let on_cancel = Callback::new(move |_: ()| show_book.set(false));

    let set_status = move |id: String, status: &'static str| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::update_appointment_status(&id, status).await.is_ok() {
                    appointments.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    view! {
        <div class="appointments-page">
            <NavBar/>
            <main class="appointments-page__body">
                <header class="page-header">
                    <h1>{move || if is_staff() { "Schedule" } else { "My Appointments" }}</h1>
                    <button class="btn btn--primary" on:click=move |_| show_book.set(true)>
                        "+ Book Appointment"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p>"Loading appointments..."</p> }>
                    {move || {
                        let staff = is_staff();
                        appointments.get().map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty-state">"Nothing scheduled."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"When"</th>
                                                <th>"Vehicle"</th>
                                                <th>"Notes"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|appt: Appointment| appointment_row(appt, staff, set_status))
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>

                <Show when=move || show_book.get()>
                    <BookAppointmentDialog on_cancel=on_cancel appointments=appointments/>
                </Show>
            </main>
        </div>
    }
}

fn appointment_row(appt: Appointment, staff: bool, set_status: impl Fn(String, &'static str) + Copy + 'static) -> impl IntoView {
    // Staff drive the lifecycle; the legal next steps depend on the state.
    let next_steps: &[(&'static str, &'static str)] = match appt.status.as_str() {
        "requested" if staff => &[("Confirm", "confirmed"), ("Cancel", "cancelled")],
        "confirmed" if staff => &[("Complete", "completed"), ("Cancel", "cancelled")],
        _ => &[],
    };

    let actions = next_steps
        .iter()
        .map(|&(label, to)| {
            let id = appt.id.clone();
            view! {
                <button class="btn btn--small" on:click=move |_| set_status(id.clone(), to)>
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <td>{appt.scheduled_at.clone()}</td>
            <td>{appt.vehicle.clone()}</td>
            <td>{appt.notes.clone().unwrap_or_default()}</td>
            <td>
                <span class=format!("status status--{}", appt.status)>{appt.status.clone()}</span>
            </td>
            <td class="data-table__actions">{actions}</td>
        </tr>
    }
}

/// Modal dialog for booking a workshop appointment.
#[component]
fn BookAppointmentDialog(on_cancel: Callback<()>, appointments: LocalResource<Vec<Appointment>>) -> impl IntoView {
    let vehicle = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let scheduled_at = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_: ()| {
        let vehicle_value = vehicle.get().trim().to_owned();
        let when_value = scheduled_at.get().trim().to_owned();
        let notes_value = notes.get().trim().to_owned();
        if vehicle_value.is_empty() || when_value.is_empty() {
            info.set("Vehicle and time are required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let notes_opt = (!notes_value.is_empty()).then_some(notes_value);
                match crate::net::api::create_appointment(&vehicle_value, notes_opt.as_deref(), &when_value).await {
                    Some(_) => {
                        appointments.refetch();
                        on_cancel.run(());
                    }
                    None => info.set("Booking failed. Check the time format.".to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (vehicle_value, when_value, notes_value);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Book Appointment"</h2>
                <label class="dialog__label">
                    "Vehicle"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="2019 Corolla"
                        prop:value=move || vehicle.get()
                        on:input=move |ev| vehicle.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "When"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        prop:value=move || scheduled_at.get()
                        on:input=move |ev| scheduled_at.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Notes"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Rattle when braking"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
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
                        "Book"
                    </button>
                </div>
            </div>
        </div>
    }
}
