use std::sync::Arc;

use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html::Div,
    prelude::*,
    task::spawn_local,
};

use crate::contact::{
    ContactForm, ContactTransport, Field, FormError, SimulatedTransport, SubmitError, SubmitStatus,
};
use crate::content::CONTENT;
use crate::nav::Section;

use super::entrance::{entrance_class, use_entrance};
use super::hero::SocialLinks;
use super::TransportContext;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-800/50 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-cyan-400 transition-colors duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    let info = &CONTENT.personal;
    let content_ref = NodeRef::<Div>::new();
    let entered = use_entrance(content_ref);

    let transport: Arc<dyn ContactTransport> = use_context::<TransportContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(SimulatedTransport::default()));
    let transport = StoredValue::new(transport);
    let (form, set_form) = signal(ContactForm::default());
    let (invalid, set_invalid) = signal(None::<FormError>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match set_form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                set_invalid.set(Some(e));
                return;
            }
            None => return,
        };
        set_invalid.set(None);
        let delivery = transport.with_value(|t| t.send(message));
        spawn_local(async move {
            finish_submission(set_form, delivery.await);
        });
    };

    let details = [
        ("📧", "Email", info.email.as_str(), "from-cyan-400 to-blue-600"),
        ("📱", "Phone", info.phone.as_str(), "from-green-400 to-teal-600"),
        ("📍", "Location", info.location.as_str(), "from-purple-400 to-pink-600"),
    ];

    view! {
        <section id=Section::Contact.id() class="py-20 relative">
            <div class="max-w-6xl mx-auto px-4">
                <div node_ref=content_ref class=move || entrance_class(entered.get(), "")>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">
                            <span class="bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-transparent">
                                "Get In Touch"
                            </span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-600 mx-auto mb-6"></div>
                        <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                            "Have a project in mind or just want to say hello? I'd love to hear from you!"
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-2xl font-bold mb-6 text-cyan-400">
                                    "Contact Information"
                                </h3>
                                <div class="space-y-4">
                                    {details
                                        .into_iter()
                                        .map(|(icon, label, value, gradient)| {
                                            view! {
                                                <div class="flex items-center space-x-4 p-4 bg-gray-800/50 rounded-lg backdrop-blur-sm border border-gray-700 hover:border-cyan-400 transition-colors duration-300">
                                                    <div class=format!(
                                                        "w-12 h-12 bg-gradient-to-br {gradient} rounded-full flex items-center justify-center text-white font-bold",
                                                    )>{icon}</div>
                                                    <div>
                                                        <p class="text-gray-400 text-sm">{label}</p>
                                                        <p class="font-medium">{value}</p>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div>
                                <h3 class="text-2xl font-bold mb-6 text-cyan-400">"Follow Me"</h3>
                                <SocialLinks class="w-12 h-12 rounded-full bg-gray-800/50 flex items-center justify-center text-gray-400 hover:text-white hover:bg-cyan-500 transition-all duration-300 transform hover:scale-110 border border-gray-700 hover:border-cyan-400" />
                            </div>
                        </div>

                        <div>
                            <h3 class="text-2xl font-bold mb-6 text-cyan-400">"Send Message"</h3>
                            <form on:submit=on_submit class="space-y-6">
                                <div class="grid md:grid-cols-2 gap-4">
                                    <FormInput field=Field::Name form set_form />
                                    <FormInput field=Field::Email form set_form />
                                </div>
                                <FormInput field=Field::Subject form set_form />
                                <FormInput field=Field::Message form set_form />

                                <button
                                    type="submit"
                                    disabled=move || form.with(ContactForm::is_pending)
                                    class="w-full px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-semibold hover:from-cyan-400 hover:to-blue-500 transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed"
                                >
                                    {move || {
                                        if form.with(ContactForm::is_pending) {
                                            "Sending..."
                                        } else {
                                            "Send Message"
                                        }
                                    }}
                                </button>

                                {move || {
                                    invalid
                                        .get()
                                        .map(|e| {
                                            view! { <p class="text-yellow-400 text-center">{e.to_string()}</p> }
                                        })
                                }}
                                {move || {
                                    let status = form.with(ContactForm::status);
                                    status
                                        .message()
                                        .map(|msg| {
                                            let class = if status == SubmitStatus::Success {
                                                "text-green-400 text-center"
                                            } else {
                                                "text-red-400 text-center"
                                            };
                                            view! { <p class=class>{msg}</p> }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Applies a finished delivery to the form.
///
/// Returns `false` when nothing changed, either because the section was torn
/// down while the message was in flight or because no submission was pending.
fn finish_submission(set_form: WriteSignal<ContactForm>, res: Result<(), SubmitError>) -> bool {
    match set_form.try_update(|f| f.complete(res)) {
        Some(applied) => applied,
        None => {
            log::debug!("contact form dropped before submission finished");
            false
        }
    }
}

#[component]
fn FormInput(
    field: Field,
    form: ReadSignal<ContactForm>,
    set_form: WriteSignal<ContactForm>,
) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev: Event| set_form.update(|f| f.set_field(field, event_target_value(&ev)));

    view! {
        <div>
            <label for=field.name() class="block text-gray-400 text-sm font-medium mb-2">
                {field.label()}
            </label>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=field.name()
                                name=field.name()
                                required=true
                                rows="6"
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=on_input
                                class=format!("{INPUT_CLASS} resize-none")
                            ></textarea>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <input
                                id=field.name()
                                name=field.name()
                                type=if field == Field::Email { "email" } else { "text" }
                                required=true
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=on_input
                                class=INPUT_CLASS
                            />
                        },
                    )
                }
            }}
        </div>
    }
}
