//! Booking view: inquiry form that opens a pre-filled WhatsApp chat.
//!
//! One-shot composition, no network call and no persistence. Fields that
//! cannot be read are treated as empty strings and submission proceeds.

use portfolio_site::BookingRequest;
use portfolio_site::booking::{CONTACT_EMAIL, SERVICE_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let service_ref = use_node_ref();
    let details_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let service_ref = service_ref.clone();
        let details_ref = details_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = BookingRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                service: service_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                details: details_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&request.whatsapp_url(), "_blank");
            }
        })
    };

    html! {
        <section class="section container booking-page">
            <div class="booking-grid">
                <div class="booking-info">
                    <span class="section-tagline">{ "Inquire" }</span>
                    <h1>{ "Let's Create Together" }</h1>
                    <p>
                        { "Please provide some details about your project, and we will get \
                           back to you within 24 hours." }
                    </p>
                    <div class="contact-details">
                        <div class="contact-item">
                            <strong>{ "Email" }</strong>
                            <span>{ CONTACT_EMAIL }</span>
                        </div>
                    </div>
                </div>
                <div class="booking-form-wrapper">
                    <form class="booking-form" id="booking-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label>{ "Full Name" }</label>
                                <input type="text" ref={name_ref} required=true placeholder="John Doe" />
                            </div>
                            <div class="form-group">
                                <label>{ "Email Address" }</label>
                                <input type="email" ref={email_ref} required=true placeholder="john@example.com" />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>{ "Service Type" }</label>
                            <select ref={service_ref}>
                                { for SERVICE_OPTIONS.iter().map(|service| html! {
                                    <option value={*service}>{ *service }</option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>{ "Project Details" }</label>
                            <textarea
                                ref={details_ref}
                                placeholder="Tell us about your vision..."
                                rows="4"
                            />
                        </div>
                        <button type="submit" class="btn-primary btn-block">{ "Send Inquiry" }</button>
                    </form>
                </div>
            </div>
        </section>
    }
}
