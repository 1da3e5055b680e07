//! Booking-inquiry composition.
//!
//! Submitting the booking form does not touch the network or the store; it
//! composes a pre-filled message and opens a WhatsApp deep link in a new
//! browsing context. `%0A` is the URL-encoded newline WhatsApp expects in
//! the `text` query parameter.

/// Studio contact address shown on the booking page.
pub const CONTACT_EMAIL: &str = "9teenvisuals25@gmail.com";

/// Service names offered by the booking form, in display order.
pub const SERVICE_OPTIONS: [&str; 3] = [
    "Portrait Photography",
    "Event Photography",
    "Baby Pictures",
];

const WHATSAPP_NUMBER: &str = "2349068623153";

/// One booking inquiry as read from the form. Missing fields are empty
/// strings; composition proceeds regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub details: String,
}

impl BookingRequest {
    /// The pre-filled message body: greeting and name, then service, then
    /// project details, then the sender's email.
    pub fn message(&self) -> String {
        format!(
            "Hello 9teen Visuals! My name is {}.%0A%0AI'm interested in: {}%0A%0AProject Details: {}%0A%0AMy Email: {}",
            self.name, self.service, self.details, self.email
        )
    }

    /// Deep link that opens a WhatsApp chat pre-filled with [`Self::message`].
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{WHATSAPP_NUMBER}?text={}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_all_fields_in_template_order() {
        let request = BookingRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            service: "Event Photography".to_string(),
            details: "Outdoor".to_string(),
        };
        let message = request.message();

        let name_at = message.find("Jane").unwrap();
        let service_at = message.find("Event Photography").unwrap();
        let details_at = message.find("Outdoor").unwrap();
        let email_at = message.find("jane@x.com").unwrap();
        assert!(name_at < service_at);
        assert!(service_at < details_at);
        assert!(details_at < email_at);
    }

    #[test]
    fn empty_fields_still_compose() {
        let message = BookingRequest::default().message();
        assert!(message.starts_with("Hello 9teen Visuals!"));
        assert!(message.contains("I'm interested in: %0A"));
    }

    #[test]
    fn deep_link_targets_whatsapp() {
        let request = BookingRequest {
            name: "Jane".to_string(),
            ..BookingRequest::default()
        };
        let url = request.whatsapp_url();
        assert!(url.starts_with("https://wa.me/"));
        assert!(url.contains("?text=Hello"));
    }
}
