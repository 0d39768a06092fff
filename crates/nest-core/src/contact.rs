//! Agent contact deep links

use url::Url;

use crate::error::Result;
use crate::model::Property;

/// WhatsApp number of the DiasporaNest team
pub const TEAM_WHATSAPP: &str = "2348062558567";

/// Build a `wa.me` chat link with a pre-filled message
pub fn whatsapp_url(number: &str, message: &str) -> Result<String> {
    let base = Url::parse("https://wa.me/")?.join(number)?;
    Ok(format!("{base}?text={}", encode_uri_component(message)))
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Spaces become `%20`, not the `+` of form encoding.
fn encode_uri_component(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .map(|chunk| match chunk {
            "+" => "%20",
            "%21" => "!",
            "%27" => "'",
            "%28" => "(",
            "%29" => ")",
            "%7E" => "~",
            other => other,
        })
        .collect()
}

/// Chat link for a listing's agent; `None` when the agent has no WhatsApp
pub fn whatsapp_link(property: &Property) -> Option<String> {
    let number = property.agent.whatsapp.as_deref()?;
    let message = format!(
        "Hi, I'm interested in the property: {} in {}",
        property.title, property.location
    );

    match whatsapp_url(number, &message) {
        Ok(link) => Some(link),
        Err(e) => {
            tracing::warn!(property = %property.id, error = %e, "Invalid WhatsApp number");
            None
        }
    }
}

/// `tel:` link for a listing's agent
pub fn phone_link(property: &Property) -> Option<String> {
    property
        .agent
        .phone
        .as_deref()
        .map(|phone| format!("tel:{}", phone.replace(' ', "")))
}

/// Floating support-chat link on the landing page
pub fn team_whatsapp_link() -> String {
    format!("https://wa.me/{TEAM_WHATSAPP}")
}
