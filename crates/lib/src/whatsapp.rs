//! # WhatsApp Click-to-Chat Links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a `wa.me` link that opens a chat with `phone_e164` prefilled with `message`.
///
/// Every non-digit is stripped from the phone number.
pub fn wa_link(phone_e164: &str, message: &str) -> String {
    let phone: String = phone_e164.chars().filter(|c| c.is_ascii_digit()).collect();
    let text = utf8_percent_encode(message, URI_COMPONENT);
    format!("https://wa.me/{phone}?text={text}")
}
