//! # Shared Constants
//!
//! Brand defaults shared by the library and the server. The server can
//! override each of them through configuration.

/// The gym's display name.
pub const BRAND_NAME: &str = "Fitness Hub";

/// WhatsApp number: country code followed by the subscriber number, digits only.
pub const DEFAULT_PHONE_E164: &str = "919999999999";

pub const DEFAULT_CITY_LINE: &str = "Your City, India";

pub const DEFAULT_ADDRESS_LINE: &str = "Your full address here";

pub const DEFAULT_WEEKDAY_HOURS: &str = "Mon–Sat: 6:00 AM – 10:00 PM";

pub const DEFAULT_SUNDAY_HOURS: &str = "Sun: 7:00 AM – 12:00 PM";

/// The message prefilled in the WhatsApp chat.
pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Hi Fitness Hub, I want a free trial. My goal is _____. Preferred time: _____.";
