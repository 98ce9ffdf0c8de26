use crate::{
    state::AppState,
    types::{ContactResponse, OpeningHours},
};
use axum::{extract::State, Json};
use fithub::whatsapp::wa_link;

/// Returns the gym's contact details and a prefilled WhatsApp link.
pub async fn contact_handler(State(app_state): State<AppState>) -> Json<ContactResponse> {
    let brand = &app_state.config.brand;
    Json(ContactResponse {
        ok: true,
        brand: brand.name.clone(),
        phone: brand.phone_e164.clone(),
        whatsapp_url: wa_link(&brand.phone_e164, &brand.whatsapp_message),
        address: brand.address_line.clone(),
        city: brand.city_line.clone(),
        hours: OpeningHours {
            weekdays: brand.weekday_hours.clone(),
            sunday: brand.sunday_hours.clone(),
        },
    })
}
