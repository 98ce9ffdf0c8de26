use serde::Serialize;
use serde_json::Value;

/// Body of a successful `/api/plan` response.
#[derive(Serialize, Debug)]
pub struct PlanResponse {
    pub ok: bool,
    pub plan: Value,
}

/// Body of a successful `/api/leads` response.
#[derive(Serialize, Debug)]
pub struct LeadResponse {
    pub ok: bool,
    pub received: Value,
}

#[derive(Serialize, Debug)]
pub struct OpeningHours {
    pub weekdays: String,
    pub sunday: String,
}

/// Body of the `/api/contact` response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub ok: bool,
    pub brand: String,
    pub phone: String,
    pub whatsapp_url: String,
    pub address: String,
    pub city: String,
    pub hours: OpeningHours,
}
