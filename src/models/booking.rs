use serde::{Deserialize, Serialize};

use crate::utils::format::parse_backend_date;

/// Estado de una reserva en el backend (en mayúsculas en el wire).
/// Los valores desconocidos se conservan tal cual en vez de romper el parse.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Unknown(String),
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => BookingStatus::Pending,
            "ACCEPTED" => BookingStatus::Accepted,
            "REJECTED" => BookingStatus::Rejected,
            "COMPLETED" => BookingStatus::Completed,
            _ => BookingStatus::Unknown(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => "PENDING".to_string(),
            BookingStatus::Accepted => "ACCEPTED".to_string(),
            BookingStatus::Rejected => "REJECTED".to_string(),
            BookingStatus::Completed => "COMPLETED".to_string(),
            BookingStatus::Unknown(raw) => raw,
        }
    }
}

impl BookingStatus {
    pub fn label(&self) -> String {
        match self {
            BookingStatus::Pending => "Pending".to_string(),
            BookingStatus::Accepted => "Accepted".to_string(),
            BookingStatus::Rejected => "Rejected".to_string(),
            BookingStatus::Completed => "Completed".to_string(),
            BookingStatus::Unknown(raw) => raw.clone(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Unknown(_) => "unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "⏳",
            BookingStatus::Accepted => "✅",
            BookingStatus::Rejected => "❌",
            BookingStatus::Completed => "🎉",
            BookingStatus::Unknown(_) => "📌",
        }
    }
}

/// Proyección del fotógrafo incrustada en las reservas del cliente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingPhotographer {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CustomerRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ServiceRef {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reserva tal y como la devuelve el backend. Las distintas rutas rellenan
/// subconjuntos distintos de campos, de ahí tanto Option.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub photographer: Option<BookingPhotographer>,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub service: Option<ServiceRef>,
    #[serde(default)]
    pub service_title: Option<String>,
    #[serde(default)]
    pub service_price: Option<f64>,
    #[serde(default)]
    pub booking_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn customer_display_name(&self) -> String {
        self.customer
            .as_ref()
            .and_then(|c| c.name.clone())
            .or_else(|| self.customer_name.clone())
            .unwrap_or_else(|| "Unknown Customer".to_string())
    }

    pub fn service_display(&self) -> String {
        self.service
            .as_ref()
            .and_then(|s| s.title.clone().or_else(|| s.name.clone()))
            .or_else(|| self.service_title.clone())
            .unwrap_or_else(|| "Photography Service".to_string())
    }

    /// Estado tal y como lo agrupa el panel del fotógrafo: todo lo que no
    /// está aceptado ni rechazado cuenta como pendiente.
    pub fn panel_status(&self) -> BookingStatus {
        match self.status {
            BookingStatus::Accepted => BookingStatus::Accepted,
            BookingStatus::Rejected => BookingStatus::Rejected,
            _ => BookingStatus::Pending,
        }
    }
}

/// Orden de listado: reservas más recientes primero. Las fechas que no
/// parsean se van al final.
pub fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by_key(|b| {
        std::cmp::Reverse(
            parse_backend_date(&b.booking_date)
                .map(|d| d.timestamp())
                .unwrap_or(i64::MIN),
        )
    });
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub photographer_id: String,
    pub service_title: String,
    pub service_price: f64,
    pub booking_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusUpdateRequest {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            photographer: None,
            customer: None,
            customer_name: None,
            service: None,
            service_title: None,
            service_price: None,
            booking_date: date.to_string(),
            location: None,
            note: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn status_parses_any_case() {
        assert_eq!(BookingStatus::from("pending".to_string()), BookingStatus::Pending);
        assert_eq!(BookingStatus::from("ACCEPTED".to_string()), BookingStatus::Accepted);
        assert_eq!(BookingStatus::from(" Rejected ".to_string()), BookingStatus::Rejected);
    }

    #[test]
    fn unknown_status_survives_round_trip() {
        let status = BookingStatus::from("ON_HOLD".to_string());
        assert_eq!(status, BookingStatus::Unknown("ON_HOLD".to_string()));
        assert_eq!(String::from(status.clone()), "ON_HOLD");
        assert_eq!(status.label(), "ON_HOLD");
    }

    #[test]
    fn status_serializes_uppercase_for_the_wire() {
        let request = StatusUpdateRequest { status: BookingStatus::Accepted };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"status":"ACCEPTED"}"#);
    }

    #[test]
    fn newest_bookings_come_first() {
        let mut list = vec![
            booking("a", "2024-01-01", BookingStatus::Pending),
            booking("b", "2024-06-01T10:00:00.000Z", BookingStatus::Pending),
            booking("c", "basura", BookingStatus::Pending),
            booking("d", "2024-03-15", BookingStatus::Accepted),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<&str> = list.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn display_names_fall_back_in_order() {
        let mut b = booking("x", "2024-01-01", BookingStatus::Pending);
        assert_eq!(b.customer_display_name(), "Unknown Customer");
        assert_eq!(b.service_display(), "Photography Service");

        b.customer_name = Some("Ravi".to_string());
        assert_eq!(b.customer_display_name(), "Ravi");

        b.customer = Some(CustomerRef { name: Some("Ravi K.".to_string()) });
        assert_eq!(b.customer_display_name(), "Ravi K.");

        b.service_title = Some("Wedding".to_string());
        assert_eq!(b.service_display(), "Wedding");
        b.service = Some(ServiceRef { title: None, name: Some("Wedding Deluxe".to_string()) });
        assert_eq!(b.service_display(), "Wedding Deluxe");
    }

    #[test]
    fn completed_counts_as_pending_in_the_panel() {
        let b = booking("x", "2024-01-01", BookingStatus::Completed);
        assert_eq!(b.panel_status(), BookingStatus::Pending);
    }

    #[test]
    fn booking_deserializes_customer_payload() {
        let raw = r#"{
            "_id": "bk1",
            "photographer": {"_id": "ph1", "name": "Lens Studio", "city": "Pune", "coverImage": null},
            "serviceTitle": "Portrait",
            "servicePrice": 2500,
            "bookingDate": "2024-06-03T00:00:00.000Z",
            "note": "terraza",
            "status": "PENDING",
            "createdAt": "2024-05-30T12:00:00.000Z"
        }"#;
        let b: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(b.id, "bk1");
        assert_eq!(b.photographer.as_ref().unwrap().name, "Lens Studio");
        assert_eq!(b.service_price, Some(2500.0));
        assert_eq!(b.status, BookingStatus::Pending);
    }
}
