// ============================================================================
// FORMAT - Fechas y precios tal y como los pinta la UI
// ============================================================================

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Parsea las fechas que manda el backend: RFC 3339 completo
/// ("2024-06-03T00:00:00.000Z") o fecha suelta ("2024-06-03").
pub fn parse_backend_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|ndt| Utc.from_utc_datetime(&ndt));
    }
    None
}

/// "Monday, 3 June 2024". Si la fecha no parsea se devuelve tal cual.
pub fn format_booking_date(raw: &str) -> String {
    match parse_backend_date(raw) {
        Some(dt) => format!("{}, {} {} {}", dt.format("%A"), dt.day(), dt.format("%B"), dt.year()),
        None => raw.to_string(),
    }
}

/// "Mon, Jun 3, 2024" para listados compactos.
pub fn format_short_date(raw: &str) -> String {
    match parse_backend_date(raw) {
        Some(dt) => format!("{}, {} {}, {}", dt.format("%a"), dt.format("%b"), dt.day(), dt.year()),
        None => raw.to_string(),
    }
}

/// Precio en rupias con agrupación india: ₹12,34,567 (últimos tres dígitos,
/// después grupos de dos). Los céntimos solo aparecen si no son cero.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(&whole.to_string()));
    if fraction != 0 {
        out.push_str(&format!(".{:02}", fraction));
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);

    let mut out = groups
        .iter()
        .rev()
        .cloned()
        .collect::<Vec<&str>>()
        .join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_timestamp_with_millis() {
        let dt = parse_backend_date("2024-06-03T00:00:00.000Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.day(), 3);
    }

    #[test]
    fn parses_plain_date_from_form_input() {
        let dt = parse_backend_date("2025-01-31").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 1, 31));
    }

    #[test]
    fn unparseable_dates_render_verbatim() {
        assert_eq!(format_booking_date("pronto"), "pronto");
    }

    #[test]
    fn formats_long_booking_date() {
        assert_eq!(format_booking_date("2024-06-03"), "Monday, 3 June 2024");
    }

    #[test]
    fn inr_uses_indian_grouping() {
        assert_eq!(format_inr(500.0), "₹500");
        assert_eq!(format_inr(1500.0), "₹1,500");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn inr_shows_cents_only_when_nonzero() {
        assert_eq!(format_inr(999.5), "₹999.50");
        assert_eq!(format_inr(-1200.0), "-₹1,200");
    }
}
