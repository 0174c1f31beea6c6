use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Service {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// Paquete de precios: "hourly", "per-day" o "custom".
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PricePackage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Category {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Perfil de fotógrafo. Cada endpoint rellena un subconjunto distinto
/// (listado, detalle, perfil completo, perfil propio), así que todos los
/// campos toleran ausencia.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub price_packages: Vec<PricePackage>,
    #[serde(default)]
    pub portfolio_images: Vec<String>,
}

impl Photographer {
    /// Filtro de búsqueda del listado: nombre, ciudad o categoría,
    /// sin distinguir mayúsculas. Campos vacíos no rompen nada.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        [&self.name, &self.city, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&q))
    }

    pub fn about(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else {
            &self.bio
        }
    }

    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }
}

/// GET /api/photographers/:id/full-profile envuelve el perfil.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct FullProfileResponse {
    #[serde(default)]
    pub photographer: Option<Photographer>,
}

/// Body de POST /api/photographers/profile.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub cover_image: String,
    pub city: String,
    pub experience: u32,
    pub bio: String,
    pub available: bool,
    pub services: Vec<Service>,
}

/// Body de PUT /api/photographers/profile/full.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FullProfileUpdateRequest {
    pub name: String,
    pub city: String,
    pub bio: String,
    pub experience: u32,
    pub available: bool,
    pub categories: Vec<String>,
    pub services: Vec<Service>,
    pub price_packages: Vec<PricePackage>,
    pub portfolio_images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photographer(name: &str, city: &str, category: &str) -> Photographer {
        Photographer {
            name: name.to_string(),
            city: city.to_string(),
            category: category.to_string(),
            ..Photographer::default()
        }
    }

    #[test]
    fn query_matches_name_city_or_category() {
        let p = photographer("Lens Studio", "Bhilai", "Wedding");
        assert!(p.matches_query("lens"));
        assert!(p.matches_query("BHILAI"));
        assert!(p.matches_query("wed"));
        assert!(!p.matches_query("baby shoot"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let p = photographer("", "", "");
        assert!(p.matches_query(""));
        assert!(p.matches_query("   "));
    }

    #[test]
    fn missing_fields_do_not_break_the_filter() {
        // Proyección mínima del listado, sin categoría ni ciudad
        let p = photographer("Solo Nombre", "", "");
        assert!(p.matches_query("solo"));
        assert!(!p.matches_query("pune"));
    }

    #[test]
    fn price_package_maps_the_type_field() {
        let pkg: PricePackage =
            serde_json::from_str(r#"{"type":"per-day","amount":8000,"description":"Jornada"}"#)
                .unwrap();
        assert_eq!(pkg.kind, "per-day");
        let json = serde_json::to_string(&pkg).unwrap();
        assert!(json.contains("\"type\":\"per-day\""));
    }

    #[test]
    fn profile_deserializes_listing_projection() {
        let raw = r#"{"_id":"ph1","name":"Lens Studio","city":"Pune","category":"Wedding",
                      "price":5000,"rating":4.7,"coverImage":"https://cdn/x.jpg"}"#;
        let p: Photographer = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, "ph1");
        assert_eq!(p.rating, 4.7);
        assert!(p.services.is_empty());
        assert!(p.is_available());
    }
}
