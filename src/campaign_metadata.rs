use crate::shared_types::CampaignMetadata;
use chrono::NaiveDate;
use lazy_static::lazy_static;

lazy_static! {
    static ref CAMPAIGN_METADATA: CampaignMetadata = CampaignMetadata {
        campaign_name: "Alpina - Kéfir".to_string(),
        product: "Kéfir Alpina".to_string(),
        // Category list as declared in the campaign brief. It predates the
        // current rule table and does not line up with the labels the
        // classifier emits; reporting consumers have to reconcile the two.
        categories: vec![
            "Preguntas sobre el Producto".to_string(),
            "Comparación con Kéfir Casero/Artesanal".to_string(),
            "Ingredientes y Salud".to_string(),
            "Competencia y Disponibilidad".to_string(),
            "Opinión General del Producto".to_string(),
            "Fuera de Tema / No Relevante".to_string(),
            "Otros".to_string(),
        ],
        version: "1.0".to_string(),
        last_updated: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
    };
}

/// Returns an independent copy of the campaign record. Callers may mutate
/// their copy freely; the shared record never changes.
pub fn get_campaign_metadata() -> CampaignMetadata {
    CAMPAIGN_METADATA.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_are_equal_but_independent() {
        let mut first = get_campaign_metadata();
        let second = get_campaign_metadata();
        assert_eq!(first, second);

        first.categories.push("Categoría Inventada".to_string());
        first.version = "9.9".to_string();

        assert_ne!(first, second);
        assert_eq!(get_campaign_metadata(), second);
    }

    #[test]
    fn test_record_contents() {
        let meta = get_campaign_metadata();
        assert_eq!(meta.campaign_name, "Alpina - Kéfir");
        assert_eq!(meta.product, "Kéfir Alpina");
        assert_eq!(meta.categories.len(), 7);
        assert_eq!(meta.version, "1.0");
        assert_eq!(meta.last_updated, NaiveDate::from_ymd_opt(2025, 11, 20).unwrap());
    }

    #[test]
    fn test_serializes_with_iso_date() -> anyhow::Result<()> {
        let json = serde_json::to_value(get_campaign_metadata())?;
        assert_eq!(json["campaign_name"], "Alpina - Kéfir");
        assert_eq!(json["last_updated"], "2025-11-20");
        assert_eq!(json["categories"][0], "Preguntas sobre el Producto");

        let parsed: CampaignMetadata = serde_json::from_value(json)?;
        assert_eq!(parsed, get_campaign_metadata());
        Ok(())
    }
}
