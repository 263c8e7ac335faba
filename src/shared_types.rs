use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of topic labels a comment can be assigned to.
///
/// The first ten variants correspond to the campaign rule groups in priority
/// order; `Other` is the fallback when no group matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    AiAdvertisingCritique,
    PriceBrandValue,
    BrandNostalgia,
    CreativeQualityCritique,
    NutritionalWarningLabels,
    PositiveProductOpinion,
    NegativeProductOpinion,
    ProductQuestion,
    AiLaborImpact,
    OffTopic,
    Other,
}

impl Topic {
    /// Report label as it appears in campaign dashboards (Spanish).
    pub fn label(&self) -> &'static str {
        match self {
            Topic::AiAdvertisingCritique => "Crítica al Uso de IA en Publicidad",
            Topic::PriceBrandValue => "Precio y Valor de Marca",
            Topic::BrandNostalgia => "Nostalgia e Identidad de Marca",
            Topic::CreativeQualityCritique => "Crítica a la Calidad Publicitaria",
            Topic::NutritionalWarningLabels => "Octágonos y Advertencias Nutricionales",
            Topic::PositiveProductOpinion => "Opinión Positiva del Producto / Marca",
            Topic::NegativeProductOpinion => "Opinión Negativa del Producto / Marca",
            Topic::ProductQuestion => "Preguntas sobre el Producto",
            Topic::AiLaborImpact => "Impacto de IA en Empleo y Economía",
            Topic::OffTopic => "Fuera de Tema / No Relevante",
            Topic::Other => "Otros",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rule group: a compiled alternation of keyword fragments tied to the
/// topic it assigns. Rules are evaluated in sequence order, first match wins.
#[derive(Debug, Clone)]
pub struct Rule {
    pub topic: Topic,
    pub pattern: Regex,
}

impl Rule {
    pub fn new(topic: Topic, pattern: Regex) -> Self {
        Rule { topic, pattern }
    }
}

/// Static descriptor of the campaign this crate is configured for.
///
/// Consumed by reporting pipelines only; the classifier never reads it. The
/// `categories` list comes from the campaign brief and is not guaranteed to
/// match the labels `classify` actually produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignMetadata {
    pub campaign_name: String,
    pub product: String,
    pub categories: Vec<String>,
    pub version: String,
    pub last_updated: NaiveDate,
}
