use crate::shared_types::{Rule, Topic};
use lazy_static::lazy_static;
use regex::Regex;

/// Pattern source for one rule group, kept as plain data so groups can be
/// added, reordered, or tested individually without touching scan logic.
struct RuleSource {
    topic: Topic,
    pattern: &'static str,
}

/// Rule table for the "Superioridad Láctea / Nutrición" campaign, in priority
/// order. Earlier groups win when a comment matches several.
///
/// Short ambiguous tokens ("ia", "precio") carry `\b` anchors so they do not
/// fire inside unrelated words; longer low-collision fragments are left
/// unanchored. Lowercasing does not fold accents, so accented variants are
/// spelled out (`animaci[oó]n`, `az[uú]car`).
const RULE_SOURCES: &[RuleSource] = &[
    RuleSource {
        topic: Topic::AiAdvertisingCritique,
        pattern: concat!(
            r"\bia\b|inteligencia artificial|animaci[oó]n.*ia|",
            r"hecho con ia|generado|ia.*barata|ia.*mala|",
            r"dejen.*ia|no.*ia|usando ia|anuncio.*ia|publicidad.*ia|",
            r"contratar.*profesional|contratar.*artista|",
            r"paguen.*animador|equipo creativo|",
            r"ahorrar.*comunicar|pereza.*ia|mal.*ia|",
            r"cred[íi]tos.*ia|le puso ia|lo hicieron con ia",
        ),
    },
    RuleSource {
        topic: Topic::PriceBrandValue,
        pattern: concat!(
            r"\bprecio\b|cu[aá]nto vale|valor|caro|cobran|",
            r"baj[ea]n?\s+el\s+precio|inviertan|invierten|",
            r"plata que tiene|tienen para pagar|no les alcanz",
        ),
    },
    RuleSource {
        topic: Topic::BrandNostalgia,
        pattern: concat!(
            r"osito|antes era|ya no es|como antes|",
            r"alpinista|patrimonio|traici[oó]n|generaciones|",
            r"marca favorita|de toda la vida|recuerdo|nostalgia",
        ),
    },
    RuleSource {
        topic: Topic::CreativeQualityCritique,
        pattern: concat!(
            r"publicidad.*mala|mala.*publicidad|mal.*comercial|",
            r"hecho con las patas|babosada|mediocr|",
            r"calidad.*publicidad|publicidad.*barata|",
            r"publicidad.*perversa|emocional.*octagon|evita.*octagon|",
            r"no vale la pena|horrible|est[aá] feo|así no",
        ),
    },
    RuleSource {
        topic: Topic::NutritionalWarningLabels,
        pattern: concat!(
            r"octagon|advertencia|sello|sellos|sodio|az[uú]car|",
            r"exceso.*sodio|exceso.*az[uú]car|no muestra|ocultan",
        ),
    },
    RuleSource {
        topic: Topic::PositiveProductOpinion,
        pattern: concat!(
            r"rico|bueno|excelente|gusta|mejor|delicioso|espectacular|",
            r"encanta|s[úu]per|amor|amoooo|fant[aá]stico|",
            r"disfruta|productos.*buenos|me gusta alpina|",
            r"la quiero|la amo|gran ejemplo",
        ),
    },
    RuleSource {
        topic: Topic::NegativeProductOpinion,
        pattern: concat!(
            r"feo|horrible|mal[ií]simo|sabe mal|asco|",
            r"decepci[oó]n|peor empresa|no compro|",
            r"ya no como|se me quit[oó].*ganas|no quiero",
        ),
    },
    RuleSource {
        topic: Topic::ProductQuestion,
        pattern: concat!(
            r"d[oó]nde comprar|c[oó]mo consigo|duda|pregunta|",
            r"tiendas|disponible|sirve para|c[oó]mo se toma|",
            r"tiene az[uú]car|qu[eé] es|para qu[eé] sirve",
        ),
    },
    RuleSource {
        topic: Topic::AiLaborImpact,
        pattern: concat!(
            r"quita.*trabajo|trabajo.*ia|empleo|",
            r"ram|servidores|agua.*servidores|costos.*ia|",
            r"reducir costos|tecnolog[ií]a.*trabajo",
        ),
    },
    RuleSource {
        topic: Topic::OffTopic,
        pattern: concat!(
            r"am[eé]n|jajaja|receta|bendiciones|🇲🇽|",
            r"abelardo|sticker|saludos desde|therias|sapa yo",
        ),
    },
];

lazy_static! {
    static ref DEFAULT_RULES: Vec<Rule> = RULE_SOURCES
        .iter()
        .map(|src| Rule::new(src.topic, Regex::new(src.pattern).unwrap()))
        .collect();
}

/// Compiled campaign rule table, in priority order.
pub fn default_rules() -> Vec<Rule> {
    DEFAULT_RULES.clone()
}
