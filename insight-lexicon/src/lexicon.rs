//! Per-axis term lists. The built-in lists are the Spanish keywords the
//! review corpus is written in.

use insight_core::config::{AxisTerms, LexiconConfig};
use insight_core::models::Axis;

const TEACHING_QUALITY_POSITIVE: &[&str] = &[
    "explica bien",
    "domina",
    "claro",
    "enseña bien",
    "didáctico",
    "buen profesor",
    "excelente",
    "aprend",
    "entend",
    "conocimiento",
    "profesional",
    "preparado",
    "sabe",
    "materia",
    "ejemplos",
];

const TEACHING_QUALITY_NEGATIVE: &[&str] = &[
    "no explica",
    "confuso",
    "desorganizado",
    "mal profesor",
    "no enseña",
    "aburrido",
    "monótono",
    "no se entiende",
    "perdido",
    "no domina",
    "improvisado",
];

const EVALUATION_METHOD_POSITIVE: &[&str] = &[
    "justo",
    "fair",
    "razonable",
    "equilibrado",
    "bien evaluado",
    "examenes justos",
    "calificación justa",
    "objetivo",
    "clara evaluación",
    "criterios claros",
];

const EVALUATION_METHOD_NEGATIVE: &[&str] = &[
    "difícil",
    "exigente",
    "reprobar",
    "injusto",
    "arbitrario",
    "exámenes imposibles",
    "mucha tarea",
    "carga excesiva",
    "evalúa mal",
    "subjetivo",
    "estricto",
    "duro",
];

const EMPATHY_POSITIVE: &[&str] = &[
    "comprensivo",
    "accesible",
    "ayuda",
    "amable",
    "paciente",
    "disponible",
    "empático",
    "buena persona",
    "resuelve dudas",
    "atento",
    "flexible",
    "humano",
    "considerado",
];

const EMPATHY_NEGATIVE: &[&str] = &[
    "grosero",
    "déspota",
    "inaccesible",
    "no ayuda",
    "antipático",
    "prepotente",
    "soberbio",
    "no resuelve dudas",
    "inflexible",
    "no le importa",
    "arrogante",
    "mal trato",
];

/// Positive and negative signal terms for one axis, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl AxisLexicon {
    /// Build from arbitrary term lists. Terms are lowercased; blank terms and
    /// repeats within a list are dropped so each term counts at most once.
    pub fn new<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            positive: normalize_terms(positive),
            negative: normalize_terms(negative),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }
}

impl From<&AxisTerms> for AxisLexicon {
    fn from(terms: &AxisTerms) -> Self {
        Self::new(&terms.positive, &terms.negative)
    }
}

fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

/// Term lists for all three axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    teaching_quality: AxisLexicon,
    evaluation_method: AxisLexicon,
    empathy: AxisLexicon,
}

impl Lexicon {
    /// Start from the built-in lists and replace axes selectively.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder {
            lexicon: Self::default(),
        }
    }

    /// Built-in lists with any overrides from configuration applied.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut builder = Self::builder();
        for axis in Axis::ALL {
            if let Some(terms) = config.override_for(axis) {
                builder = builder.axis(axis, AxisLexicon::from(terms));
            }
        }
        builder.build()
    }

    pub fn axis(&self, axis: Axis) -> &AxisLexicon {
        match axis {
            Axis::TeachingQuality => &self.teaching_quality,
            Axis::EvaluationMethod => &self.evaluation_method,
            Axis::Empathy => &self.empathy,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            teaching_quality: AxisLexicon::new(
                TEACHING_QUALITY_POSITIVE.iter().copied(),
                TEACHING_QUALITY_NEGATIVE.iter().copied(),
            ),
            evaluation_method: AxisLexicon::new(
                EVALUATION_METHOD_POSITIVE.iter().copied(),
                EVALUATION_METHOD_NEGATIVE.iter().copied(),
            ),
            empathy: AxisLexicon::new(
                EMPATHY_POSITIVE.iter().copied(),
                EMPATHY_NEGATIVE.iter().copied(),
            ),
        }
    }
}

/// Builder returned by [`Lexicon::builder`].
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Replace one axis's term lists.
    pub fn axis(mut self, axis: Axis, terms: AxisLexicon) -> Self {
        match axis {
            Axis::TeachingQuality => self.lexicon.teaching_quality = terms,
            Axis::EvaluationMethod => self.lexicon.evaluation_method = terms,
            Axis::Empathy => self.lexicon.empathy = terms,
        }
        self
    }

    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}
