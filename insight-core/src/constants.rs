/// Lexicon `score_pos` strictly above this is a positive verdict.
pub const LEXICON_POSITIVE_THRESHOLD: f64 = 0.6;

/// Lexicon `score_pos` strictly below this is a negative verdict.
pub const LEXICON_NEGATIVE_THRESHOLD: f64 = 0.4;

/// Confidence reported for a neutral lexicon verdict.
pub const LEXICON_NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Input budget (characters) before a text reaches the classifier.
pub const MAX_CLASSIFIER_INPUT_CHARS: usize = 512;

/// Token budget of the sequence-classification model.
pub const MAX_CLASSIFIER_TOKENS: usize = 512;

/// Tolerance used when checking that polarity weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Version tag of the keyword lexicon.
pub const LEXICON_VERSION: &str = "keyword-based-v1.0";

/// Reported model version before the classifier has been loaded.
pub const MODEL_NOT_LOADED: &str = "not loaded";
