// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "insight.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Classifier ---
pub const DEFAULT_CLASSIFIER_PROVIDER: &str = "onnx";
pub const DEFAULT_MODEL_NAME: &str = "dccuchile/bert-base-spanish-wwm-cased";
pub const DEFAULT_MODEL_LABELS: [&str; 3] = ["LABEL_0", "LABEL_1", "LABEL_2"];
pub const DEFAULT_INTRA_THREADS: usize = 2;
pub const DEFAULT_USE_TOKEN_TYPE_IDS: bool = false;

// --- Pipeline ---
pub const DEFAULT_BATCH_SIZE: usize = 8;
pub const DEFAULT_BACKFILL_BATCH_SIZE: usize = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
