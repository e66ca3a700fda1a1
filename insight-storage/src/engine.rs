//! StorageEngine: owns the ConnectionPool and implements IReviewGateway.

use std::path::Path;

use tracing::debug;

use insight_core::config::StorageConfig;
use insight_core::errors::{InsightError, InsightResult};
use insight_core::models::{
    CategorizationResult, CourseCount, PendingKind, PolarityResult, Review, ReviewAnalysis,
    ReviewScope, ScopeReport,
};
use insight_core::traits::IReviewGateway;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{pending, report, results, review_crud};

/// SQLite-backed review store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open (creating if needed) a database file with default settings.
    pub fn open(path: &Path) -> InsightResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> InsightResult<Self> {
        let pool = ConnectionPool::open(path, config)?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory database. Reads are served by the writer.
    pub fn open_in_memory() -> InsightResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> InsightResult<()> {
        let version = self.pool.writer.with_conn(migrations::run_migrations)?;
        debug!(
            schema_version = version,
            path = ?self.pool.db_path,
            "review store ready"
        );
        Ok(())
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> InsightResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Read on the pool when there is one, otherwise on the writer.
    fn with_reader<F, T>(&self, f: F) -> InsightResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> InsightResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    pub fn insert_review(&self, review: &Review) -> InsightResult<()> {
        self.pool
            .writer
            .with_conn(|conn| review_crud::insert_review(conn, review))
    }

    /// Insert all reviews or none.
    pub fn insert_reviews(&self, reviews: &[Review]) -> InsightResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| review_crud::insert_reviews(conn, reviews))
    }

    pub fn get_review(&self, id: &str) -> InsightResult<Option<Review>> {
        self.with_reader(|conn| review_crud::get_review(conn, id))
    }

    pub fn get_analysis(&self, id: &str) -> InsightResult<Option<ReviewAnalysis>> {
        self.with_reader(|conn| review_crud::get_analysis(conn, id))
    }

    /// Coverage and label distribution of every review in `scope`.
    ///
    /// # Errors
    /// `InvalidInput` for a blank course fragment, which would match every review.
    pub fn scope_report(&self, scope: &ReviewScope) -> InsightResult<ScopeReport> {
        if let ReviewScope::ByCourse(course) = scope {
            if course.trim().is_empty() {
                return Err(InsightError::InvalidInput {
                    reason: "course name fragment is blank".to_string(),
                });
            }
        }
        self.with_reader(|conn| report::scope_report(conn, scope))
    }

    /// The `limit` courses with the most reviews.
    pub fn course_counts(&self, limit: usize) -> InsightResult<Vec<CourseCount>> {
        self.with_reader(|conn| report::course_counts(conn, limit))
    }
}

impl IReviewGateway for StorageEngine {
    fn fetch_pending(
        &self,
        scope: &ReviewScope,
        limit: usize,
        skip: usize,
    ) -> InsightResult<Vec<Review>> {
        self.with_reader(|conn| pending::fetch_pending(conn, scope, limit, skip))
    }

    fn fetch_pending_categorization(
        &self,
        limit: usize,
        skip: usize,
    ) -> InsightResult<Vec<Review>> {
        self.with_reader(|conn| pending::fetch_pending_categorization(conn, limit, skip))
    }

    fn update_polarity(&self, review_id: &str, result: &PolarityResult) -> InsightResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| results::update_polarity(conn, review_id, result))
    }

    fn update_categorization(
        &self,
        review_id: &str,
        result: &CategorizationResult,
    ) -> InsightResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| results::update_categorization(conn, review_id, result))
    }

    fn count_pending(&self, kind: PendingKind) -> InsightResult<usize> {
        self.with_reader(|conn| pending::count_pending(conn, kind))
    }
}
