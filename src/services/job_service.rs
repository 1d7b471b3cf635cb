//! Job service: listing query construction and job CRUD operations.

use std::sync::Arc;

use log::debug;
use mongodb::bson::{doc, Document, Regex};
use mongodb::Database;

use crate::constants::{DEFAULT_PAGE_NUMBER, ERR_INVALID_JOB_ID};
use crate::errors::ApiError;
use crate::models::{DeleteAck, InsertAck, Job, UpdateAck};
use crate::repositories::JobRepository;
use crate::validators::parse_object_id;

pub struct JobService {
    repository: Arc<JobRepository>,
}

impl JobService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(JobRepository::new(db)),
        }
    }

    pub async fn get_all_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.repository.find_all().await
    }

    pub async fn get_job_by_id(&self, id: &str) -> Result<Option<Job>, ApiError> {
        debug!("Fetching job by ID: {}", id);
        let object_id = parse_object_id(id, ERR_INVALID_JOB_ID)?;
        self.repository.find_by_id(object_id).await
    }

    pub async fn get_jobs_by_owner(&self, email: &str) -> Result<Vec<Job>, ApiError> {
        self.repository.find_by_owner(email).await
    }

    pub async fn create_job(&self, job: Job) -> Result<InsertAck, ApiError> {
        Ok(self.repository.insert(&job).await?.into())
    }

    /// Replace-or-insert the job stored under `id` with the client document.
    pub async fn replace_job(&self, id: &str, job: Job) -> Result<UpdateAck, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_JOB_ID)?;
        Ok(self.repository.upsert(object_id, &job).await?.into())
    }

    pub async fn delete_job(&self, id: &str) -> Result<DeleteAck, ApiError> {
        let object_id = parse_object_id(id, ERR_INVALID_JOB_ID)?;
        Ok(self.repository.delete(object_id).await?.into())
    }

    /// Fetch one page of the public job listing.
    ///
    /// Missing or garbled `cpage` falls back to page 1; missing or garbled
    /// `limit` disables the page bound and returns every match.
    pub async fn list_jobs_paged(
        &self,
        limit: Option<u64>,
        cpage: Option<u64>,
        category: Option<&str>,
        sort: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Job>, ApiError> {
        let filter = build_listing_filter(search, category);
        let sort = build_sort_directive(sort);
        let skip = skip_offset(limit, cpage);
        let limit = limit.filter(|l| *l > 0).map(|l| l as i64);

        debug!(
            "Listing jobs with filter: {:?}, skip: {}, limit: {:?}",
            filter, skip, limit
        );

        self.repository.find_page(filter, sort, skip, limit).await
    }

    /// Count jobs under the same predicates the paginated listing applies,
    /// so page counts computed from it stay consistent with the pages.
    pub async fn count_jobs(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<u64, ApiError> {
        self.repository
            .count(build_listing_filter(search, category))
            .await
    }
}

/// Build the listing filter predicate.
///
/// An empty document matches everything; `search` adds a case-insensitive
/// substring match on the job title, `category` an exact tag match, and both
/// combine with logical AND. User input is regex-escaped so it always matches
/// literally.
pub fn build_listing_filter(search: Option<&str>, category: Option<&str>) -> Document {
    let mut filter = doc! {};

    if let Some(search) = search {
        if !search.trim().is_empty() {
            let search_regex = Regex {
                pattern: regex::escape(search.trim()),
                options: "i".to_string(),
            };
            filter.insert("job_title", doc! { "$regex": search_regex });
        }
    }

    if let Some(category) = category {
        if !category.is_empty() {
            filter.insert("category", category);
        }
    }

    filter
}

/// Build the sort directive: `"asc"` orders by deadline ascending, any other
/// value descending; `None` leaves the store's natural order.
pub fn build_sort_directive(sort: Option<&str>) -> Option<Document> {
    sort.filter(|s| !s.is_empty()).map(|s| {
        let direction = if s == "asc" { 1 } else { -1 };
        doc! { "deadline": direction }
    })
}

/// Number of records to skip for the requested page: `limit * (cpage - 1)`.
///
/// Pages are 1-based. An absent or zero page counts as page 1, and without a
/// limit there is nothing to skip.
pub fn skip_offset(limit: Option<u64>, cpage: Option<u64>) -> u64 {
    let page = cpage.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE_NUMBER);
    limit.unwrap_or(0) * (page - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(build_listing_filter(None, None), doc! {});
        assert_eq!(build_listing_filter(Some("  "), Some("")), doc! {});
    }

    #[test]
    fn test_search_builds_case_insensitive_regex() {
        let filter = build_listing_filter(Some("design"), None);
        let regex = filter
            .get_document("job_title")
            .unwrap()
            .get("$regex")
            .unwrap();
        match regex {
            Bson::RegularExpression(re) => {
                assert_eq!(re.pattern, "design");
                assert_eq!(re.options, "i");
            }
            other => panic!("expected regex, got {:?}", other),
        }
    }

    #[test]
    fn test_search_input_is_escaped() {
        let filter = build_listing_filter(Some("c++ (senior)"), None);
        let regex = filter
            .get_document("job_title")
            .unwrap()
            .get("$regex")
            .unwrap();
        match regex {
            Bson::RegularExpression(re) => {
                assert_eq!(re.pattern, regex::escape("c++ (senior)"));
            }
            other => panic!("expected regex, got {:?}", other),
        }
    }

    #[test]
    fn test_category_is_exact_match() {
        let filter = build_listing_filter(None, Some("Web Development"));
        assert_eq!(
            filter.get_str("category").unwrap(),
            "Web Development"
        );
    }

    #[test]
    fn test_search_and_category_combine_with_and() {
        let filter = build_listing_filter(Some("logo"), Some("Graphics Design"));
        assert!(filter.contains_key("job_title"));
        assert_eq!(filter.get_str("category").unwrap(), "Graphics Design");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_sort_directive() {
        assert_eq!(
            build_sort_directive(Some("asc")),
            Some(doc! { "deadline": 1 })
        );
        assert_eq!(
            build_sort_directive(Some("desc")),
            Some(doc! { "deadline": -1 })
        );
        // Anything other than "asc" sorts descending
        assert_eq!(
            build_sort_directive(Some("newest")),
            Some(doc! { "deadline": -1 })
        );
        assert_eq!(build_sort_directive(None), None);
        assert_eq!(build_sort_directive(Some("")), None);
    }

    #[test]
    fn test_skip_offset_is_one_based() {
        assert_eq!(skip_offset(Some(10), Some(1)), 0);
        assert_eq!(skip_offset(Some(10), Some(3)), 20);
        assert_eq!(skip_offset(Some(7), Some(5)), 28);
    }

    #[test]
    fn test_missing_or_invalid_params_default_safely() {
        // No page means page 1
        assert_eq!(skip_offset(Some(10), None), 0);
        // Page 0 is out of range for a 1-based pager
        assert_eq!(skip_offset(Some(10), Some(0)), 0);
        // No limit means nothing to skip
        assert_eq!(skip_offset(None, Some(4)), 0);
    }

    #[test]
    fn test_consecutive_pages_partition_without_overlap_or_gap() {
        let limit = 10u64;
        for page in 1..=20u64 {
            let start = skip_offset(Some(limit), Some(page));
            let next_start = skip_offset(Some(limit), Some(page + 1));
            assert_eq!(start, limit * (page - 1));
            assert_eq!(next_start, start + limit);
        }
    }
}
