use serde::{Deserialize, Serialize};
use services::matching::{FilterOptions, FilterState, MatchScope, ScoredCandidate, SortKey};

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub scope: Option<String>,
    pub query: Option<String>,
    pub sort: Option<String>,
    pub subjects: Option<String>,
    pub learning_styles: Option<String>,
    pub study_times: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl MatchQuery {
    pub fn scope(&self) -> Result<MatchScope, String> {
        MatchScope::parse(self.scope.as_deref().unwrap_or_default())
            .ok_or_else(|| "Invalid scope, expected one of: all, users, chat_rooms".to_string())
    }

    pub fn filters(&self) -> Result<FilterState, String> {
        let sort = SortKey::parse(self.sort.as_deref().unwrap_or_default())
            .ok_or_else(|| "Invalid sort, expected one of: score, name".to_string())?;

        Ok(FilterState::new()
            .with_search(self.query.clone().unwrap_or_default())
            .with_sort(sort)
            .with_subjects(common::split_list(self.subjects.as_deref()))
            .with_learning_styles(common::split_list(self.learning_styles.as_deref()))
            .with_study_times(common::split_list(self.study_times.as_deref())))
    }
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<ScoredCandidate>,
    pub options: FilterOptions,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_lists_become_filter_sets() {
        let query = MatchQuery {
            query: Some("phys".into()),
            sort: Some("name".into()),
            subjects: Some("Mathematics, Physics".into()),
            study_times: Some("Evenings".into()),
            ..Default::default()
        };
        let filters = query.filters().unwrap();
        assert_eq!(filters.search_query, "phys");
        assert_eq!(filters.sort_key, SortKey::ByNameAscending);
        assert_eq!(filters.subject_filters.len(), 2);
        assert!(filters.learning_style_filters.is_empty());
        assert!(filters.study_time_filters.contains("Evenings"));
    }

    #[test]
    fn unknown_sort_and_scope_are_rejected() {
        let query = MatchQuery {
            sort: Some("age".into()),
            scope: Some("forums".into()),
            ..Default::default()
        };
        assert!(query.filters().is_err());
        assert!(query.scope().is_err());
        assert_eq!(MatchQuery::default().scope(), Ok(MatchScope::All));
    }
}
