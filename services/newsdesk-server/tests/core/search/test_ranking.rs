// Ranking scenarios for SearchService

use std::sync::Arc;

use newsdesk::core::config::{Config, SourceConfig};
use newsdesk::core::search::SearchService;
use newsdesk::core::store::MemoryContentStore;
use newsdesk::core::types::{parse_date, DocumentKind, SearchDomain, SearchRequest, SortBy};
use newsdesk::NewsdeskError;

use crate::common::{article, ids, newsroom_snapshot, with_tags};

fn service_over(store: MemoryContentStore) -> (SearchService, Arc<MemoryContentStore>) {
    let config = Config::default();
    let store = Arc::new(store);
    let service = SearchService::new(
        store.clone(),
        config.content_store.sources,
        config.search,
    );
    (service, store)
}

fn request(query: &str, sort_by: SortBy) -> SearchRequest {
    let mut req = SearchRequest::new(query, SearchDomain::Articles);
    req.sort_by = sort_by;
    req
}

#[tokio::test]
async fn test_tag_match_beats_category_match() {
    let store = MemoryContentStore::new().with_collection(
        "articles",
        vec![
            article("doc1", "Tax Reform Passes", "J. Doe", "Economy", "2024-01-10"),
            with_tags(
                article("doc2", "Weather Update", "A. Smith", "News", "2024-02-01"),
                &["economy"],
            ),
        ],
    );
    let (service, _) = service_over(store);

    let response = service
        .search(request("economy", SortBy::Relevance))
        .await
        .unwrap();

    assert_eq!(ids(&response.results), vec!["doc2", "doc1"]);
    assert_eq!(response.results[0].score, 8);
    assert_eq!(response.results[1].score, 5);
    assert_eq!(response.pagination.total, 2);
    assert_eq!(response.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_relevance_order_with_date_tiebreak() {
    let (service, _) = service_over(newsroom_snapshot());

    let response = service
        .search(request("economy", SortBy::Relevance))
        .await
        .unwrap();

    assert_eq!(
        ids(&response.results),
        vec!["doc5", "doc3", "op1", "doc2", "doc1"]
    );
    let scores: Vec<u32> = response.results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![15, 11, 11, 8, 5]);
}

#[tokio::test]
async fn test_default_sort_is_date_desc() {
    let (service, _) = service_over(newsroom_snapshot());

    let response = service
        .search(SearchRequest::new("economy", SearchDomain::Articles))
        .await
        .unwrap();

    assert_eq!(
        ids(&response.results),
        vec!["doc3", "op1", "doc2", "doc1", "doc5"]
    );
    assert_eq!(response.query.sort_by, SortBy::DateDesc);
}

#[tokio::test]
async fn test_date_from_excludes_high_scoring_older_documents() {
    let (service, _) = service_over(newsroom_snapshot());
    let mut req = request("economy", SortBy::Relevance);
    req.filters.date_from = parse_date("2024-06-01");

    let response = service.search(req).await.unwrap();

    assert_eq!(ids(&response.results), vec!["doc3", "op1"]);
    assert_eq!(response.pagination.total, 2);
    assert_eq!(
        response.query.filters.date_from.as_deref(),
        Some("2024-06-01T00:00:00Z")
    );
}

#[tokio::test]
async fn test_category_filter_and_opinion_rule() {
    let (service, _) = service_over(newsroom_snapshot());

    let mut politics = request("economy", SortBy::DateDesc);
    politics.filters.category = Some("POLITICS".to_string());
    let response = service.search(politics).await.unwrap();
    assert_eq!(ids(&response.results), vec!["doc3"]);

    let mut opinions = request("economy", SortBy::DateDesc);
    opinions.filters.category = Some("opinion".to_string());
    let response = service.search(opinions).await.unwrap();
    assert_eq!(ids(&response.results), vec!["op1"]);
}

#[tokio::test]
async fn test_external_domain_scoring() {
    let (service, _) = service_over(newsroom_snapshot());

    let response = service
        .search(SearchRequest::new("economy", SearchDomain::External))
        .await
        .unwrap();

    assert_eq!(ids(&response.results), vec!["x1"]);
    assert_eq!(response.results[0].score, 14);
    assert_eq!(response.query.search_type, SearchDomain::External);
}

#[tokio::test]
async fn test_whitespace_query_is_rejected_without_fetch() {
    let (service, store) = service_over(newsroom_snapshot());

    let result = service.search(request("   ", SortBy::Relevance)).await;

    assert!(matches!(result, Err(NewsdeskError::Validation(_))));
    assert_eq!(store.fetch_count(), 0);
}

#[tokio::test]
async fn test_multiple_sources_are_merged() {
    let store = MemoryContentStore::new()
        .with_collection(
            "articles",
            vec![article("a1", "Budget day", "", "Economy", "2024-03-01")],
        )
        .with_collection(
            "op-eds",
            vec![article("e1", "Budget is wrong", "", "", "2024-03-02")],
        );
    let mut config = Config::default();
    config.content_store.sources.push(SourceConfig {
        collection: "op-eds".to_string(),
        domain: SearchDomain::Articles,
        opinion: true,
    });
    let store = Arc::new(store);
    let service = SearchService::new(store.clone(), config.content_store.sources, config.search);

    let response = service
        .search(SearchRequest::new("budget", SearchDomain::Articles))
        .await
        .unwrap();

    assert_eq!(ids(&response.results), vec!["e1", "a1"]);
    assert_eq!(response.results[0].document.kind(), DocumentKind::Opinion);
    assert_eq!(response.results[1].document.kind(), DocumentKind::Article);
    assert_eq!(store.fetch_count(), 2);

    let mut opinions_only = SearchRequest::new("budget", SearchDomain::Articles);
    opinions_only.filters.category = Some("opinion".to_string());
    let response = service.search(opinions_only).await.unwrap();

    assert_eq!(ids(&response.results), vec!["e1"]);
}

#[tokio::test]
async fn test_failing_source_returns_valid_empty_response() {
    let (service, _) = service_over(newsroom_snapshot().with_failing("external-links"));

    let response = service
        .search(SearchRequest::new("economy", SearchDomain::External))
        .await
        .unwrap();

    assert!(response.results.is_empty());
    assert_eq!(response.pagination.total, 0);
    assert_eq!(response.pagination.total_pages, 1);
}
