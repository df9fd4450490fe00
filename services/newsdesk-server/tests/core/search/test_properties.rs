// Pipeline properties: idempotence, pagination coverage, filter
// composition, score floor

use std::collections::HashSet;
use std::sync::Arc;

use newsdesk::core::config::Config;
use newsdesk::core::search::{rank, score, SearchService};
use newsdesk::core::store::MemoryContentStore;
use newsdesk::core::types::{Document, SearchDomain, SearchRequest, SortBy};

use crate::common::{article, external, ids, newsroom_snapshot, opinion};

fn service() -> SearchService {
    let config = Config::default();
    SearchService::new(
        Arc::new(newsroom_snapshot()),
        config.content_store.sources,
        config.search,
    )
}

fn large_snapshot() -> Vec<Document> {
    (0..47)
        .map(|i| {
            let author = if i % 3 == 0 { "Pat Smith" } else { "Lee Park" };
            let category = if i % 2 == 0 { "Politics" } else { "Economy" };
            let date = format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28);
            article(&format!("a{i}"), &format!("Story {i} on policy"), author, category, &date)
        })
        .collect()
}

#[test]
fn test_score_is_at_least_one() {
    let docs = vec![
        article("a", "", "", "", ""),
        opinion("o", "Anything", "Someone", "2024-01-01"),
        external("x", "", "", ""),
    ];
    for doc in &docs {
        for query in ["a", "zzz", " Economy ", "é"] {
            assert!(score(doc, query) >= 1);
        }
    }
}

#[test]
fn test_title_match_outranks_no_match() {
    let with_title = article("t", "Budget talks", "", "", "2020-01-01");
    let without = article("n", "Other", "", "", "2024-01-01");

    assert_eq!(score(&with_title, "budget"), 11);
    assert_eq!(score(&without, "budget"), 1);

    let mut req = SearchRequest::new("budget", SearchDomain::Articles);
    req.sort_by = SortBy::Relevance;
    let response = rank(vec![without, with_title], &req, "budget", 200);
    assert_eq!(ids(&response.results), vec!["t", "n"]);
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let service = service();
    let mut req = SearchRequest::new("economy", SearchDomain::Articles);
    req.sort_by = SortBy::AuthorAsc;
    req.page_size = 2;

    let first = service.search(req.clone()).await.unwrap();
    let second = service.search(req).await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pages_reassemble_filtered_set() {
    let docs = large_snapshot();
    let mut req = SearchRequest::new("policy", SearchDomain::Articles);
    req.page_size = 5;
    req.filters.category = Some("politics".to_string());

    let mut full_req = req.clone();
    full_req.page_size = 1000;
    let full = rank(docs.clone(), &full_req, "policy", 200);
    assert_eq!(full.pagination.total, 24);

    let first = rank(docs.clone(), &req, "policy", 200);
    assert_eq!(first.pagination.total_pages, 5);

    let mut seen = Vec::new();
    for page in 1..=first.pagination.total_pages {
        req.page = page;
        seen.extend(ids(&rank(docs.clone(), &req, "policy", 200).results));
    }

    let unique: HashSet<_> = seen.iter().cloned().collect();
    assert_eq!(unique.len(), seen.len());
    assert_eq!(seen, ids(&full.results));
}

#[test]
fn test_page_beyond_total_pages_is_empty() {
    let mut req = SearchRequest::new("policy", SearchDomain::Articles);
    req.page = 99;

    let response = rank(large_snapshot(), &req, "policy", 200);

    assert!(response.results.is_empty());
    assert_eq!(response.pagination.page, 99);
    assert_eq!(response.pagination.total, 47);
    assert_eq!(response.pagination.total_pages, 4);
}

#[test]
fn test_filters_compose_as_intersection() {
    let docs = large_snapshot();
    let run = |author: Option<&str>, category: Option<&str>| {
        let mut req = SearchRequest::new("policy", SearchDomain::Articles);
        req.page_size = 1000;
        req.filters.author = author.map(str::to_string);
        req.filters.category = category.map(str::to_string);
        ids(&rank(docs.clone(), &req, "policy", 200).results)
            .into_iter()
            .collect::<HashSet<_>>()
    };

    let by_author = run(Some("Smith"), None);
    let by_category = run(None, Some("Politics"));
    let both = run(Some("Smith"), Some("Politics"));

    let intersection: HashSet<_> = by_author.intersection(&by_category).cloned().collect();
    assert_eq!(both, intersection);
    assert_eq!(both.len(), 8);
}

#[tokio::test]
async fn test_service_drops_documents_from_other_domains() {
    let store = MemoryContentStore::new().with_collection(
        "articles",
        vec![
            article("a1", "Policy", "", "", "2024-01-01"),
            external("x1", "Policy wire", "Politics", "2024-01-02"),
        ],
    );
    let config = Config::default();
    let service = SearchService::new(Arc::new(store), config.content_store.sources, config.search);

    let response = service
        .search(SearchRequest::new("policy", SearchDomain::Articles))
        .await
        .unwrap();

    assert_eq!(ids(&response.results), vec!["a1"]);
}
