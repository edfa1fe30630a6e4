//! Category search pipeline tests
//!
//! Runs the full catalog stack (service, planner, repository, matcher) over
//! the in-memory document store, covering both the structured and the
//! fallback path.

mod utils;

use serde_json::json;
use std::collections::HashSet;

use utils::factories::{flights_on_routes, TravelItemFactory};
use utils::helpers::{build_test_app, build_test_app_with, ids, seed};
use wayfarer::modules::catalog::{Category, QueryPath, RawSearchFilters, TravelItem};
use wayfarer::modules::store::Document;
use wayfarer::shared::config::SearchConfig;
use wayfarer::shared::AppError;

const ROUTES: [(&str, &str); 3] = [("Mumbai", "Goa"), ("New Delhi", "Goa"), ("Pune", "Chennai")];

fn hotels_with_mumbai_every_tenth(count: usize) -> Vec<TravelItem> {
    (0..count)
        .map(|i| {
            let factory = TravelItemFactory::hotel(format!("ht-{:03}", i));
            if i % 10 == 0 {
                let factory = factory
                    .title("Grand Palace Mumbai")
                    .subtitle("Mumbai, India • City Center");
                // Half the Mumbai hotels carry the city only in the subtitle
                if i % 20 == 0 {
                    factory.to("Mumbai").build()
                } else {
                    factory.build()
                }
            } else {
                factory
                    .title("Lotus Residency")
                    .subtitle("Pune, India • Airport Road")
                    .to("Pune")
                    .build()
            }
        })
        .collect()
}

async fn collect_all_pages(
    app: &utils::helpers::TestApp,
    category: Category,
    filters: &RawSearchFilters,
    limit: u32,
) -> Vec<TravelItem> {
    let mut all = Vec::new();
    let mut page = 1;
    loop {
        let outcome = app
            .state
            .catalog
            .search(category, Some(page), Some(limit), filters.clone())
            .await
            .unwrap();
        if outcome.page.data.is_empty() {
            break;
        }
        all.extend(outcome.page.data);
        page += 1;
    }
    all
}

#[tokio::test]
async fn test_hotels_in_mumbai_first_page() {
    let app = build_test_app();
    seed(&app.store, Category::Hotels, &hotels_with_mumbai_every_tenth(120));

    let outcome = app
        .state
        .catalog
        .search(
            Category::Hotels,
            Some(1),
            Some(10),
            RawSearchFilters::new().with_to("mumbai"),
        )
        .await
        .unwrap();

    assert_eq!(outcome.path, QueryPath::Fallback);
    assert_eq!(outcome.page.total, 12);
    assert_eq!(outcome.page.data.len(), 10);
    assert_eq!(outcome.page.total_pages, 2);
    assert!(outcome
        .page
        .data
        .iter()
        .all(|h| h.subtitle.starts_with("Mumbai")));
}

#[tokio::test]
async fn test_hotel_subtitle_alias_matches_destination() {
    let app = build_test_app();
    let beach = TravelItemFactory::hotel("ht-goa")
        .title("Sea Breeze Resort")
        .subtitle("Goa, India • Beachfront")
        .build();
    let inland = TravelItemFactory::hotel("ht-pune")
        .title("Lotus Residency")
        .subtitle("Pune, India • Airport Road")
        .to("Pune")
        .build();
    seed(&app.store, Category::Hotels, &[beach, inland]);

    let outcome = app
        .state
        .catalog
        .search(Category::Hotels, None, None, RawSearchFilters::new().with_to("Goa"))
        .await
        .unwrap();

    assert_eq!(ids(&outcome.page.data), vec!["ht-goa".to_string()]);
    assert_eq!(outcome.page.total, 1);
}

#[tokio::test]
async fn test_cabs_match_model_regardless_of_route() {
    let app = build_test_app();
    let cabs = vec![
        TravelItemFactory::cab("cb-1")
            .title("Swift Dzire • 4 seats")
            .subtitle("Mumbai, India • Outstation")
            .details(&["Swift Dzire", "AC"])
            .from("Mumbai")
            .build(),
        TravelItemFactory::cab("cb-2")
            .title("Sedan • 4 seats")
            .subtitle("Pune, India • Outstation")
            .details(&["Maruti Swift", "AC"])
            .from("Pune")
            .build(),
        TravelItemFactory::cab("cb-3")
            .title("Toyota Innova • 6 seats")
            .subtitle("Goa, India • Outstation")
            .details(&["Toyota Innova"])
            .from("Goa")
            .build(),
    ];
    seed(&app.store, Category::Cabs, &cabs);

    let outcome = app
        .state
        .catalog
        .search(Category::Cabs, None, None, RawSearchFilters::new().with_car("  SWIFT "))
        .await
        .unwrap();

    assert_eq!(outcome.path, QueryPath::Fallback);
    assert_eq!(ids(&outcome.page.data), vec!["cb-1".to_string(), "cb-2".to_string()]);
}

#[tokio::test]
async fn test_destination_parity_between_paths() {
    let flights = flights_on_routes(30, &ROUTES);
    let filters = RawSearchFilters::new().with_to("goa");

    let structured = build_test_app();
    seed(&structured.store, Category::Flights, &flights);
    let structured_outcome = structured
        .state
        .catalog
        .search(Category::Flights, None, Some(100), filters.clone())
        .await
        .unwrap();

    let fallback = build_test_app();
    seed(&fallback.store, Category::Flights, &flights);
    fallback.store.reject_filtered_queries(Category::Flights.collection_name());
    let fallback_outcome = fallback
        .state
        .catalog
        .search(Category::Flights, None, Some(100), filters)
        .await
        .unwrap();

    assert_eq!(structured_outcome.path, QueryPath::Structured);
    assert_eq!(fallback_outcome.path, QueryPath::Fallback);

    let expected: Vec<String> = flights
        .iter()
        .filter(|f| f.to.as_deref() == Some("Goa"))
        .map(|f| f.id.clone())
        .collect();
    assert_eq!(expected.len(), 20);

    for outcome in [&structured_outcome, &fallback_outcome] {
        let returned: HashSet<String> = ids(&outcome.page.data).into_iter().collect();
        assert!(expected.iter().all(|id| returned.contains(id)));
    }
    assert_eq!(structured_outcome.page, fallback_outcome.page);
}

#[tokio::test]
async fn test_malformed_documents_do_not_skew_totals() {
    let flights = flights_on_routes(30, &ROUTES);
    let filters = RawSearchFilters::new().with_to("goa");
    let priceless = || {
        Document::new(
            "fl-bad",
            json!({ "title": "Charter", "to": "Goa" }).as_object().cloned().unwrap(),
        )
    };

    let direct = build_test_app();
    seed(&direct.store, Category::Flights, &flights);
    direct.store.insert(Category::Flights.collection_name(), priceless());
    let direct_outcome = direct
        .state
        .catalog
        .search(Category::Flights, None, Some(100), filters.clone())
        .await
        .unwrap();

    let scanned = build_test_app();
    seed(&scanned.store, Category::Flights, &flights);
    scanned.store.insert(Category::Flights.collection_name(), priceless());
    scanned.store.reject_filtered_queries(Category::Flights.collection_name());
    let scanned_outcome = scanned
        .state
        .catalog
        .search(Category::Flights, None, Some(100), filters)
        .await
        .unwrap();

    assert_eq!(scanned_outcome.page.total, 20);
    assert_eq!(direct_outcome.page.total, scanned_outcome.page.total);
    assert_eq!(direct_outcome.page, scanned_outcome.page);
    assert!(!ids(&direct_outcome.page.data).contains(&"fl-bad".to_string()));
}

#[tokio::test]
async fn test_rejected_structured_query_falls_back() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(30, &ROUTES));
    app.store
        .reject_filtered_queries(Category::Flights.collection_name());

    let outcome = app
        .state
        .catalog
        .search(
            Category::Flights,
            Some(2),
            Some(4),
            RawSearchFilters::new().with_from("mumbai").with_to("goa"),
        )
        .await
        .unwrap();

    assert_eq!(outcome.path, QueryPath::Fallback);
    assert_eq!(outcome.page.total, 10);
    assert_eq!(outcome.page.data.len(), 4);
    assert!(outcome
        .page
        .data
        .iter()
        .all(|f| f.from.as_deref() == Some("Mumbai") && f.to.as_deref() == Some("Goa")));
}

#[tokio::test]
async fn test_filters_compose_with_and() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(30, &ROUTES));

    let both = app
        .state
        .catalog
        .search(
            Category::Flights,
            None,
            Some(100),
            RawSearchFilters::new().with_from("Mumbai").with_to("Goa"),
        )
        .await
        .unwrap();
    assert_eq!(both.path, QueryPath::Structured);
    assert_eq!(both.page.total, 10);

    let none = app
        .state
        .catalog
        .search(Category::Flights, None, Some(100), RawSearchFilters::default())
        .await
        .unwrap();
    assert_eq!(none.page.total, 30);
    assert_eq!(none.page.data.len(), 30);

    let disjoint = app
        .state
        .catalog
        .search(
            Category::Flights,
            None,
            None,
            RawSearchFilters::new().with_from("Pune").with_to("Goa"),
        )
        .await
        .unwrap();
    assert_eq!(disjoint.page.total, 0);
    assert!(disjoint.page.data.is_empty());
}

#[tokio::test]
async fn test_pages_concatenate_to_full_result() {
    let flights = flights_on_routes(30, &ROUTES);
    let filters = RawSearchFilters::new().with_to("Goa");

    let structured = build_test_app();
    seed(&structured.store, Category::Flights, &flights);

    let fallback = build_test_app();
    seed(&fallback.store, Category::Flights, &flights);
    fallback
        .store
        .reject_filtered_queries(Category::Flights.collection_name());

    for app in [&structured, &fallback] {
        let pages = collect_all_pages(app, Category::Flights, &filters, 7).await;
        let page_ids = ids(&pages);
        let unique: HashSet<&String> = page_ids.iter().collect();

        assert_eq!(page_ids.len(), 20);
        assert_eq!(unique.len(), 20);
    }

    let hotels = build_test_app();
    seed(&hotels.store, Category::Hotels, &hotels_with_mumbai_every_tenth(120));
    let pages = collect_all_pages(
        &hotels,
        Category::Hotels,
        &RawSearchFilters::new().with_to("Mumbai"),
        5,
    )
    .await;
    assert_eq!(pages.len(), 12);
}

#[tokio::test]
async fn test_page_sizes_never_exceed_limit_or_total() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(23, &ROUTES));
    seed(&app.store, Category::Hotels, &hotels_with_mumbai_every_tenth(40));

    let cases = [
        (Category::Flights, RawSearchFilters::default()),
        (Category::Flights, RawSearchFilters::new().with_to("Chennai")),
        (Category::Hotels, RawSearchFilters::new().with_to("Mumbai")),
        (Category::Hotels, RawSearchFilters::default()),
    ];

    for (category, filters) in cases {
        for limit in [1, 3, 10, 50] {
            for page in 1..=4 {
                let outcome = app
                    .state
                    .catalog
                    .search(category, Some(page), Some(limit), filters.clone())
                    .await
                    .unwrap();
                assert!(outcome.page.data.len() <= limit as usize);
                assert!(outcome.page.data.len() as u64 <= outcome.page.total);
            }
        }
    }
}

#[tokio::test]
async fn test_location_input_is_case_and_space_insensitive() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(12, &ROUTES));

    let mut pages = Vec::new();
    for to in ["goa", "  GOA ", "Goa", "gOa"] {
        let outcome = app
            .state
            .catalog
            .search(Category::Flights, None, None, RawSearchFilters::new().with_to(to))
            .await
            .unwrap();
        pages.push(outcome.page);
    }

    assert_eq!(pages[0].total, 8);
    assert!(pages.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_whitespace_filters_are_ignored() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(12, &ROUTES));

    let outcome = app
        .state
        .catalog
        .search(
            Category::Flights,
            None,
            None,
            RawSearchFilters::new().with_from("   ").with_to("").with_car(" "),
        )
        .await
        .unwrap();

    assert_eq!(outcome.path, QueryPath::Structured);
    assert_eq!(outcome.page.total, 12);
}

#[tokio::test]
async fn test_unavailable_store_yields_empty_page() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(12, &ROUTES));
    app.store.set_unavailable(true);

    let outcome = app
        .state
        .catalog
        .search(Category::Flights, None, None, RawSearchFilters::new().with_to("Goa"))
        .await
        .unwrap();

    assert_eq!(outcome.path, QueryPath::Unavailable);
    assert_eq!(outcome.page.total, 0);
    assert!(outcome.page.data.is_empty());
}

#[tokio::test]
async fn test_fallback_scan_is_bounded() {
    let app = build_test_app_with(SearchConfig {
        fallback_scan_limit: 50,
        ..SearchConfig::default()
    });
    seed(&app.store, Category::Hotels, &hotels_with_mumbai_every_tenth(120));

    let outcome = app
        .state
        .catalog
        .search(
            Category::Hotels,
            None,
            None,
            RawSearchFilters::new().with_to("Mumbai"),
        )
        .await
        .unwrap();

    // Only ht-000..ht-049 are scanned
    assert_eq!(outcome.page.total, 5);
}

#[tokio::test]
async fn test_paging_input_is_clamped() {
    let app = build_test_app();
    seed(&app.store, Category::Flights, &flights_on_routes(5, &ROUTES));

    let outcome = app
        .state
        .catalog
        .search(Category::Flights, Some(0), Some(500), RawSearchFilters::default())
        .await
        .unwrap();

    assert_eq!(outcome.page.page, 1);
    assert_eq!(outcome.page.limit, 100);
    assert_eq!(outcome.page.data.len(), 5);
}

#[tokio::test]
async fn test_unknown_category_suggests_closest() {
    let app = build_test_app();

    let result = app
        .state
        .catalog
        .search_by_name("flihgts", None, None, RawSearchFilters::default())
        .await;

    match result {
        Err(AppError::ValidationError(message)) => assert!(message.contains("flights")),
        other => panic!("expected validation error, got {:?}", other),
    }

    let known = app
        .state
        .catalog
        .search_by_name("Hotels", None, None, RawSearchFilters::default())
        .await
        .unwrap();
    assert_eq!(known.page.total, 0);
}
