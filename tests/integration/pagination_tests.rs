//! Category pagination and book page scraping against a mock catalog

use crate::stubs::{
    listing_html, listing_path, mount_book, mount_page, read_csv, test_config, StubBook,
};
use bookshelf_scraper::config::CategoryLabel;
use bookshelf_scraper::output::{open_category_output, CategoryReport};
use bookshelf_scraper::{Category, Crawler, ScrapeError};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn category(server: &MockServer, name: &str, slug: &str) -> Category {
    let url = Url::parse(&format!("{}{}", server.uri(), listing_path(slug, 1)))
        .expect("Failed to build listing URL");
    Category::new(name, url)
}

fn count_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(Result::ok).count())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_two_book_category_end_to_end() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let first = StubBook {
        slug: "a-light-in-the-attic_1000",
        title: "A Light in the Attic",
        upc: "a897fe39b1053632",
        price_incl: "£51.77",
        price_excl: "£51.77",
        availability: "In stock (22 available)",
        description: Some("It's hard to imagine a world without A Light in the Attic."),
        category: "Poetry",
        rating: "Three",
    };
    let second = StubBook {
        slug: "shakespeares-sonnets_989",
        title: "Shakespeare's Sonnets",
        upc: "30a7f60cd76ca58c",
        price_incl: "£20.66",
        price_excl: "£20.66",
        availability: "In stock (19 available)",
        description: None,
        category: "Poetry",
        rating: "Four",
    };

    mount_page(
        &mock_server,
        &listing_path("poetry_23", 1),
        listing_html(&[first.clone(), second.clone()], None),
    )
    .await;
    mount_book(&mock_server, &first, 1).await;
    mount_book(&mock_server, &second, 1).await;

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let poetry = category(&mock_server, "Poetry", "poetry_23");

    let mut sink = open_category_output(output.path(), &poetry.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&poetry.name);
    crawler
        .paginate_category(&poetry, &mut sink, &mut report)
        .await
        .expect("Pagination failed");
    drop(sink);

    assert_eq!(report.pages, 1);
    assert_eq!(report.rows, 2);
    assert_eq!(report.skipped, 0);

    let (headers, rows) = read_csv(&output.path().join("Poetry.csv"));
    assert_eq!(headers.len(), 10);
    assert_eq!(rows.len(), 2);

    let base = mock_server.uri();
    assert_eq!(
        rows[0],
        vec![
            format!("{}/catalogue/a-light-in-the-attic_1000/index.html", base),
            "a897fe39b1053632".to_string(),
            "A Light in the Attic".to_string(),
            "£51.77".to_string(),
            "£51.77".to_string(),
            "22".to_string(),
            "It's hard to imagine a world without A Light in the Attic.".to_string(),
            "Poetry".to_string(),
            "3".to_string(),
            format!("{}/media/cache/a-light-in-the-attic_1000.jpg", base),
        ]
    );
    assert_eq!(
        rows[1],
        vec![
            format!("{}/catalogue/shakespeares-sonnets_989/index.html", base),
            "30a7f60cd76ca58c".to_string(),
            "Shakespeare's Sonnets".to_string(),
            "£20.66".to_string(),
            "£20.66".to_string(),
            "19".to_string(),
            String::new(),
            "Poetry".to_string(),
            "4".to_string(),
            format!("{}/media/cache/shakespeares-sonnets_989.jpg", base),
        ]
    );

    // Exactly two covers, named after the product slugs
    let covers = output.path().join("Poetry");
    assert_eq!(count_files(&covers), 2);
    assert_eq!(
        std::fs::read(covers.join("a-light-in-the-attic_1000.jpg")).expect("Missing cover"),
        first.cover_bytes()
    );
    assert_eq!(
        std::fs::read(covers.join("shakespeares-sonnets_989.jpg")).expect("Missing cover"),
        second.cover_bytes()
    );
}

#[tokio::test]
async fn test_books_spread_over_pages_give_one_row_each() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let books = [
        StubBook::new("book-one_1", "Book One", "Mystery"),
        StubBook::new("book-two_2", "Book Two", "Mystery"),
        StubBook::new("book-three_3", "Book Three", "Mystery"),
        StubBook::new("book-four_4", "Book Four", "Mystery"),
        StubBook::new("book-five_5", "Book Five", "Mystery"),
        StubBook::new("book-six_6", "Book Six", "Mystery"),
    ];

    // 2 + 3 + 1 books over three pages
    mount_page(
        &mock_server,
        &listing_path("mystery_3", 1),
        listing_html(&books[0..2], Some("page-2.html")),
    )
    .await;
    mount_page(
        &mock_server,
        &listing_path("mystery_3", 2),
        listing_html(&books[2..5], Some("page-3.html")),
    )
    .await;
    mount_page(
        &mock_server,
        &listing_path("mystery_3", 3),
        listing_html(&books[5..6], None),
    )
    .await;
    for book in &books {
        // Each product page is scraped exactly once
        mount_book(&mock_server, book, 1).await;
    }

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let mystery = category(&mock_server, "Mystery", "mystery_3");

    let mut sink = open_category_output(output.path(), &mystery.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&mystery.name);
    crawler
        .paginate_category(&mystery, &mut sink, &mut report)
        .await
        .expect("Pagination failed");
    drop(sink);

    assert_eq!(report.pages, 3);
    assert_eq!(report.rows, 6);

    let (_, rows) = read_csv(&output.path().join("Mystery.csv"));
    let titles: Vec<&str> = rows.iter().map(|row| row[2].as_str()).collect();
    assert_eq!(
        titles,
        vec!["Book One", "Book Two", "Book Three", "Book Four", "Book Five", "Book Six"]
    );
}

#[tokio::test]
async fn test_pagination_stops_without_next_link() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let book = StubBook::new("only-book_7", "Only Book", "Travel");
    mount_page(
        &mock_server,
        &listing_path("travel_2", 1),
        listing_html(&[book.clone()], None),
    )
    .await;
    mount_book(&mock_server, &book, 1).await;

    // A page that exists but is not linked must never be requested
    Mock::given(method("GET"))
        .and(path(listing_path("travel_2", 2)))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[], None)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let travel = category(&mock_server, "Travel", "travel_2");

    let mut sink = open_category_output(output.path(), &travel.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&travel.name);
    crawler
        .paginate_category(&travel, &mut sink, &mut report)
        .await
        .expect("Pagination failed");

    assert_eq!(report.pages, 1);
    assert_eq!(sink.rows(), 1);
}

#[tokio::test]
async fn test_failing_books_are_skipped() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let good = StubBook::new("good-book_1", "Good Book", "Travel");
    let missing = StubBook::new("missing-book_2", "Missing Book", "Travel");
    let mut sold_out = StubBook::new("sold-out_3", "Sold Out", "Travel");
    sold_out.availability = "Out of stock";
    let mut unrated = StubBook::new("unrated_4", "Unrated", "Travel");
    unrated.rating = "Zero";

    mount_page(
        &mock_server,
        &listing_path("travel_2", 1),
        listing_html(
            &[good.clone(), missing.clone(), sold_out.clone(), unrated.clone()],
            None,
        ),
    )
    .await;
    mount_book(&mock_server, &good, 1).await;
    // missing-book_2 is not mounted: wiremock answers 404
    mount_page(&mock_server, &sold_out.page_path(), sold_out.html()).await;
    mount_page(&mock_server, &unrated.page_path(), unrated.html()).await;

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let travel = category(&mock_server, "Travel", "travel_2");

    let mut sink = open_category_output(output.path(), &travel.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&travel.name);
    crawler
        .paginate_category(&travel, &mut sink, &mut report)
        .await
        .expect("Book failures must not fail the category");
    drop(sink);

    assert_eq!(report.rows, 1);
    assert_eq!(report.skipped, 3);

    let (_, rows) = read_csv(&output.path().join("Travel.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][2], "Good Book");
    assert_eq!(count_files(&output.path().join("Travel")), 1);
}

#[tokio::test]
async fn test_pagination_cycle_is_detected() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let first = StubBook::new("loop-one_1", "Loop One", "Humor");
    let second = StubBook::new("loop-two_2", "Loop Two", "Humor");

    mount_page(
        &mock_server,
        &listing_path("humor_30", 1),
        listing_html(&[first.clone()], Some("page-2.html")),
    )
    .await;
    mount_page(
        &mock_server,
        &listing_path("humor_30", 2),
        listing_html(&[second.clone()], Some("index.html")),
    )
    .await;
    mount_book(&mock_server, &first, 1).await;
    mount_book(&mock_server, &second, 1).await;

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let humor = category(&mock_server, "Humor", "humor_30");

    let mut sink = open_category_output(output.path(), &humor.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&humor.name);
    let err = crawler
        .paginate_category(&humor, &mut sink, &mut report)
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::PaginationCycle { .. }));
    // Rows written before the cycle stay on disk
    assert_eq!(report.pages, 2);
    assert_eq!(sink.rows(), 2);
}

#[tokio::test]
async fn test_pagination_limit() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let book = StubBook::new("first-page_1", "First Page", "Poetry");
    mount_page(
        &mock_server,
        &listing_path("poetry_23", 1),
        listing_html(&[book.clone()], Some("page-2.html")),
    )
    .await;
    mount_book(&mock_server, &book, 1).await;

    let mut config = test_config(&mock_server, output.path());
    config.crawler.max_pages_per_category = 1;
    let crawler = Crawler::new(config).expect("Failed to create crawler");
    let poetry = category(&mock_server, "Poetry", "poetry_23");

    let mut sink = open_category_output(output.path(), &poetry.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&poetry.name);
    let err = crawler
        .paginate_category(&poetry, &mut sink, &mut report)
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::PaginationLimit { limit: 1, .. }));
    assert_eq!(report.rows, 1);
}

#[tokio::test]
async fn test_concurrent_books_all_written() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    let books = [
        StubBook::new("c-one_1", "C One", "Fiction"),
        StubBook::new("c-two_2", "C Two", "Fiction"),
        StubBook::new("c-three_3", "C Three", "Fiction"),
        StubBook::new("c-four_4", "C Four", "Fiction"),
        StubBook::new("c-five_5", "C Five", "Fiction"),
    ];
    mount_page(
        &mock_server,
        &listing_path("fiction_10", 1),
        listing_html(&books, None),
    )
    .await;
    for book in &books {
        mount_book(&mock_server, book, 1).await;
    }

    let mut config = test_config(&mock_server, output.path());
    config.crawler.max_concurrent_books = 4;
    let crawler = Crawler::new(config).expect("Failed to create crawler");
    let fiction = category(&mock_server, "Fiction", "fiction_10");

    let mut sink = open_category_output(output.path(), &fiction.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&fiction.name);
    crawler
        .paginate_category(&fiction, &mut sink, &mut report)
        .await
        .expect("Pagination failed");
    drop(sink);

    // Completion order is not fixed, the set of rows is
    let (_, rows) = read_csv(&output.path().join("Fiction.csv"));
    let mut titles: Vec<&str> = rows.iter().map(|row| row[2].as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["C Five", "C Four", "C One", "C Three", "C Two"]);
    assert_eq!(count_files(&output.path().join("Fiction")), 5);
}

#[tokio::test]
async fn test_scrape_book_category_label() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    // Breadcrumb says "Classics" while the book is walked under "Fiction"
    let book = StubBook::new("dual-listed_42", "Dual Listed", "Classics");
    mount_book(&mock_server, &book, 2).await;

    let book_url = Url::parse(&format!("{}{}", mock_server.uri(), book.page_path()))
        .expect("Failed to build book URL");
    let fiction = category(&mock_server, "Fiction", "fiction_10");

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let record = crawler
        .scrape_book(&book_url, &fiction)
        .await
        .expect("Scrape failed");
    assert_eq!(record.category, "Classics");
    assert_eq!(record.number_available, 5);
    assert_eq!(record.review_rating, 3);
    assert!(Url::parse(&record.image_url).is_ok());

    let mut config = test_config(&mock_server, output.path());
    config.crawler.category_label = CategoryLabel::Listing;
    let crawler = Crawler::new(config).expect("Failed to create crawler");
    let record = crawler
        .scrape_book(&book_url, &fiction)
        .await
        .expect("Scrape failed");
    assert_eq!(record.category, "Fiction");

    // Covers always go under the walked category
    assert!(output
        .path()
        .join("Fiction")
        .join("dual-listed_42.jpg")
        .is_file());
}

#[tokio::test]
async fn test_missing_listing_container_fails_category() {
    let mock_server = MockServer::start().await;
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        &listing_path("broken_99", 1),
        "<html><body><p>Maintenance</p></body></html>".to_string(),
    )
    .await;

    let crawler = Crawler::new(test_config(&mock_server, output.path()))
        .expect("Failed to create crawler");
    let broken = category(&mock_server, "Broken", "broken_99");

    let mut sink = open_category_output(output.path(), &broken.name).expect("Failed to open CSV");
    let mut report = CategoryReport::new(&broken.name);
    let err = crawler
        .paginate_category(&broken, &mut sink, &mut report)
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Parse { .. }));
    assert_eq!(report.pages, 0);
}
