use contact_gatherer::config::Settings;
use contact_gatherer::crawler::Crawler;
use contact_gatherer::gatherer::gather_all;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates test settings with a short timeout
fn create_test_settings(max_pages: usize) -> Settings {
    Settings {
        user_agent: "TestBot/1.0".to_string(),
        request_timeout: 5.0,
        max_pages,
        concurrency: 1,
    }
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Paths requested from the mock server, in order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_full_gather_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <a href="/products">Products</a>
            <a href="/contact">Contact</a>
            <a href="http://evil.test/x">Elsewhere</a>
            <a href="https://www.facebook.com/acme">Facebook</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/contact",
        r#"<html><body>
            <p>reach us at info@acme.test or call +1 (555) 123-4567</p>
            <a href="https://www.linkedin.com/company/acme">LinkedIn</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/products",
        r#"<html><body><p>Orders: orders@acme.test</p></body></html>"#.to_string(),
    )
    .await;

    let records = gather_all(&[base_url.clone()], &create_test_settings(5))
        .await
        .expect("Gather failed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.url, base_url);
    assert_eq!(record.email, "info@acme.test; orders@acme.test");
    assert_eq!(record.phone, "+15551234567");
    assert_eq!(record.facebook_profile, "https://www.facebook.com/acme");
    assert_eq!(
        record.linkedin_profile,
        "https://www.linkedin.com/company/acme"
    );
    assert_eq!(record.instagram_profile, "");
    assert_eq!(record.twitter_x_profile, "");

    // Contact page is crawled before the products page
    assert_eq!(
        requested_paths(&mock_server).await,
        vec!["/", "/contact", "/products"]
    );
}

#[tokio::test]
async fn test_page_budget_respected() {
    let mock_server = MockServer::start().await;

    let links: String = (0..10)
        .map(|i| format!(r#"<a href="/page{}">Page {}</a>"#, i, i))
        .collect();
    mount_page(&mock_server, "/", format!("<html><body>{}</body></html>", links)).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html><body>{}</body></html>",
            links
        )))
        .mount(&mock_server)
        .await;

    let crawler = Crawler::from_settings(&create_test_settings(3)).expect("client");
    let outcome = crawler.crawl(&mock_server.uri()).await;

    assert_eq!(outcome.visited.len(), 3);
    assert_eq!(outcome.pages_fetched(), 3);
    assert_eq!(requested_paths(&mock_server).await.len(), 3);
}

#[tokio::test]
async fn test_failed_pages_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/about">About</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/about", "team@acme.test".to_string()).await;

    let records = gather_all(&[mock_server.uri()], &create_test_settings(5))
        .await
        .expect("Gather failed");

    assert_eq!(records[0].email, "team@acme.test");

    let paths = requested_paths(&mock_server).await;
    assert_eq!(paths, vec!["/", "/about", "/broken"]);
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello@acme.test"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = gather_all(&[mock_server.uri()], &create_test_settings(5))
        .await
        .expect("Gather failed");

    assert_eq!(records[0].email, "hello@acme.test");
}

#[tokio::test]
async fn test_unreachable_site_still_produces_record() {
    // Nothing listens on port 9 of the loopback interface
    let url = "http://127.0.0.1:9".to_string();

    let records = gather_all(&[url.clone()], &create_test_settings(5))
        .await
        .expect("Gather failed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, url);
    assert_eq!(records[0].email, "");
    assert_eq!(records[0].phone, "");
}

#[tokio::test]
async fn test_multiple_sites_in_input_order() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    mount_page(&first, "/", "first@one.test".to_string()).await;
    mount_page(&second, "/", "second@two.test".to_string()).await;

    let settings = Settings {
        concurrency: 2,
        ..create_test_settings(2)
    };
    let records = gather_all(&[second.uri(), first.uri()], &settings)
        .await
        .expect("Gather failed");

    assert_eq!(records[0].email, "second@two.test");
    assert_eq!(records[1].email, "first@one.test");
}

#[tokio::test]
async fn test_empty_page_is_not_counted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let crawler = Crawler::from_settings(&create_test_settings(5)).expect("client");
    let outcome = crawler.crawl(&mock_server.uri()).await;

    assert_eq!(outcome.visited.len(), 1);
    assert_eq!(outcome.pages_fetched(), 0);
}
