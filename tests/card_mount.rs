mod support;

use profilecard::api::client::ProfileClient;
use profilecard::card::{self, Container, Rendered, RowKind};
use profilecard::config::Settings;
use support::{Reply, StubServer};
use url::Url;

const FULL_RECORD: &str = r##"{"fullName":"Jane Doe","designation":"Pilot","email":"j@x.com","phone":"+880123","phoneLabel":"Mobile","photoURL":"https://cdn.example.com/jane.png","linkedin":"#","address":"Kurmitola, Dhaka"}"##;

fn page(query: &str) -> Url {
    Url::parse(&format!("https://cards.example.com/profile.html{query}")).expect("page url")
}

async fn mount_against(server: &StubServer, location: &Url) -> (Rendered, Container) {
    let client = ProfileClient::new(&server.base_url).expect("client");
    let mut container = Container::default();
    let rendered = card::mount(&client, &Settings::default(), location, &mut container).await;
    (rendered, container)
}

#[tokio::test]
async fn missing_token_renders_message_without_network() {
    let server = StubServer::start(|_| Reply::json(FULL_RECORD)).await;

    let (rendered, container) = mount_against(&server, &page("")).await;

    match rendered {
        Rendered::Error { message } => assert_eq!(message, "No token provided."),
        other => panic!("expected error render, got {other:?}"),
    }
    assert_eq!(
        container.inner_html(),
        "<div class=\"loading-error-message\"><p>No token provided.</p></div>"
    );
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn requests_profile_by_token() {
    let server = StubServer::start(|_| Reply::json(FULL_RECORD)).await;

    mount_against(&server, &page("?token=abc123")).await;

    assert_eq!(server.requests(), ["/exec?token=abc123"]);
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    for (status, code) in [
        ("404 Not Found", "404"),
        ("400 Bad Request", "400"),
        ("503 Service Unavailable", "503"),
    ] {
        let server = StubServer::start(move |_| Reply::status(status)).await;

        let (rendered, container) = mount_against(&server, &page("?token=abc")).await;

        let Rendered::Error { message } = rendered else {
            panic!("expected error render for {status}");
        };
        assert_eq!(message, format!("Could not load profile. (HTTP error {code})"));
        assert!(container.inner_html().contains(code));
        assert!(!container.inner_html().contains("profile-header"));
    }
}

#[tokio::test]
async fn domain_error_shows_server_message_only() {
    let server = StubServer::start(|_| Reply::json(r#"{"error":"Token expired"}"#)).await;

    let (rendered, container) = mount_against(&server, &page("?token=old")).await;

    match rendered {
        Rendered::Error { message } => assert_eq!(message, "Token expired"),
        other => panic!("expected error render, got {other:?}"),
    }
    assert_eq!(
        container.inner_html(),
        "<div class=\"loading-error-message\"><p>Token expired</p></div>"
    );
}

#[tokio::test]
async fn null_body_falls_back_to_not_found() {
    let server = StubServer::start(|_| Reply::json("null")).await;

    let (rendered, _) = mount_against(&server, &page("?token=abc")).await;

    match rendered {
        Rendered::Error { message } => assert_eq!(message, "Profile not found."),
        other => panic!("expected error render, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_generic_failure() {
    let server = StubServer::start(|_| Reply::json("<html>maintenance</html>")).await;

    let (rendered, _) = mount_against(&server, &page("?token=abc")).await;

    let Rendered::Error { message } = rendered else {
        panic!("expected error render");
    };
    assert!(message.starts_with("Could not load profile. (json error"));
}

#[tokio::test]
async fn record_without_name_is_rejected() {
    let server = StubServer::start(|_| Reply::json(r#"{"designation":"Pilot"}"#)).await;

    let (rendered, _) = mount_against(&server, &page("?token=abc")).await;

    let Rendered::Error { message } = rendered else {
        panic!("expected error render");
    };
    assert_eq!(
        message,
        "Could not load profile. (profile record is missing `fullName`)"
    );
}

#[tokio::test]
async fn full_record_renders_every_row() {
    let server = StubServer::start(|_| Reply::json(FULL_RECORD)).await;

    let (rendered, container) = mount_against(&server, &page("?token=abc")).await;

    let Rendered::Card(view) = rendered else {
        panic!("expected card render");
    };
    let kinds = view.rows.iter().map(|row| row.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [RowKind::Email, RowKind::Phone, RowKind::Location, RowKind::LinkedIn]
    );
    assert_eq!(view.save.file_name, "Jane_Doe.vcf");
    assert_eq!(
        view.save.endpoint.as_str(),
        format!("{}?action=vcf&token=abc", server.base_url)
    );

    let html = container.inner_html();
    assert!(html.contains("<h2>Jane Doe</h2>"));
    assert!(html.contains("<p class=\"role\">Pilot</p>"));
    assert!(html.contains("<p class=\"company\">Air Astra</p>"));
    assert!(html.contains("src=\"https://cdn.example.com/jane.png\""));
    assert!(html.contains("href=\"tel:+880123\""));
    assert!(html.contains("<span>+880123 (Mobile)</span>"));
    assert!(html.contains("keywords=Jane%20Doe%20Air%20Astra"));
    assert!(html.contains("query=Kurmitola%2C+Dhaka"));
}

#[tokio::test]
async fn record_without_address_or_phone_omits_those_rows() {
    let server = StubServer::start(|_| {
        Reply::json(r#"{"fullName":"Jane Doe","email":"j@x.com","linkedin":"https://www.linkedin.com/in/jane"}"#)
    })
    .await;

    let (rendered, container) = mount_against(&server, &page("?token=abc")).await;

    let Rendered::Card(view) = rendered else {
        panic!("expected card render");
    };
    let kinds = view.rows.iter().map(|row| row.kind).collect::<Vec<_>>();
    assert_eq!(kinds, [RowKind::Email, RowKind::LinkedIn]);

    let html = container.inner_html();
    assert!(!html.contains("tel:"));
    assert!(!html.contains("fa-map-marker-alt"));
    assert_eq!(html.matches("href=\"mailto:j@x.com\"").count(), 1);
    assert!(html.contains("href=\"https://www.linkedin.com/in/jane\""));
    assert!(html.contains("<p class=\"role\">Staff</p>"));
    assert!(html.contains("src=\"https://via.placeholder.com/120\""));
}

#[tokio::test]
async fn numeric_phone_renders_a_phone_row() {
    let server =
        StubServer::start(|_| Reply::json(r#"{"fullName":"Jane Doe","phone":8801234567}"#)).await;

    let (rendered, container) = mount_against(&server, &page("?token=abc")).await;

    assert!(matches!(rendered, Rendered::Card(_)));
    assert!(container.inner_html().contains("href=\"tel:8801234567\""));
    assert!(container.inner_html().contains("<span>8801234567</span>"));
}

#[tokio::test]
async fn record_without_email_has_no_mailto() {
    let server = StubServer::start(|_| Reply::json(r#"{"fullName":"Jane Doe","email":""}"#)).await;

    let (_, container) = mount_against(&server, &page("?token=abc")).await;

    assert!(!container.inner_html().contains("mailto:"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_generic_failure() {
    let base_url = support::closed_base_url().await;
    let client = ProfileClient::new(&base_url).expect("client");
    let mut container = Container::default();

    let rendered = card::mount(&client, &Settings::default(), &page("?token=abc"), &mut container).await;

    let Rendered::Error { message } = rendered else {
        panic!("expected error render");
    };
    assert!(message.starts_with("Could not load profile. (http error"));
}
