use anyhow::Result;
use httpmock::prelude::*;
use salary_stats::adapters::http::build_client;
use salary_stats::config::{HeadHunterConfig, SuperJobConfig};
use salary_stats::{AppConfig, HeadHunterSource, ReportBuilder, ReportError, SuperJobSource};
use serde_json::json;
use std::sync::Arc;

fn terms(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn headhunter(server: &MockServer) -> Result<HeadHunterSource> {
    let client = build_client(&AppConfig::default())?;
    let config = HeadHunterConfig {
        endpoint: server.url("/vacancies"),
        ..HeadHunterConfig::default()
    };
    Ok(HeadHunterSource::new(client, config))
}

fn superjob(server: &MockServer) -> Result<SuperJobSource> {
    let client = build_client(&AppConfig::default())?;
    let config = SuperJobConfig {
        endpoint: server.url("/2.0/vacancies/"),
        api_key: Some("v3.r.integration".to_string()),
        ..SuperJobConfig::default()
    };
    Ok(SuperJobSource::new(client, config)?)
}

#[tokio::test]
async fn test_headhunter_report_end_to_end() -> Result<()> {
    let server = MockServer::start();

    let python = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист Python");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "items": [
                    {"name": "Python dev", "salary": {"currency": "RUR", "from": 100000, "to": 100000}},
                    {"name": "Senior Python dev", "salary": {"currency": "RUR", "from": 100000, "to": null}},
                    {"name": "Remote Python dev", "salary": {"currency": "EUR", "from": 4000, "to": null}}
                ],
                "pages": 1,
                "found": 57
            }));
    });
    let ruby = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист Ruby");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "items": [{"name": "Ruby dev", "salary": {"currency": "USD", "from": 3000, "to": 4000}}],
                "pages": 1,
                "found": 4
            }));
    });

    let report = ReportBuilder::new(terms(&["Python", "Ruby"]))
        .build(Arc::new(headhunter(&server)?))
        .await?;

    python.assert();
    ruby.assert();

    assert_eq!(report.title, "HeadHunter Москва");
    assert_eq!(report.rows[0].cells(), ["Python", "57", "2", "110000"]);
    assert_eq!(report.rows[1].cells(), ["Ruby", "4", "0", "-"]);

    let rendered = report.render();
    assert!(rendered.starts_with("+HeadHunter Москва"));
    assert!(rendered.contains("| Python "));
    assert!(rendered.contains(" 110000 "));

    Ok(())
}

#[tokio::test]
async fn test_superjob_report_end_to_end() -> Result<()> {
    let server = MockServer::start();

    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("X-Api-App-Id", "v3.r.integration")
            .query_param("keyword", "программист Java")
            .query_param("page", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "objects": [
                    {"profession": "Java dev", "payment_from": 0, "payment_to": 100000},
                    {"profession": "Java lead", "payment_from": 0, "payment_to": 0}
                ],
                "more": true
            }));
    });
    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "программист Java")
            .query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "objects": [
                    {"profession": "Java intern", "payment_from": 50000, "payment_to": null}
                ],
                "more": false
            }));
    });

    let report = ReportBuilder::new(terms(&["Java"]))
        .build(Arc::new(superjob(&server)?))
        .await?;

    first_page.assert();
    second_page.assert();

    assert_eq!(report.title, "SuperJob Москва");
    // found counts every collected listing, usable only the ones with pay
    assert_eq!(report.rows[0].found, 3);
    assert_eq!(report.rows[0].usable, 2);
    // (0 + 100000) / 2 and 1.2 * 50000
    assert_eq!(report.rows[0].average, Some(55000));

    Ok(())
}

#[tokio::test]
async fn test_concurrent_report_matches_sequential() -> Result<()> {
    let server = MockServer::start();

    for (language, found, from) in [("Go", 10, 100000), ("Rust", 20, 200000), ("C", 30, 300000)] {
        server.mock(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", format!("программист {}", language));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "items": [{"salary": {"currency": "RUR", "from": from, "to": from}}],
                    "pages": 1,
                    "found": found
                }));
        });
    }

    let languages = terms(&["Go", "Rust", "C"]);
    let sequential = ReportBuilder::new(languages.clone())
        .build(Arc::new(headhunter(&server)?))
        .await?;
    let concurrent = ReportBuilder::new(languages)
        .with_concurrency(3)
        .build(Arc::new(headhunter(&server)?))
        .await?;

    assert_eq!(sequential, concurrent);
    assert_eq!(concurrent.rows[2].average, Some(300000));

    Ok(())
}

#[tokio::test]
async fn test_http_failure_aborts_report() -> Result<()> {
    let server = MockServer::start();

    let ok = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист PHP");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"items": [], "pages": 1, "found": 0}));
    });
    let failing = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист C++");
        then.status(502);
    });
    let never = server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "программист C#");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"items": [], "pages": 1, "found": 0}));
    });

    let result = ReportBuilder::new(terms(&["PHP", "C++", "C#"]))
        .build(Arc::new(headhunter(&server)?))
        .await;

    ok.assert();
    failing.assert();
    never.assert_hits(0);
    assert!(matches!(
        result,
        Err(ReportError::UnexpectedStatus { status: 502, .. })
    ));

    Ok(())
}
