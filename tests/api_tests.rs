//! API integration tests.
//!
//! These run against a live server with a migrated database:
//! start one locally, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api";

/// Helper to create a livro and return its parsed body
async fn create_livro(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_livro_returns_record_with_id() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "O Hobbit",
            "autor": "J.R.R. Tolkien",
            "genero": "Fantasia",
            "preco": 35.50,
            "estoque": 75,
            "dataPublicacao": "1937-09-21"
        }),
    )
    .await;

    assert!(body["id"].is_number());
    assert_eq!(body["titulo"], "O Hobbit");
    assert_eq!(body["estoque"], 75);
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_create_livro_missing_fields_lists_every_error() {
    let client = Client::new();

    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({ "autor": "X" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors should be an array")
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"titulo"));
    assert!(fields.contains(&"genero"));
    assert!(fields.contains(&"preco"));
    assert!(!fields.contains(&"autor"));
}

#[tokio::test]
#[ignore]
async fn test_estoque_defaults_to_zero() {
    let client = Client::new();

    let body = create_livro(
        &client,
        json!({
            "titulo": "Dom Casmurro",
            "autor": "Machado de Assis",
            "genero": "Romance",
            "preco": 19.90
        }),
    )
    .await;

    assert_eq!(body["estoque"], 0);
}

#[tokio::test]
#[ignore]
async fn test_create_then_get_by_id_round_trips() {
    let client = Client::new();

    let created = create_livro(
        &client,
        json!({
            "titulo": "Grande Sertao: Veredas",
            "autor": "Joao Guimaraes Rosa",
            "genero": "Romance",
            "preco": 42.00,
            "estoque": 3
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();

    let response = client
        .get(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_get_livro_by_malformed_id_is_a_validation_error() {
    let client = Client::new();

    let response = client
        .get(format!("{}/livros/not-an-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    // malformed means "can't exist", which is 400, not 404
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0]["field"], "id");
}

#[tokio::test]
#[ignore]
async fn test_search_by_nome_is_case_insensitive_substring() {
    let client = Client::new();

    create_livro(
        &client,
        json!({
            "titulo": "O Senhor dos Aneis",
            "autor": "J.R.R. Tolkien",
            "genero": "Fantasia",
            "preco": 89.90,
            "estoque": 12
        }),
    )
    .await;

    let response = client
        .get(format!("{}/livros/nome/senhor", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let matches = body.as_array().expect("body should be an array");
    assert!(!matches.is_empty());
    assert!(matches
        .iter()
        .all(|l| l["titulo"].as_str().unwrap().to_lowercase().contains("senhor")));
}

#[tokio::test]
#[ignore]
async fn test_search_with_no_match_is_404_but_get_all_is_200() {
    let client = Client::new();

    // a search that finds nothing is a 404-equivalent...
    let response = client
        .get(format!("{}/livros/nome/zzz-no-match", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // ...while listing everything always succeeds, even when empty
    let response = client
        .get(format!("{}/livros", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_update_retains_unpatched_fields() {
    let client = Client::new();

    let created = create_livro(
        &client,
        json!({
            "titulo": "Capitaes da Areia",
            "autor": "Jorge Amado",
            "genero": "Romance",
            "preco": 29.90,
            "estoque": 8
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/livros/{}", BASE_URL, id))
        .json(&json!({ "preco": 24.90 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["preco"], 24.9);
    assert_eq!(updated["titulo"], "Capitaes da Areia");
    assert_eq!(updated["autor"], "Jorge Amado");
    assert_eq!(updated["estoque"], 8);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
#[ignore]
async fn test_invalid_update_leaves_record_unchanged() {
    let client = Client::new();

    let created = create_livro(
        &client,
        json!({
            "titulo": "Vidas Secas",
            "autor": "Graciliano Ramos",
            "genero": "Romance",
            "preco": 31.00,
            "estoque": 5
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/livros/{}", BASE_URL, id))
        .json(&json!({ "preco": -5 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let fetched: Value = client
        .get(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_id_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/livros/999999", BASE_URL))
        .json(&json!({ "preco": 10.00 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_is_final_and_second_delete_is_404() {
    let client = Client::new();

    let created = create_livro(
        &client,
        json!({
            "titulo": "A Hora da Estrela",
            "autor": "Clarice Lispector",
            "genero": "Romance",
            "preco": 27.50,
            "estoque": 2
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/livros/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_created_ids_are_distinct() {
    let client = Client::new();

    let mut ids = Vec::new();
    for i in 0..3 {
        let body = create_livro(
            &client,
            json!({
                "titulo": format!("Memorias Postumas vol. {}", i),
                "autor": "Machado de Assis",
                "genero": "Romance",
                "preco": 15.00,
                "estoque": 1
            }),
        )
        .await;
        ids.push(body["id"].as_i64().unwrap());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}
