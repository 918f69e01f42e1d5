//! End-to-end tests of the HTTP surface.

use std::sync::Arc;

use album_service::proto::ListOfAlbums;
use album_service::{Album, AlbumStore};
use prost::Message;
use reqwest::StatusCode;

mod common;

fn seeded(count: usize) -> Arc<AlbumStore> {
    Arc::new(AlbumStore::seed(count, 56.99))
}

#[tokio::test]
async fn test_catalogue_scenario() {
    let (addr, shutdown) = common::start_service(common::test_config(), seeded(3)).await;
    let client = common::client();
    let base = format!("http://{}", addr);

    // All albums, in seed order
    let res = client.get(format!("{}/json/albums", base)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let albums: Vec<Album> = res.json().await.unwrap();
    assert_eq!(
        albums,
        vec![
            Album::new("1", "Album 1", "Artist 1", 56.99),
            Album::new("2", "Album 2", "Artist 2", 56.99),
            Album::new("3", "Album 3", "Artist 3", 56.99),
        ]
    );

    // One album by id
    let res = client.get(format!("{}/albums/2", base)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let album: Album = res.json().await.unwrap();
    assert_eq!(album, albums[1]);

    // Create
    let res = client
        .post(format!("{}/albums", base))
        .json(&serde_json::json!({"id": "4", "title": "X", "artist": "Y", "price": 10.5}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Album = res.json().await.unwrap();
    assert_eq!(created, Album::new("4", "X", "Y", 10.5));

    let res = client.get(format!("{}/albums/4", base)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Album>().await.unwrap(), created);

    let res = client.get(format!("{}/json/albums", base)).send().await.unwrap();
    let albums: Vec<Album> = res.json().await.unwrap();
    assert_eq!(albums.len(), 4);
    assert_eq!(albums.last(), Some(&created));

    // Unknown id
    let res = client.get(format!("{}/albums/99", base)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), r#"{"message":"album not found"}"#);

    shutdown.trigger();
}

#[tokio::test]
async fn test_every_local_format_lists_the_store() {
    let (addr, shutdown) = common::start_service(common::test_config(), seeded(2)).await;
    let client = common::client();

    let res = client.get(format!("http://{}/xml/albums", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/xml; charset=utf-8");
    let text = res.text().await.unwrap();
    assert!(text.contains("<album><id>2</id><title>Album 2</title>"));

    let res = client.get(format!("http://{}/yaml/albums", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let albums: Vec<Album> = serde_yaml::from_str(&res.text().await.unwrap()).unwrap();
    assert_eq!(albums.len(), 2);

    let res = client.get(format!("http://{}/proto/albums", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/x-protobuf");
    let list = ListOfAlbums::decode(res.bytes().await.unwrap()).unwrap();
    assert_eq!(list.albums[0].title, "Album 1");
    assert_eq!(list.albums[1].price, 56.99);

    shutdown.trigger();
}

#[tokio::test]
async fn test_duplicate_ids_resolve_to_first() {
    let (addr, shutdown) = common::start_service(common::test_config(), seeded(0)).await;
    let client = common::client();

    for title in ["First", "Second"] {
        let res = client
            .post(format!("http://{}/albums", addr))
            .json(&Album::new("dup", title, "A", 1.0))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client.get(format!("http://{}/albums/dup", addr)).send().await.unwrap();
    assert_eq!(res.json::<Album>().await.unwrap().title, "First");

    shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body_leaves_store_unchanged() {
    let store = seeded(1);
    let (addr, shutdown) = common::start_service(common::test_config(), store.clone()).await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/albums", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"].is_string());
    assert_eq!(store.len().await, 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_oversized_body_gets_json_413() {
    let mut config = common::test_config();
    config.limits.max_body_size = 16;
    let store = seeded(1);
    let (addr, shutdown) = common::start_service(config, store.clone()).await;
    let client = common::client();

    // reqwest sends Content-Length for a sized body
    let res = client
        .post(format!("http://{}/albums", addr))
        .json(&Album::new("2", "A long title", "Someone", 1.0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.headers()["content-type"], "application/json");
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("request body too large"));
    assert_eq!(store.len().await, 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_creates_and_reads() {
    let store = seeded(10);
    let (addr, shutdown) = common::start_service(common::test_config(), store.clone()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = format!("http://{}", addr);
        tasks.push(tokio::spawn(async move {
            let created = client
                .post(format!("{}/albums", url))
                .json(&Album::new(format!("new-{}", i), "T", "A", 2.5))
                .send()
                .await
                .unwrap()
                .status();
            let listed = client
                .get(format!("{}/proto/albums", url))
                .send()
                .await
                .unwrap()
                .status();
            (created, listed)
        }));
    }
    for task in tasks {
        let (created, listed) = task.await.unwrap();
        assert_eq!(created, StatusCode::CREATED);
        assert_eq!(listed, StatusCode::OK);
    }
    assert_eq!(store.len().await, 30);

    shutdown.trigger();
}
