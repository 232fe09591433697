//! Route behavior with alternate greeter registries and artist directories.

use std::sync::Arc;

use greeting_server::artists::{Artist, ArtistSearch, ArtistSearchModel};
use greeting_server::greeting::{Dispatcher, GreeterRegistry, GreetingKind};
use greeting_server::http::AppState;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

mod common;

fn state_with(registry: GreeterRegistry) -> AppState {
    AppState::new(
        Dispatcher::new(registry),
        Arc::new(greeting_server::artists::StaticArtistDirectory::new()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_formal_without_implementation() {
    let server = common::spawn_server(state_with(GreeterRegistry::empty())).await;

    let res = common::client()
        .get(server.url("/SayHello?name=John%20Doe"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.text().await.unwrap(),
        "No HelloService implementation was found"
    );
}

#[tokio::test]
async fn test_informal_without_implementation() {
    let server = common::spawn_server(state_with(GreeterRegistry::empty())).await;

    let res = common::client()
        .get(server.url("/SayHello2/John%20Doe"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.text().await.unwrap(),
        "No HelloService implementation was found"
    );
}

#[tokio::test]
async fn test_validation_precedes_dispatch() {
    let server = common::spawn_server(state_with(GreeterRegistry::empty())).await;

    let res = common::client().get(server.url("/SayHello")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_each_route_uses_its_own_key() {
    let registry = GreeterRegistry::with_kinds(&[GreetingKind::Informal]);
    let server = common::spawn_server(state_with(registry)).await;
    let client = common::client();

    let res = client
        .get(server.url("/SayHello?name=Ann"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let res = client.get(server.url("/SayHello2/Ann")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Hello! Ann");
}

/// Directory that echoes the requested name back as the only artist.
#[derive(Debug)]
struct EchoDirectory;

impl ArtistSearch for EchoDirectory {
    fn search(&self, artist_name: &str) -> ArtistSearchModel {
        ArtistSearchModel {
            artists: vec![Artist::new(artist_name, "/img1.png")],
        }
    }
}

#[tokio::test]
async fn test_search_receives_decoded_artist_name() {
    let state = AppState::new(Dispatcher::default(), Arc::new(EchoDirectory)).unwrap();
    let server = common::spawn_server(state).await;

    let res = common::client()
        .get(server.url("/searchArtist/Pink%20Floyd"))
        .header(ACCEPT, "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let model: ArtistSearchModel = res.json().await.unwrap();
    assert_eq!(model.artists, vec![Artist::new("Pink Floyd", "/img1.png")]);
}
