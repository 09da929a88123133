//! Loader tests against a throwaway local HTTP endpoint.
//!
//! Each test binds a one-shot TCP listener that answers a single request
//! with a canned response, so no external network is involved.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use realm_core::types::Category;
use realm_sync::{ArchiveLoader, ArchiveOrigin, ArchiveSource};

const EXPORT: &str = "\
Category,Name,Nickname,Rarity,Main Image URL,Extra Image 1,Extra Image 2,Extra Image 3,Tags,Story
Monster,Slime,The Goo,C,slime.png,s1.png,s2.png,s3.png,Slow,Jiggles.
Pet,Ember Fox,Kit,S,fox.png,,,,Fire,Warm.
";

/// Serve one canned HTTP response and return the URL to request.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: text/csv\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/export.csv")
}

fn remote(url: String) -> ArchiveLoader {
    ArchiveLoader::new(ArchiveSource::Remote { url }, 2000, 3)
}

#[tokio::test]
async fn no_url_yields_placeholder() {
    let loaded = ArchiveLoader::new(ArchiveSource::Placeholder, 2000, 2).load().await;
    assert_eq!(loaded.origin, ArchiveOrigin::Placeholder);
    assert_eq!(loaded.records.len(), 2 * Category::ALL.len());
}

#[tokio::test]
async fn remote_export_is_parsed() {
    let url = serve_once("200 OK", EXPORT).await;
    let loaded = remote(url).load().await;
    assert_eq!(loaded.origin, ArchiveOrigin::Remote);
    let names: Vec<_> = loaded.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Slime", "Ember Fox"]);
}

#[tokio::test]
async fn error_status_falls_back() {
    let url = serve_once("404 Not Found", "missing").await;
    let loaded = remote(url).load().await;
    assert_eq!(loaded.origin, ArchiveOrigin::Placeholder);
    assert_eq!(loaded.records.len(), 3 * Category::ALL.len());
}

#[tokio::test]
async fn empty_export_falls_back() {
    let url = serve_once("200 OK", "Category,Name\n").await;
    let loaded = remote(url).load().await;
    assert_eq!(loaded.origin, ArchiveOrigin::Placeholder);
}

#[tokio::test]
async fn unreachable_host_falls_back() {
    // Port 1 on loopback refuses connections.
    let loaded = remote("http://127.0.0.1:1/export.csv".to_string()).load().await;
    assert_eq!(loaded.origin, ArchiveOrigin::Placeholder);
    assert!(!loaded.records.is_empty());
}
