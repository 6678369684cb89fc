use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "muxu_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn count(n: u32) -> FrameCount {
    FrameCount::new(n).unwrap()
}

#[test]
fn parse_distinguishes_urls_from_directories() {
    assert_eq!(
        AssetRoot::parse("https://cdn.example.com/hero/"),
        AssetRoot::Http(HttpRoot::new("https://cdn.example.com/hero"))
    );
    assert_eq!(
        AssetRoot::parse("https://cdn.example.com/hero/").to_string(),
        "https://cdn.example.com/hero"
    );
    assert_eq!(
        AssetRoot::parse("public/hero-frames"),
        AssetRoot::Dir(PathBuf::from("public/hero-frames"))
    );
    assert_eq!(
        AssetRoot::parse("http://x/a").locate("meta.json"),
        "http://x/a/meta.json"
    );
}

#[test]
fn frame_names_are_zero_padded_and_clamped() {
    assert_eq!(frame_file_name(count(439), FrameIndex(0)), "frame_0000.jpg");
    assert_eq!(frame_file_name(count(439), FrameIndex(42)), "frame_0042.jpg");
    assert_eq!(frame_file_name(count(439), FrameIndex(900)), "frame_0438.jpg");
}

#[test]
fn meta_uses_camel_case_frame_count() {
    let meta = parse_meta(br#"{ "frameCount": 120 }"#).unwrap();
    assert_eq!(meta.frame_count.get(), 120);
}

#[test]
fn zero_or_malformed_meta_is_rejected() {
    assert!(matches!(
        parse_meta(br#"{ "frameCount": 0 }"#),
        Err(MuxuError::Serde(_))
    ));
    assert!(parse_meta(b"not json").is_err());
    assert!(parse_meta(br#"{ "frames": 10 }"#).is_err());
}

#[test]
fn resolve_reads_meta_from_a_directory() {
    let tmp = temp_dir("source_meta");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join(META_FILE), br#"{"frameCount":12}"#).unwrap();

    let root = AssetRoot::dir(&tmp);
    assert_eq!(resolve_frame_count(&root, FrameCount::DEFAULT).get(), 12);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn resolve_falls_back_when_meta_is_missing() {
    let tmp = temp_dir("source_no_meta");
    std::fs::create_dir_all(&tmp).unwrap();

    let root = AssetRoot::dir(&tmp);
    assert_eq!(resolve_frame_count(&root, FrameCount::DEFAULT).get(), 439);
    assert!(root.read("frame_0000.jpg").is_err());

    std::fs::remove_dir_all(&tmp).ok();
}

/// Serve every GET on keep-alive connections, counting accepted connections.
fn keep_alive_server() -> (String, std::sync::Arc<std::sync::atomic::AtomicUsize>) {
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        sync::{Arc, atomic::{AtomicUsize, Ordering}},
    };

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepted);
    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { return };
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::spawn(move || {
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut stream = stream;
                loop {
                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
                        return;
                    }
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).unwrap_or(0) == 0 {
                            return;
                        }
                        if line.trim_end().is_empty() {
                            break;
                        }
                    }
                    let body: &[u8] = if request_line.contains(META_FILE) {
                        br#"{"frameCount":3}"#
                    } else {
                        b"frame-bytes"
                    };
                    write!(
                        stream,
                        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n",
                        body.len()
                    )
                    .unwrap();
                    stream.write_all(body).unwrap();
                    stream.flush().unwrap();
                }
            });
        }
    });
    (format!("http://{addr}/hero"), accepted)
}

#[test]
fn http_root_reuses_one_connection() {
    let (base, accepted) = keep_alive_server();
    let root = AssetRoot::parse(&base);

    assert_eq!(resolve_frame_count(&root, FrameCount::DEFAULT).get(), 3);
    let worker_copy = root.clone();
    assert_eq!(worker_copy.read("frame_0000.jpg").unwrap(), b"frame-bytes");
    assert_eq!(root.read("frame_0001.jpg").unwrap(), b"frame-bytes");

    assert_eq!(accepted.load(std::sync::atomic::Ordering::SeqCst), 1);
}
