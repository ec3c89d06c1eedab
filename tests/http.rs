use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const CATEGORY: &str = "Breakfast Foods";
const ITEMS: [&str; 4] = ["Pancakes", "Waffles", "Omelette", "Granola"];

#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    day: u16,
    category: String,
    items: Vec<String>,
    already_submitted: bool,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    day: u16,
    recorded: bool,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_path(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "quiz_app_http_{tag}_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

// Days 1 and 2 carry the same quiz so a midnight flip between spawning
// the server and issuing requests cannot fail the run.
fn write_catalog() -> String {
    let path = unique_path("catalog");
    let entries: Vec<serde_json::Value> = (1..=2)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "category": CATEGORY,
                "items": ITEMS,
            })
        })
        .collect();
    let document = serde_json::json!({ "categories": entries });
    std::fs::write(&path, serde_json::to_vec_pretty(&document).unwrap())
        .expect("write catalog file");
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_quiz_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", unique_path("gate"))
        .env("QUIZ_CATALOG_PATH", write_catalog())
        .env("QUIZ_EPOCH", Utc::now().date_naive().to_string())
        .env("QUIZ_TIMEZONE", "UTC")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_session(client: &Client, base_url: &str) -> String {
    let session: SessionResponse = client
        .post(format!("{base_url}/api/session"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(session.session_id.starts_with("session-"));
    session.session_id
}

async fn fetch_today(client: &Client, base_url: &str, session_id: &str) -> TodayResponse {
    client
        .get(format!(
            "{base_url}/api/today?session_id={session_id}"
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn submit_body(session_id: &str, rankings: &[&str]) -> serde_json::Value {
    serde_json::json!({ "session_id": session_id, "rankings": rankings })
}

#[tokio::test]
async fn http_today_serves_a_shuffled_permutation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!((1..=365).contains(&today.day));
    assert_eq!(today.category, CATEGORY);
    assert!(!today.date.is_empty());
    assert!(!today.already_submitted);

    let mut returned = today.items.clone();
    returned.sort();
    let mut expected: Vec<String> = ITEMS.iter().map(|item| item.to_string()).collect();
    expected.sort();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn http_submit_closes_the_gate_for_the_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session_id = create_session(&client, &server.base_url).await;

    let before = fetch_today(&client, &server.base_url, &session_id).await;
    assert!(!before.already_submitted);

    let mut rankings: Vec<&str> = ITEMS.to_vec();
    rankings.reverse();
    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&submit_body(&session_id, &rankings))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let submitted: SubmitResponse = response.json().await.unwrap();
    assert!(submitted.recorded);
    assert_eq!(submitted.day, before.day);

    let after = fetch_today(&client, &server.base_url, &session_id).await;
    assert!(after.already_submitted);

    let second = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&submit_body(&session_id, &rankings))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::CONFLICT);
}

#[tokio::test]
async fn http_submit_rejects_tampered_rankings() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session_id = create_session(&client, &server.base_url).await;

    let dropped = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&submit_body(&session_id, &ITEMS[..3]))
        .send()
        .await
        .unwrap();
    assert_eq!(dropped.status(), reqwest::StatusCode::BAD_REQUEST);

    let duplicated = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&submit_body(
            &session_id,
            &[ITEMS[0], ITEMS[0], ITEMS[2], ITEMS[3]],
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicated.status(), reqwest::StatusCode::BAD_REQUEST);

    // A rejected submission must not close the gate.
    let today = fetch_today(&client, &server.base_url, &session_id).await;
    assert!(!today.already_submitted);
}

#[tokio::test]
async fn http_submit_requires_a_session() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .json(&submit_body("", &ITEMS.to_vec()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
