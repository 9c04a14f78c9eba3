#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

/// Command pre-wired with an isolated config home
pub fn chemeq(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("chemeq");
    cmd.env("CHEMEQ_HOME", home);
    cmd
}

/// Create a unique, empty config home inside the system temp dir
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chemeq_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a CSV file inside the test home and return its path
pub fn write_csv(home: &str, name: &str, content: &str) -> String {
    let path = PathBuf::from(home).join(name);
    fs::write(&path, content).expect("write test csv");
    path.to_string_lossy().to_string()
}

/// Pre-seed a stored session, as if a login already happened
pub fn write_session(home: &str, token: &str, username: &str) {
    let path = PathBuf::from(home).join("session.yml");
    fs::write(&path, format!("token: {}\nusername: {}\n", token, username))
        .expect("write session file");
}

pub fn session_file(home: &str) -> PathBuf {
    PathBuf::from(home).join("session.yml")
}

pub const SAMPLE_CSV: &str = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
P-101,Pump,120.0,80.0,240.0
P-102,Pump,121.0,90.5,260.0
V-201,Valve,0.0,85.25,250.0
";

/// Full upload response with raw rows, as the backend returns it
pub fn upload_response_json() -> String {
    r#"{
        "id": 7,
        "filename": "equipment.csv",
        "uploaded_at": "2024-01-01T12:00:00Z",
        "total_equipment_count": 3,
        "avg_flowrate": 120.5,
        "avg_pressure": 85.25,
        "avg_temperature": 250.0,
        "equipment_type_distribution": {"Pump": 2, "Valve": 1},
        "raw_data": [
            {"Equipment Name": "P-101", "Type": "Pump",
             "Flowrate": 120.0, "Pressure": 80.0, "Temperature": 240.0},
            {"Equipment Name": "P-102", "Type": "Pump",
             "Flowrate": 121.0, "Pressure": 90.5, "Temperature": 260.0},
            {"Equipment Name": "V-201", "Type": "Valve",
             "Flowrate": 0.0, "Pressure": 85.25, "Temperature": 250.0}
        ]
    }"#
    .to_string()
}

/// History projection (no raw_data) for a given id
pub fn history_entry_json(id: i64) -> String {
    format!(
        r#"{{
            "id": {id},
            "filename": "run_{id}.csv",
            "uploaded_at": "2024-01-0{day}T08:00:00Z",
            "total_equipment_count": 10,
            "avg_flowrate": 100.0,
            "avg_pressure": 10.0,
            "avg_temperature": 200.0,
            "equipment_type_distribution": {{"Pump": 10}}
        }}"#,
        id = id,
        day = (id % 9) + 1
    )
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn pdf(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "application/pdf",
            body: body.to_vec(),
        }
    }
}

/// Minimal one-connection-per-response HTTP stub standing in for the
/// Chemical Equipment Analyzer backend. Responses are served in order;
/// every request is recorded for later assertions.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        // Detached on purpose: the thread ends once all responses are served
        let _ = thread::spawn(move || {
            for resp in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                if let Some(req) = read_request(&mut stream) {
                    recorded.lock().unwrap().push(req);
                }
                let reason = match resp.status {
                    200 => "OK",
                    201 => "Created",
                    400 => "Bad Request",
                    401 => "Unauthorized",
                    404 => "Not Found",
                    _ => "Error",
                };
                let head = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    resp.status,
                    reason,
                    resp.content_type,
                    resp.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&resp.body);
                let _ = stream.flush();
            }
        });

        Self { addr, requests }
    }

    /// Base URL to pass via `--api-url`
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut tmp).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&tmp[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut authorization = None;
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "authorization" => authorization = Some(value.trim().to_string()),
            "content-length" => content_length = value.trim().parse().unwrap_or(0),
            _ => {}
        }
    }

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut tmp).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&tmp[..n]);
    }

    Some(RecordedRequest {
        method,
        path,
        authorization,
        body,
    })
}
