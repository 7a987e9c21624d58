#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::{Child, Stdio};
use std::time::{Duration, Instant};

pub fn rci() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique check-in log path inside the system temp dir and
/// remove any leftover from a previous run.
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.csv", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

pub fn pick_free_port() -> Option<u16> {
    match TcpListener::bind(("127.0.0.1", 0)) {
        Ok(listener) => listener.local_addr().ok().map(|addr| addr.port()),
        Err(_) => None,
    }
}

/// Spawn `rcheckin serve` on a free port with the given store and window.
/// Returns `None` when the sandbox disallows TCP bind() on loopback.
pub fn spawn_server(store_path: &str, window: &str) -> Option<(Child, u16)> {
    let port = pick_free_port()?;
    let child = std::process::Command::new(env!("CARGO_BIN_EXE_rcheckin"))
        .args([
            "--file",
            store_path,
            "serve",
            "--addr",
            &format!("127.0.0.1:{port}"),
            "--window",
            window,
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn rcheckin serve");

    wait_for_server(port);
    Some((child, port))
}

pub fn stop_server(mut child: Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn wait_for_server(port: u16) {
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return;
        }
        if Instant::now() >= deadline {
            panic!("server did not become reachable on 127.0.0.1:{port}");
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

/// Send one raw HTTP request, return (status line, body).
pub fn http_exchange(port: u16, request: &str) -> (String, String) {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connect");
    let _ = stream.set_read_timeout(Some(Duration::from_millis(700)));
    let _ = stream.set_write_timeout(Some(Duration::from_millis(700)));
    stream.write_all(request.as_bytes()).expect("write request");
    stream.flush().expect("flush request");

    let mut reader = BufReader::new(stream);
    let mut status_line = String::new();
    reader
        .read_line(&mut status_line)
        .expect("read status line");

    let mut content_length: Option<usize> = None;
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line).expect("read header");
        if read == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        if let Some((key, value)) = trimmed.split_once(':')
            && key.trim().eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse::<usize>().ok();
        }
    }

    let mut body = Vec::new();
    if let Some(len) = content_length {
        body.resize(len, 0);
        reader.read_exact(&mut body).expect("read body");
    } else {
        reader.read_to_end(&mut body).expect("read body");
    }

    (status_line, String::from_utf8_lossy(&body).to_string())
}

pub fn http_get(port: u16, path: &str) -> (String, String) {
    http_exchange(
        port,
        &format!("GET {path} HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\n\r\n"),
    )
}

pub fn http_post_form(port: u16, path: &str, form: &str) -> (String, String) {
    http_exchange(
        port,
        &format!(
            "POST {path} HTTP/1.1\r\nHost: 127.0.0.1\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{form}",
            form.len()
        ),
    )
}
