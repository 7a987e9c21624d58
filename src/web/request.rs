//! Minimal HTTP/1.1 request reading: request line, headers we care
//! about, body. Enough for one small form page, nothing more.

use std::io::Read;
use std::net::TcpStream;

const MAX_HEADER_BYTES: usize = 8 * 1024;
const MAX_BODY_BYTES: usize = 16 * 1024;

pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

/// Read one request off the stream. `Ok(None)` means the peer closed
/// (or sent nothing) before a request line arrived.
///
/// The stream carries read timeouts; a timeout mid-read ends the attempt
/// with whatever arrived instead of failing the connection.
pub fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<HttpRequest>> {
    let mut buf = [0u8; 4096];
    let mut data = Vec::<u8>::new();

    loop {
        let read = match stream.read(&mut buf) {
            Ok(read) => read,
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) =>
            {
                break;
            }
            Err(err) => return Err(err),
        };
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
        if find_header_end(&data).is_some() || data.len() > MAX_HEADER_BYTES {
            break;
        }
    }
    if data.is_empty() {
        return Ok(None);
    }

    let header_end = find_header_end(&data).unwrap_or(data.len()).min(data.len());
    let header_text = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let mut body = data[header_end..].to_vec();

    let mut lines = header_text.split("\r\n");
    let Some(request_line) = lines.next() else {
        return Ok(None);
    };
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("/").to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0)
        .min(MAX_BODY_BYTES);

    if content_length > body.len() {
        let mut remaining = content_length - body.len();
        while remaining > 0 {
            let read = match stream.read(&mut buf) {
                Ok(read) => read,
                Err(err)
                    if matches!(
                        err.kind(),
                        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                    ) =>
                {
                    break;
                }
                Err(err) => return Err(err),
            };
            if read == 0 {
                break;
            }
            let take = read.min(remaining);
            body.extend_from_slice(&buf[..take]);
            remaining -= take;
        }
    } else {
        body.truncate(content_length);
    }

    Ok(Some(HttpRequest { method, path, body }))
}

/// Byte offset just past the blank line separating headers from body.
fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

/// Strip the query string; empty or absurdly long paths collapse to "/".
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.split('?').next().unwrap_or(raw).trim();
    if raw.is_empty() || raw.len() > 256 {
        return "/".to_string();
    }
    raw.to_string()
}
