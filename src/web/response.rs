//! HTTP response writing with the fixed header set every reply shares.

use std::io::Write;
use std::net::TcpStream;

pub const STATUS_OK: &str = "200 OK";
pub const STATUS_NOT_FOUND: &str = "404 Not Found";
pub const STATUS_METHOD_NOT_ALLOWED: &str = "405 Method Not Allowed";

pub fn write_response(
    stream: &mut TcpStream,
    status: &str,
    content_type: &str,
    body: &[u8],
    head_only: bool,
) -> std::io::Result<()> {
    let mut headers = String::new();
    headers.push_str("HTTP/1.1 ");
    headers.push_str(status);
    headers.push_str("\r\n");
    headers.push_str("Content-Type: ");
    headers.push_str(content_type);
    headers.push_str("\r\n");
    // The log changes between requests, so nothing is cacheable.
    headers.push_str("Cache-Control: no-store\r\n");
    headers.push_str("X-Content-Type-Options: nosniff\r\n");
    headers.push_str(
        "Content-Security-Policy: default-src 'self'; style-src 'self'; script-src 'self';\r\n",
    );
    headers.push_str("Content-Length: ");
    headers.push_str(&body.len().to_string());
    headers.push_str("\r\n\r\n");

    stream.write_all(headers.as_bytes())?;
    if !head_only {
        stream.write_all(body)?;
    }
    Ok(())
}

pub fn write_html(stream: &mut TcpStream, body: &str, head_only: bool) -> std::io::Result<()> {
    write_response(
        stream,
        STATUS_OK,
        "text/html; charset=utf-8",
        body.as_bytes(),
        head_only,
    )
}

pub fn write_not_found(stream: &mut TcpStream) -> std::io::Result<()> {
    write_response(
        stream,
        STATUS_NOT_FOUND,
        "text/plain; charset=utf-8",
        b"Not found.",
        false,
    )
}

pub fn write_method_not_allowed(stream: &mut TcpStream) -> std::io::Result<()> {
    write_response(
        stream,
        STATUS_METHOD_NOT_ALLOWED,
        "text/plain; charset=utf-8",
        b"Method not allowed.",
        false,
    )
}
