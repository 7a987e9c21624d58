//! The web front end: one page, two static assets, a sequential
//! accept loop. No routing table, no framework; the surface is small
//! enough to match on the path directly.

mod assets;
mod form;
mod page;
mod request;
mod response;

pub use page::{Flash, escape_html, render_page};

use crate::core::checkin::{CheckinLogic, CheckinOutcome, CheckinSubmission};
use crate::core::clock::Clock;
use crate::core::window::CheckinWindow;
use crate::errors::{AppError, AppResult};
use crate::store::CheckinStore;
use crate::ui::messages;
use form::submission_from_body;
use request::{normalize_path, read_request};
use response::{
    STATUS_OK, write_html, write_method_not_allowed, write_not_found, write_response,
};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

/// Shown on the page when an append fails; the real error goes to the
/// console, not to the visitor.
pub const ERR_STORE_APPEND: &str = "Could not record your check-in.";
/// Shown when the log cannot be read back.
pub const ERR_STORE_LOAD: &str = "Could not load the check-in log.";

/// Everything a request handler needs, owned in one place and passed
/// down explicitly.
pub struct AppState {
    pub store: CheckinStore,
    pub window: CheckinWindow,
    pub clock: Box<dyn Clock>,
}

/// Bind and serve until the process is stopped. Connections are handled
/// one at a time; the append lock in the store is the only shared state.
pub fn serve(state: AppState, addr: &str) -> AppResult<()> {
    let listener = TcpListener::bind(addr).map_err(|err| match err.kind() {
        std::io::ErrorKind::AddrInUse => {
            AppError::Server(format!("address {addr} is already in use"))
        }
        _ => AppError::Server(format!("cannot listen on '{addr}': {err}")),
    })?;
    let local = listener.local_addr().map(|a| a.to_string()).unwrap_or_else(|_| addr.to_string());

    messages::info(format!(
        "Check-in page on http://{} (window {}, log {})",
        local,
        state.window,
        state.store.path().display()
    ));

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(err) = handle_connection(stream, &state) {
                    messages::warning(format!("connection error: {err}"));
                }
            }
            Err(_) => continue,
        }
    }

    Ok(())
}

fn handle_connection(mut stream: TcpStream, state: &AppState) -> std::io::Result<()> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream)? else {
        return Ok(());
    };

    let method = request.method.as_str();
    if method != "GET" && method != "HEAD" && method != "POST" {
        return write_method_not_allowed(&mut stream);
    }
    let head_only = method == "HEAD";

    let path = normalize_path(&request.path);
    match path.as_str() {
        "/" | "/index.html" => {
            if method == "POST" {
                let submission = submission_from_body(&request.body);
                let flash = process_submission(state, &submission);
                respond_page(&mut stream, state, Some(flash), false)
            } else {
                respond_page(&mut stream, state, None, head_only)
            }
        }
        "/app.css" if method != "POST" => write_response(
            &mut stream,
            STATUS_OK,
            "text/css; charset=utf-8",
            assets::APP_CSS.as_bytes(),
            head_only,
        ),
        "/app.js" if method != "POST" => write_response(
            &mut stream,
            STATUS_OK,
            "application/javascript; charset=utf-8",
            assets::APP_JS.as_bytes(),
            head_only,
        ),
        _ => write_not_found(&mut stream),
    }
}

/// Run one submission through the pipeline and turn the outcome into
/// the flash for the re-rendered page.
fn process_submission(state: &AppState, submission: &CheckinSubmission) -> Flash {
    match CheckinLogic::apply(&state.store, &state.window, state.clock.as_ref(), submission) {
        Ok(CheckinOutcome::Accepted { record, message }) => {
            messages::success(format!(
                "{} ({}) checked in at {}",
                record.name, record.id_number, record.timestamp
            ));
            Flash::Message(message)
        }
        Ok(CheckinOutcome::Rejected { error }) => {
            messages::warning(format!("rejected check-in: {error}"));
            Flash::Error(error)
        }
        Err(err) => {
            messages::error(format!("could not record check-in: {err}"));
            Flash::Error(ERR_STORE_APPEND.to_string())
        }
    }
}

/// Render and send the page. When the log itself cannot be read, the
/// load error replaces whatever flash the submission produced and the
/// table renders empty.
fn respond_page(
    stream: &mut TcpStream,
    state: &AppState,
    flash: Option<Flash>,
    head_only: bool,
) -> std::io::Result<()> {
    let (records, flash) = match state.store.load_all() {
        Ok(records) => (records, flash),
        Err(err) => {
            messages::error(format!("could not load check-in log: {err}"));
            (Vec::new(), Some(Flash::Error(ERR_STORE_LOAD.to_string())))
        }
    };

    let html = render_page(&state.window, &records, flash.as_ref());
    write_html(stream, &html, head_only)
}
