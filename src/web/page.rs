//! Per-request HTML rendering for the check-in page.

use crate::core::window::CheckinWindow;
use crate::models::record::CheckinRecord;

/// One-line banner shown above the form; at most one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    /// Confirmation after a persisted check-in.
    Message(String),
    /// Validation or storage problem; nothing was written.
    Error(String),
}

/// Render the whole page: heading, optional flash, form, log table.
/// Every dynamic value goes through `escape_html`, including stored
/// rows, since names are free text.
pub fn render_page(
    window: &CheckinWindow,
    records: &[CheckinRecord],
    flash: Option<&Flash>,
) -> String {
    let mut html = String::with_capacity(2048 + records.len() * 128);

    html.push_str("<!doctype html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>Rolling Check-In</title>\n");
    html.push_str("  <link href=\"/app.css\" rel=\"stylesheet\">\n");
    html.push_str("  <script src=\"/app.js\"></script>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<div class=\"container\">\n");

    html.push_str("  <h1>Rolling Check-In (");
    html.push_str(&escape_html(&window.label_12h()));
    html.push_str(")</h1>\n");

    match flash {
        Some(Flash::Message(text)) => {
            html.push_str("  <div class=\"alert alert-info\">");
            html.push_str(&escape_html(text));
            html.push_str("</div>\n");
        }
        Some(Flash::Error(text)) => {
            html.push_str("  <div class=\"alert alert-danger\">");
            html.push_str(&escape_html(text));
            html.push_str("</div>\n");
        }
        None => {}
    }

    html.push_str("  <form method=\"POST\" action=\"/\" class=\"card\">\n");
    html.push_str("    <label for=\"name\">Full Name</label>\n");
    html.push_str("    <input type=\"text\" name=\"name\" id=\"name\" required>\n");
    html.push_str("    <label for=\"id\">ID Number (6 digits)</label>\n");
    html.push_str(
        "    <input type=\"text\" name=\"id\" id=\"id\" pattern=\"[0-9]{6}\" maxlength=\"6\" required>\n",
    );
    // Filled by app.js when the browser grants geolocation; otherwise
    // submitted blank and stored as N/A.
    html.push_str("    <input type=\"hidden\" name=\"lat\" id=\"lat\">\n");
    html.push_str("    <input type=\"hidden\" name=\"lon\" id=\"lon\">\n");
    html.push_str("    <button type=\"submit\">Check In</button>\n");
    html.push_str("  </form>\n");

    html.push_str("  <div class=\"card\">\n");
    html.push_str("    <h2>Check-In Log</h2>\n");
    html.push_str("    <table>\n");
    html.push_str(
        "      <thead><tr><th>Name</th><th>ID</th><th>Time</th><th>Latitude</th><th>Longitude</th></tr></thead>\n",
    );
    html.push_str("      <tbody>\n");
    for record in records {
        html.push_str("      <tr>");
        for cell in [
            &record.name,
            &record.id_number,
            &record.timestamp,
            &record.latitude,
            &record.longitude,
        ] {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("      </tbody>\n");
    html.push_str("    </table>\n");
    html.push_str("  </div>\n");

    html.push_str("</div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
