//! HTML templates for the booking page
//!
//! Plain `format!` rendering. Every piece of user text goes through
//! [`html_escape`].

use techfix_core::catalog::{
    COPYRIGHT, FOOTER_SECTIONS, HERO_HEADLINE, HERO_TAGLINE, SUCCESS_MESSAGE,
};
use techfix_core::{
    BookingView, FormField, FormState, RepairList, RepairRecord, Urgency, PAGE_DESCRIPTION,
    PAGE_TITLE, SERVICES, SHOP_NAME,
};
use uuid::Uuid;

/// How soon a still-visible banner asks again after its first check
pub const BANNER_RECHECK_MS: u64 = 250;

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --primary: #2563eb;
    --primary-dark: #1e40af;
    --text: #1f2937;
    --text-muted: #6b7280;
    --bg-alt: #f3f4f6;
    --border: #e5e7eb;
    --success: #059669;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    line-height: 1.6;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 20px;
}

/* Header */
header {
    background: var(--primary-dark);
    color: white;
    padding: 16px 0;
    position: sticky;
    top: 0;
    z-index: 10;
}

.header-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.logo {
    display: flex;
    gap: 8px;
    font-size: 1.4em;
    font-weight: bold;
}

nav ul {
    display: flex;
    gap: 24px;
    list-style: none;
}

nav a {
    color: white;
    text-decoration: none;
}

nav a:hover {
    text-decoration: underline;
}

/* Hero */
.hero {
    background: linear-gradient(135deg, var(--primary), var(--primary-dark));
    color: white;
    text-align: center;
    padding: 100px 0;
}

.hero h1 {
    font-size: 3em;
    margin-bottom: 16px;
}

.hero p {
    font-size: 1.25em;
    margin-bottom: 32px;
}

.cta-button {
    display: inline-block;
    background: white;
    color: var(--primary-dark);
    padding: 14px 36px;
    border-radius: 30px;
    font-weight: bold;
    text-decoration: none;
}

/* Sections */
section {
    padding: 80px 0;
}

.section-title {
    text-align: center;
    font-size: 2.2em;
    margin-bottom: 48px;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 24px;
}

.service-card {
    padding: 32px;
    border: 1px solid var(--border);
    border-radius: 12px;
    text-align: center;
}

.service-icon {
    font-size: 3em;
    margin-bottom: 12px;
}

/* Booking */
.booking-section {
    background: var(--bg-alt);
}

.booking-form {
    max-width: 640px;
    margin: 0 auto;
    background: white;
    padding: 40px;
    border-radius: 12px;
}

.form-group {
    margin-bottom: 20px;
}

.form-group label {
    display: block;
    font-weight: 600;
    margin-bottom: 6px;
}

.form-group input,
.form-group textarea,
.form-group select {
    width: 100%;
    padding: 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 1em;
}

.form-group textarea {
    min-height: 120px;
    resize: vertical;
}

.submit-button {
    width: 100%;
    padding: 14px;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    font-size: 1.1em;
    cursor: pointer;
}

.success-message {
    max-width: 640px;
    margin: 0 auto 20px;
    padding: 16px;
    background: #d1fae5;
    color: var(--success);
    border-radius: 8px;
    text-align: center;
}

/* Repairs */
.repairs-grid {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.repair-item {
    display: grid;
    grid-template-columns: 1fr auto auto;
    gap: 24px;
    align-items: center;
    padding: 20px;
    border: 1px solid var(--border);
    border-radius: 12px;
}

.repair-date {
    font-size: 12px;
    margin-top: 5px;
    color: #999;
}

.status-badge {
    padding: 6px 14px;
    border-radius: 20px;
    font-size: 0.9em;
    font-weight: 600;
}

.status-pending {
    background: #fef3c7;
    color: #92400e;
}

.status-progress {
    background: #dbeafe;
    color: #1e40af;
}

.status-completed {
    background: #d1fae5;
    color: #065f46;
}

.price {
    font-weight: bold;
    font-size: 1.2em;
    min-width: 60px;
    text-align: right;
}

/* Footer */
footer {
    background: #1f2937;
    color: #d1d5db;
    padding: 48px 0 24px;
}

.footer-content {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 32px;
}

.footer-section h3 {
    color: white;
    margin-bottom: 12px;
}

.copyright {
    margin-top: 20px;
    padding-top: 20px;
    border-top: 1px solid #555;
}

.error-message {
    max-width: 640px;
    margin: 40px auto;
    padding: 16px;
    background: #fee2e2;
    color: #991b1b;
    border-radius: 8px;
}
"#;

/// Full document for one view
pub fn page_html(view_id: Uuid, view: &BookingView, banner_delay_ms: u64) -> String {
    format!(
"<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <meta name=\"description\" content=\"{}\">
    <title>{}</title>
    <link rel=\"stylesheet\" href=\"/static/style.css\">
    <script src=\"https://unpkg.com/htmx.org@1.9.10\"></script>
</head>
<body>
{}
{}
{}
{}
{}
{}
</body>
</html>",
        html_escape(PAGE_DESCRIPTION),
        html_escape(PAGE_TITLE),
        header_html(),
        hero_html(),
        services_html(),
        booking_section_html(view_id, &view.form, view.banner.is_visible(), banner_delay_ms),
        repairs_section_html(&view.repairs, false),
        footer_html(),
    )
}

/// Reply to an HTMX submit: fresh booking section, plus the repairs list
/// swapped out-of-band.
pub fn submit_response_html(view_id: Uuid, view: &BookingView, banner_delay_ms: u64) -> String {
    format!(
        "{}\n{}",
        booking_section_html(view_id, &view.form, view.banner.is_visible(), banner_delay_ms),
        repairs_section_html(&view.repairs, true),
    )
}

pub fn header_html() -> String {
    format!(
        "<header>
    <div class=\"container\">
        <div class=\"header-content\">
            <div class=\"logo\">
                <span>\u{26A1}</span>
                <span>{}</span>
            </div>
            <nav>
                <ul>
                    <li><a href=\"#services\">Services</a></li>
                    <li><a href=\"#booking\">Book Repair</a></li>
                    <li><a href=\"#repairs\">Track Repairs</a></li>
                </ul>
            </nav>
        </div>
    </div>
</header>",
        html_escape(SHOP_NAME)
    )
}

pub fn hero_html() -> String {
    format!(
        "<section class=\"hero\">
    <div class=\"container\">
        <h1>{}</h1>
        <p>{}</p>
        <a class=\"cta-button\" href=\"#booking\" role=\"button\">Book a Repair</a>
    </div>
</section>",
        html_escape(HERO_HEADLINE),
        html_escape(HERO_TAGLINE)
    )
}

pub fn services_html() -> String {
    let cards: String = SERVICES
        .iter()
        .map(|s| {
            format!(
                "
            <div class=\"service-card\">
                <div class=\"service-icon\">{}</div>
                <h3>{}</h3>
                <p>{}</p>
            </div>",
                s.icon,
                html_escape(s.title),
                html_escape(s.summary)
            )
        })
        .collect();

    format!(
        "<section id=\"services\" class=\"services\">
    <div class=\"container\">
        <h2 class=\"section-title\">Our Services</h2>
        <div class=\"services-grid\">{}
        </div>
    </div>
</section>",
        cards
    )
}

/// The booking section: banner slot and the form bound to `form`
pub fn booking_section_html(
    view_id: Uuid,
    form: &FormState,
    banner_visible: bool,
    banner_delay_ms: u64,
) -> String {
    let fields = [
        text_input(view_id, form, FormField::Name, "Full Name *", "text", None),
        text_input(view_id, form, FormField::Email, "Email *", "email", None),
        text_input(view_id, form, FormField::Phone, "Phone Number *", "tel", None),
        text_input(
            view_id,
            form,
            FormField::Device,
            "Device Type *",
            "text",
            Some("e.g., iPhone 13, Samsung Galaxy S21"),
        ),
        issue_textarea(view_id, form),
        urgency_select(view_id, form.urgency),
    ]
    .join("\n");

    format!(
        "<section id=\"booking\" class=\"booking-section\">
    <div class=\"container\">
        <h2 class=\"section-title\">Book a Repair</h2>
        {banner}
        <form class=\"booking-form\" method=\"post\" action=\"/views/{id}/bookings\"
              hx-post=\"/views/{id}/bookings\" hx-target=\"#booking\" hx-swap=\"outerHTML show:#repairs:top\">
{fields}
            <button type=\"submit\" class=\"submit-button\">Submit Repair Request</button>
        </form>
    </div>
</section>",
        banner = banner_html(view_id, banner_visible, banner_delay_ms),
        id = view_id,
        fields = fields,
    )
}

/// Banner slot. While visible it asks the server again after `delay_ms`.
pub fn banner_html(view_id: Uuid, visible: bool, delay_ms: u64) -> String {
    if visible {
        format!(
            "<div id=\"success-banner\" class=\"success-message\" hx-get=\"/views/{}/banner\" hx-trigger=\"load delay:{}ms\" hx-swap=\"outerHTML\">{}</div>",
            view_id,
            delay_ms,
            html_escape(SUCCESS_MESSAGE)
        )
    } else {
        "<div id=\"success-banner\"></div>".to_string()
    }
}

fn change_binding(view_id: Uuid, field: FormField) -> String {
    format!(
        "hx-post=\"/views/{}/fields/{}\" hx-trigger=\"change\" hx-swap=\"none\"",
        view_id, field
    )
}

fn text_input(
    view_id: Uuid,
    form: &FormState,
    field: FormField,
    label: &str,
    input_type: &str,
    placeholder: Option<&str>,
) -> String {
    let placeholder = placeholder
        .map(|p| format!(" placeholder=\"{}\"", html_escape(p)))
        .unwrap_or_default();
    format!(
        "            <div class=\"form-group\">
                <label for=\"{name}\">{label}</label>
                <input type=\"{ty}\" id=\"{name}\" name=\"{name}\"{placeholder} value=\"{value}\" required {binding}>
            </div>",
        name = field,
        label = html_escape(label),
        ty = input_type,
        placeholder = placeholder,
        value = html_escape(form.value(field)),
        binding = change_binding(view_id, field),
    )
}

fn issue_textarea(view_id: Uuid, form: &FormState) -> String {
    format!(
        "            <div class=\"form-group\">
                <label for=\"issue\">Describe the Issue *</label>
                <textarea id=\"issue\" name=\"issue\" placeholder=\"Please describe the problem with your device...\" required {}>{}</textarea>
            </div>",
        change_binding(view_id, FormField::Issue),
        html_escape(&form.issue)
    )
}

fn urgency_select(view_id: Uuid, current: Urgency) -> String {
    let options: String = Urgency::ALL
        .iter()
        .map(|u| {
            let selected = if *u == current { " selected" } else { "" };
            format!(
                "\n                    <option value=\"{}\"{}>{}</option>",
                u,
                selected,
                html_escape(u.label())
            )
        })
        .collect();

    format!(
        "            <div class=\"form-group\">
                <label for=\"urgency\">Urgency</label>
                <select id=\"urgency\" name=\"urgency\" {}>{}
                </select>
            </div>",
        change_binding(view_id, FormField::Urgency),
        options
    )
}

/// The repairs list, in store order
pub fn repairs_section_html(repairs: &RepairList, out_of_band: bool) -> String {
    let items: String = repairs.iter().map(repair_item_html).collect();
    let oob = if out_of_band { " hx-swap-oob=\"true\"" } else { "" };

    format!(
        "<section id=\"repairs\" class=\"repairs-list\"{}>
    <div class=\"container\">
        <h2 class=\"section-title\">Current Repairs</h2>
        <div class=\"repairs-grid\">{}
        </div>
    </div>
</section>",
        oob, items
    )
}

pub fn repair_item_html(repair: &RepairRecord) -> String {
    format!(
        "
            <div class=\"repair-item\" data-repair-id=\"{}\">
                <div class=\"repair-info\">
                    <h4>{}</h4>
                    <p>{}</p>
                    <p>{}</p>
                    <p class=\"repair-date\">{}</p>
                </div>
                <div class=\"status-badge status-{}\">{}</div>
                <div class=\"price\">{}</div>
            </div>",
        repair.id,
        html_escape(&repair.device),
        html_escape(&repair.customer),
        html_escape(&repair.issue),
        repair.date_label(),
        repair.status.slug(),
        repair.status.label(),
        html_escape(&repair.price_label()),
    )
}

pub fn footer_html() -> String {
    let sections: String = FOOTER_SECTIONS
        .iter()
        .map(|(heading, lines)| {
            let lines: String = lines
                .iter()
                .map(|l| format!("\n                <p>{}</p>", html_escape(l)))
                .collect();
            format!(
                "
            <div class=\"footer-section\">
                <h3>{}</h3>{}
            </div>",
                html_escape(heading),
                lines
            )
        })
        .collect();

    format!(
        "<footer>
    <div class=\"container\">
        <div class=\"footer-content\">{}
        </div>
        <p class=\"copyright\">{}</p>
    </div>
</footer>",
        sections,
        html_escape(COPYRIGHT)
    )
}

/// Error fragment, usable as a page body or an HTMX swap
pub fn error_html(message: &str) -> String {
    format!(
        "<div class=\"error-message\" role=\"alert\">
    <p>{}</p>
    <p><a href=\"/\">Start over</a></p>
</div>",
        html_escape(message)
    )
}

/// HTML-escape a string to prevent XSS in hand-built HTML responses.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
