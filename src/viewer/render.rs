use crate::domain::{DaRecord, DOCUMENTS_NOT_AVAILABLE};

/// Column headers, in the exact order the scraper exports them.
pub const COLUMN_HEADERS: [&str; 12] = [
    "DA_Number",
    "Detail_URL",
    "Description",
    "Submitted_Date",
    "Decision",
    "Categories",
    "Property_Address",
    "Applicant",
    "Progress",
    "Fees",
    "Documents",
    "Contact_Council",
];

/// Render the full table page. An empty slice still yields a complete
/// document with the header row, which is also the failure rendering.
pub fn render_document(records: &[DaRecord], generated_at: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Development Applications</title>\n");
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 1rem; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; vertical-align: top; }\n\
         th { background: #f0f0f0; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>Development Applications</h1>\n");
    html.push_str(&render_table(records));
    html.push_str(&format!(
        "<p class=\"footer\">Generated at {}</p>\n",
        escape_html(generated_at)
    ));
    html.push_str("</body>\n</html>\n");

    html
}

/// The table itself: a fixed header row plus one row per record.
pub fn render_table(records: &[DaRecord]) -> String {
    let mut html = String::new();

    html.push_str("<table>\n<thead>\n<tr>");
    for header in COLUMN_HEADERS {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for record in records {
        html.push_str(&render_row(record));
    }

    html.push_str("</tbody>\n</table>\n");

    html
}

// row identity is the DA number, carried as a data attribute
fn render_row(record: &DaRecord) -> String {
    let mut row = String::new();

    row.push_str(&format!("<tr data-da-number=\"{}\">", record.da_number));

    row.push_str(&format!("<td>{}</td>", record.da_number));

    // the detail link's visible text is the URL itself
    row.push_str(&format!(
        "<td><a href=\"{0}\" target=\"_blank\" rel=\"noopener\">{0}</a></td>",
        escape_html(&record.detail_url)
    ));

    for text in [
        &record.description,
        &record.submitted_date,
        &record.decision,
        &record.categories,
        &record.property_address,
        &record.applicant,
        &record.progress,
        &record.fees,
    ] {
        row.push_str(&format!("<td>{}</td>", escape_html(text)));
    }

    // linked only when a real URL is present, never for the sentinel
    match record.documents_link() {
        Some(url) => row.push_str(&format!(
            "<td><a href=\"{}\" target=\"_blank\" rel=\"noopener\">View Documents</a></td>",
            escape_html(url)
        )),
        None => row.push_str(&format!(
            "<td>{}</td>",
            escape_html(DOCUMENTS_NOT_AVAILABLE)
        )),
    }

    row.push_str(&format!("<td>{}</td>", escape_html(&record.contact_council)));
    row.push_str("</tr>\n");

    row
}

/// CSV export with the same headers and order as the scraper's own export.
pub fn render_csv(records: &[DaRecord]) -> String {
    let mut csv = String::new();

    csv.push_str(&COLUMN_HEADERS.join(","));
    csv.push('\n');

    for record in records {
        let fields = [
            record.da_number.to_string(),
            record.detail_url.to_owned(),
            record.description.to_owned(),
            record.submitted_date.to_owned(),
            record.decision.to_owned(),
            record.categories.to_owned(),
            record.property_address.to_owned(),
            record.applicant.to_owned(),
            record.progress.to_owned(),
            record.fees.to_owned(),
            record.documents.to_owned(),
            record.contact_council.to_owned(),
        ];

        let line: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }

    csv
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
