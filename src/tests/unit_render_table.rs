use crate::domain::DaRecord;
use crate::viewer::render::{render_csv, render_document, render_table, COLUMN_HEADERS};

fn create_mock_record(da_number: i64) -> DaRecord {
    DaRecord {
        da_number,
        detail_url: format!("https://example.com/da/{}", da_number),
        description: "Dwelling alterations".to_string(),
        submitted_date: "01/09/2025".to_string(),
        decision: "Pending".to_string(),
        categories: "Residential".to_string(),
        property_address: "1 Example St, Nowra NSW".to_string(),
        applicant: "J Citizen".to_string(),
        progress: "Under assessment".to_string(),
        fees: "Not required".to_string(),
        documents: "Not available".to_string(),
        contact_council: "Not required".to_string(),
    }
}

// an empty row collection still renders the full header row
// this is also what a failed fetch looks like to the user
#[test]
fn test_render_empty_table_has_header_only() {
    let html = render_table(&[]);

    // exactly one row: the header
    assert_eq!(html.matches("<tr").count(), 1);
    for header in COLUMN_HEADERS {
        assert!(html.contains(&format!("<th>{}</th>", header)));
    }
    assert!(html.contains("<tbody>\n</tbody>"));
}

#[test]
fn test_render_documents_sentinel_has_no_link() {
    let record = create_mock_record(1);
    let html = render_table(&[record]);

    assert!(html.contains("<td>Not available</td>"));
    assert!(!html.contains("View Documents"));
}

#[test]
fn test_render_documents_url_links_with_fixed_label() {
    let mut record = create_mock_record(1);
    record.documents = "https://example.com/doc.pdf".to_string();
    let html = render_table(&[record]);

    assert!(html.contains(
        r#"<a href="https://example.com/doc.pdf" target="_blank" rel="noopener">View Documents</a>"#
    ));
}

#[test]
fn test_render_detail_url_visible_text_is_the_url() {
    let record = create_mock_record(123);
    let html = render_table(&[record]);

    assert!(html.contains(
        r#"<a href="https://example.com/da/123" target="_blank" rel="noopener">https://example.com/da/123</a>"#
    ));
}

#[test]
fn test_render_rows_carry_da_number_identity() {
    let records = vec![create_mock_record(9), create_mock_record(5)];
    let html = render_table(&records);

    assert!(html.contains(r#"<tr data-da-number="9">"#));
    assert!(html.contains(r#"<tr data-da-number="5">"#));
}

// text fields are verbatim but escaped, never interpreted as markup
#[test]
fn test_render_escapes_html_in_text_fields() {
    let mut record = create_mock_record(1);
    record.description = "<script>alert('x')</script> & co".to_string();
    let html = render_table(&[record]);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co"));
}

#[test]
fn test_render_document_wraps_table_and_footer() {
    let html = render_document(&[create_mock_record(1)], "2025-09-30 12:00:00");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("Generated at 2025-09-30 12:00:00"));
}

#[test]
fn test_render_csv_matches_scraper_headers() {
    let mut record = create_mock_record(1);
    record.description = "Dwelling, alterations and \"additions\"".to_string();
    let csv = render_csv(&[record]);

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "DA_Number,Detail_URL,Description,Submitted_Date,Decision,Categories,\
             Property_Address,Applicant,Progress,Fees,Documents,Contact_Council"
        )
    );

    let row = lines.next().expect("Should have a data line");
    assert!(row.starts_with("1,https://example.com/da/1,"));
    // embedded commas and quotes force quoting with doubled quotes
    assert!(row.contains(r#""Dwelling, alterations and ""additions""""#));
    assert!(lines.next().is_none());
}
