//! HTML rendering for the listing page. Plain string building; the page is
//! a single table plus the submission form and export/clear links.

use crate::db::Response;

const FIELD_NAMES: [&str; 6] = ["name", "hobby", "education", "interest", "job", "happiness"];

/// Render the full listing document: submission form, one table row per
/// response, links to the export and clear actions.
pub fn render_index(responses: &[Response]) -> String {
    let mut page = String::with_capacity(1024 + responses.len() * 256);
    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Survey Responses</title>\n</head>\n<body>\n\
         <h1>Survey Responses</h1>\n",
    );

    page.push_str("<form method=\"post\" action=\"/\">\n");
    for field in FIELD_NAMES {
        page.push_str(&format!(
            "  <label>{field}: <input type=\"text\" name=\"{field}\"></label><br>\n"
        ));
    }
    page.push_str("  <button type=\"submit\">Submit</button>\n</form>\n");

    page.push_str(
        "<table border=\"1\">\n<tr><th>ID</th><th>Name</th><th>Hobby</th>\
         <th>Education</th><th>Interest</th><th>Job</th><th>Happiness</th></tr>\n",
    );
    for resp in responses {
        page.push_str("<tr>");
        page.push_str(&format!("<td>{}</td>", resp.id));
        push_cell(&mut page, resp.name.as_deref());
        push_cell(&mut page, resp.hobby.as_deref());
        push_cell(&mut page, resp.education.as_deref());
        push_cell(&mut page, resp.interest.as_deref());
        push_cell(&mut page, resp.job.as_deref());
        match resp.happiness {
            Some(h) => page.push_str(&format!("<td>{h}</td>")),
            None => page.push_str("<td></td>"),
        }
        page.push_str("</tr>\n");
    }
    page.push_str("</table>\n");

    page.push_str(
        "<p><a href=\"/download\">Download spreadsheet</a> | \
         <a href=\"/clear\">Clear all</a></p>\n</body>\n</html>\n",
    );
    page
}

fn push_cell(page: &mut String, value: Option<&str>) {
    page.push_str("<td>");
    if let Some(v) = value {
        page.push_str(&escape(v));
    }
    page.push_str("</td>");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, name: &str) -> Response {
        Response {
            id,
            name: Some(name.to_string()),
            hobby: Some("Chess".to_string()),
            education: Some("BSc".to_string()),
            interest: Some("AI".to_string()),
            job: Some("Engineer".to_string()),
            happiness: Some(8),
        }
    }

    #[test]
    fn renders_one_row_per_response() {
        let html = render_index(&[sample(1, "Ana"), sample(2, "Bo")]);
        assert!(html.contains("<td>1</td><td>Ana</td>"));
        assert!(html.contains("<td>2</td><td>Bo</td>"));
        assert!(html.contains("href=\"/download\""));
        assert!(html.contains("href=\"/clear\""));
    }

    #[test]
    fn field_markup_is_escaped() {
        let html = render_index(&[sample(1, "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn null_fields_render_empty_cells() {
        let resp = Response {
            id: 1,
            name: None,
            hobby: None,
            education: None,
            interest: None,
            job: None,
            happiness: None,
        };
        let html = render_index(&[resp]);
        assert!(html.contains("<td>1</td><td></td>"));
    }
}
