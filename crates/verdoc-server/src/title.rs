//! Page title extraction.
//!
//! Pulls the text of the first `<h1>` out of rendered page HTML using a
//! lenient quick-xml event stream. Rendered Markdown is HTML, not XML, so
//! mismatched and unclosed tags are tolerated and parse errors end the scan
//! instead of failing the request.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Extract the text of the first `<h1>` element in `html`.
///
/// Nested markup is stripped, entities are decoded and whitespace runs are
/// collapsed to a single space. Returns `None` if the document has no `<h1>`.
///
/// # Example
///
/// ```ignore
/// let title = extract_title("<h1>Installation <small>5.8</small></h1><p>...</p>");
/// assert_eq!(title.as_deref(), Some("Installation 5.8"));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    // Some once the first <h1> has been opened
    let mut text: Option<String> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(error = %err, "Stopped title scan on malformed HTML");
                break;
            }
        };

        match event {
            Event::Start(e) if text.is_none() && is_h1(e.name().as_ref()) => {
                text = Some(String::new());
            }
            Event::End(e) if text.is_some() && is_h1(e.name().as_ref()) => break,
            Event::Text(e) => {
                if let Some(buf) = text.as_mut() {
                    let decoded = reader.decoder().decode(&e).map_or_else(
                        |_| String::from_utf8_lossy(&e).into_owned(),
                        std::borrow::Cow::into_owned,
                    );
                    buf.push_str(&decoded);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(buf) = text.as_mut() {
                    let entity = String::from_utf8_lossy(&e).into_owned();
                    buf.push_str(&decode_entity(&entity));
                }
            }
            Event::CData(e) => {
                if let Some(buf) = text.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    text.map(|t| collapse_whitespace(&t))
}

fn is_h1(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"h1")
}

/// Decode an entity reference name (without `&` and `;`).
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        "nbsp" => " ".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        // Unknown entity - preserve as-is
        _ => format!("&{entity};"),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_simple_title() {
        let title = extract_title("<h1>Foo</h1><p>Some text.</p>");
        assert_eq!(title.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_extract_no_h1() {
        assert_eq!(extract_title("<h2>Foo</h2><p>Bar</p>"), None);
        assert_eq!(extract_title(""), None);
        assert_eq!(extract_title("plain text"), None);
    }

    #[test]
    fn test_extract_first_of_many() {
        let title = extract_title("<h1>First</h1><h1>Second</h1>");
        assert_eq!(title.as_deref(), Some("First"));
    }

    #[test]
    fn test_extract_nested_anywhere() {
        let html = r#"<div class="docs"><section><h1 id="top">Routing</h1></section></div>"#;
        assert_eq!(extract_title(html).as_deref(), Some("Routing"));
    }

    #[test]
    fn test_extract_strips_inner_markup() {
        let html = r##"<h1><a name="intro" href="#intro"></a>Installation <code>v5</code></h1>"##;
        assert_eq!(extract_title(html).as_deref(), Some("Installation v5"));
    }

    #[test]
    fn test_extract_trims_and_collapses_whitespace() {
        let html = "<h1>\n    Service\n    Container\n</h1>";
        assert_eq!(extract_title(html).as_deref(), Some("Service Container"));
    }

    #[test]
    fn test_extract_uppercase_tag() {
        assert_eq!(extract_title("<H1>Queues</H1>").as_deref(), Some("Queues"));
    }

    #[test]
    fn test_extract_decodes_entities() {
        let html = "<h1>Request &amp; Response &#8212; &lt;Basics&gt;</h1>";
        assert_eq!(
            extract_title(html).as_deref(),
            Some("Request & Response \u{2014} <Basics>")
        );
    }

    #[test]
    fn test_extract_unknown_entity_preserved() {
        let html = "<h1>Caf&eacute;</h1>";
        assert_eq!(extract_title(html).as_deref(), Some("Caf&eacute;"));
    }

    #[test]
    fn test_extract_void_elements_inside_heading() {
        let html = "<h1>Line one<br>Line two</h1><p>After</p>";
        assert_eq!(extract_title(html).as_deref(), Some("Line oneLine two"));
    }

    #[test]
    fn test_extract_unclosed_heading() {
        let html = "<p>Intro</p><h1>Unclosed heading";
        assert_eq!(extract_title(html).as_deref(), Some("Unclosed heading"));
    }

    #[test]
    fn test_extract_ignores_stray_end_tags() {
        let html = "</div></p><h1>Eloquent</span></h1>";
        assert_eq!(extract_title(html).as_deref(), Some("Eloquent"));
    }

    #[test]
    fn test_extract_empty_heading() {
        assert_eq!(extract_title("<h1></h1>").as_deref(), Some(""));
    }

    #[test]
    fn test_decode_entity_numeric() {
        assert_eq!(decode_entity("#65"), "A");
        assert_eq!(decode_entity("#x41"), "A");
        assert_eq!(decode_entity("#xZZ"), "&#xZZ;");
    }
}
