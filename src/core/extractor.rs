use crate::domain::model::ImageUrl;
use crate::utils::error::{PlanError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Site root that relative album paths are resolved against.
pub const DEFAULT_SITE_ROOT: &str = "https://www.architectsnw.com/";

/// Base paths starting with this are already absolute.
pub const SCHEME_PREFIX: &str = "https";

/// Compatibility shim for the upstream photo XML, which ships bare `&` in
/// attribute values.
///
/// Every `&` is rewritten, including the ones that already start an entity, so
/// `&amp;` in the source comes out of the parser as the literal text `&amp;`.
/// This is not a general purpose XML escape.
pub fn escape_ampersands(raw: &str) -> String {
    raw.replace('&', "&amp;")
}

/// Prefixes `site_root` onto base paths that are not already absolute.
pub fn normalize_base_path(lgpath: &str, site_root: &str) -> String {
    if lgpath.starts_with(SCHEME_PREFIX) {
        lgpath.to_string()
    } else {
        format!("{}{}", site_root, lgpath)
    }
}

// Every attribute is checked so duplicates are rejected. Missing ones read as "".
fn attribute_value(element: &BytesStart<'_>, name: &str) -> Result<String> {
    let mut value = None;
    for attr in element.attributes() {
        let attr = attr.map_err(PlanError::malformed)?;
        if value.is_none() && attr.key.as_ref() == name.as_bytes() {
            value = Some(
                attr.unescape_value()
                    .map_err(PlanError::malformed)?
                    .into_owned(),
            );
        }
    }
    Ok(value.unwrap_or_default())
}

fn check_attributes(element: &BytesStart<'_>) -> Result<()> {
    for attr in element.attributes() {
        attr.map_err(PlanError::malformed)?;
    }
    Ok(())
}

/// Collected while walking the document.
#[derive(Default)]
struct AlbumScan {
    lgpath: Option<String>,
    sources: Vec<String>,
}

impl AlbumScan {
    fn visit(&mut self, element: &BytesStart<'_>) -> Result<()> {
        match element.name().as_ref() {
            b"album" if self.lgpath.is_none() => {
                self.lgpath = Some(attribute_value(element, "lgpath")?);
            }
            b"img" => self.sources.push(attribute_value(element, "src")?),
            _ => check_attributes(element)?,
        }
        Ok(())
    }
}

/// Turns a photo XML document into absolute image URLs.
///
/// The first `album` element supplies the base path; every `img` element in
/// document order supplies one `src`. The result is `base + src` for each
/// image with no separator inserted and no encoding applied. Duplicates are
/// kept.
///
/// The whole document must be well formed: exactly one root element, no text
/// outside it, and every element closed. Otherwise nothing is returned.
pub fn extract_image_urls(photo_xml: &str, site_root: &str) -> Result<Vec<ImageUrl>> {
    let escaped = escape_ampersands(photo_xml);
    let mut reader = Reader::from_str(&escaped);

    let mut scan = AlbumScan::default();
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(PlanError::malformed(format!(
                    "{} (near byte {})",
                    e,
                    reader.buffer_position()
                )))
            }
        };

        match event {
            Event::Start(ref element) | Event::Empty(ref element) if depth == 0 && root_closed => {
                return Err(PlanError::malformed(format!(
                    "junk after document element: <{}>",
                    String::from_utf8_lossy(element.name().as_ref())
                )));
            }
            Event::Start(element) => {
                scan.visit(&element)?;
                depth += 1;
            }
            Event::Empty(element) => {
                scan.visit(&element)?;
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched names
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| PlanError::malformed("unexpected end tag"))?;
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(text) if depth == 0 => {
                if text.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(PlanError::malformed("text outside the document element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(PlanError::malformed("CDATA outside the document element"));
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(PlanError::malformed(format!(
                        "document ends with {} unclosed element(s)",
                        depth
                    )));
                }
                if !root_closed {
                    return Err(PlanError::malformed("document contains no elements"));
                }
                break;
            }
            _ => {}
        }
    }

    let AlbumScan { lgpath, sources } = scan;
    let lgpath = lgpath.ok_or(PlanError::MissingAlbumElement)?;
    let base_path = normalize_base_path(&lgpath, site_root);
    tracing::debug!("Album base path: {}", base_path);
    tracing::debug!("Found {} img elements", sources.len());

    Ok(sources
        .into_iter()
        .map(|src| format!("{}{}", base_path, src))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(xml: &str) -> Result<Vec<ImageUrl>> {
        extract_image_urls(xml, DEFAULT_SITE_ROOT)
    }

    #[test]
    fn test_absolute_base_path() {
        let xml = r#"<album lgpath="https://cdn.example.com/imgs/"><img src="a.jpg"/><img src="b.jpg"/></album>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec![
                "https://cdn.example.com/imgs/a.jpg",
                "https://cdn.example.com/imgs/b.jpg"
            ]
        );
    }

    #[test]
    fn test_relative_base_path_gets_site_root() {
        let xml = r#"<gallery><album lgpath="relative/path/"><img src="front.jpg"/></album></gallery>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec!["https://www.architectsnw.com/relative/path/front.jpg"]
        );
    }

    #[test]
    fn test_prefix_check_is_https_and_case_sensitive() {
        assert_eq!(
            normalize_base_path("http://old.example.com/", DEFAULT_SITE_ROOT),
            "https://www.architectsnw.com/http://old.example.com/"
        );
        assert_eq!(
            normalize_base_path("HTTPS://cdn.example.com/", DEFAULT_SITE_ROOT),
            "https://www.architectsnw.com/HTTPS://cdn.example.com/"
        );
        assert_eq!(
            normalize_base_path("https://cdn.example.com/", DEFAULT_SITE_ROOT),
            "https://cdn.example.com/"
        );
    }

    #[test]
    fn test_unescaped_ampersand_is_tolerated() {
        let xml = r#"<album lgpath="a&b/"><img src="x&y.jpg"/></album>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec!["https://www.architectsnw.com/a&b/x&y.jpg"]
        );
    }

    #[test]
    fn test_existing_entities_are_double_escaped() {
        assert_eq!(escape_ampersands("a&amp;b"), "a&amp;amp;b");

        let xml = r#"<album lgpath="https://cdn.example.com/"><img src="R&amp;D.jpg"/></album>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec!["https://cdn.example.com/R&amp;D.jpg"]
        );
    }

    #[test]
    fn test_first_album_wins() {
        let xml = r#"<root>
            <album lgpath="https://first.example.com/"><img src="1.jpg"/></album>
            <album lgpath="https://second.example.com/"><img src="2.jpg"/></album>
        </root>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec!["https://first.example.com/1.jpg", "https://first.example.com/2.jpg"]
        );
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let xml = r#"<album lgpath="https://c.example/"><img src="b.jpg"/><img src="a.jpg"></img><img src="b.jpg"/></album>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec![
                "https://c.example/b.jpg",
                "https://c.example/a.jpg",
                "https://c.example/b.jpg"
            ]
        );
    }

    #[test]
    fn test_no_separator_is_inserted() {
        let xml = r#"<album lgpath="https://c.example/large"><img src="a.jpg"/></album>"#;
        assert_eq!(extract(xml).unwrap(), vec!["https://c.example/largea.jpg"]);
    }

    #[test]
    fn test_missing_album_element() {
        let xml = r#"<photos><img src="a.jpg"/></photos>"#;
        assert!(matches!(extract(xml), Err(PlanError::MissingAlbumElement)));
    }

    #[test]
    fn test_album_without_images_yields_empty_list() {
        let xml = r#"<album lgpath="https://cdn.example.com/imgs/"></album>"#;
        assert!(extract(xml).unwrap().is_empty());
    }

    #[test]
    fn test_missing_attributes_read_as_empty() {
        let xml = r#"<album><img/><img src="a.jpg"/></album>"#;
        assert_eq!(
            extract(xml).unwrap(),
            vec![
                "https://www.architectsnw.com/",
                "https://www.architectsnw.com/a.jpg"
            ]
        );
    }

    #[test]
    fn test_mismatched_tags_are_malformed() {
        let xml = r#"<album lgpath="https://c.example/"><img src="a.jpg"></album>"#;
        assert!(matches!(
            extract(xml),
            Err(PlanError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_empty_document_is_malformed() {
        assert!(matches!(
            extract(""),
            Err(PlanError::MalformedDocument { .. })
        ));
    }

    fn assert_malformed(xml: &str) {
        match extract(xml) {
            Err(PlanError::MalformedDocument { .. }) => {}
            other => panic!("expected MalformedDocument for {:?}, got {:?}", xml, other),
        }
    }

    #[test]
    fn test_truncated_document_returns_nothing() {
        assert_malformed(r#"<album lgpath="https://c.example/"><img src="a.jpg"/>"#);
        assert_malformed(r#"<gallery><album lgpath="https://c.example/"><img src="a.jpg"/></album>"#);
    }

    #[test]
    fn test_second_root_element_is_malformed() {
        assert_malformed(
            r#"<album lgpath="https://c.example/"><img src="a.jpg"/></album><album lgpath="x/"/>"#,
        );
        assert_malformed(r#"<album lgpath="https://c.example/"/><img src="a.jpg"/>"#);
    }

    #[test]
    fn test_text_outside_root_is_malformed() {
        assert_malformed(r#"<album lgpath="https://c.example/"><img src="a.jpg"/></album>trailing"#);
        assert_malformed(r#"leading<album lgpath="https://c.example/"></album>"#);
    }

    #[test]
    fn test_whitespace_around_root_is_fine() {
        let xml = "\n  <album lgpath=\"https://c.example/\"><img src=\"a.jpg\"/></album>\n\n";
        assert_eq!(extract(xml).unwrap(), vec!["https://c.example/a.jpg"]);
    }

    #[test]
    fn test_duplicate_attribute_is_malformed() {
        assert_malformed(r#"<album lgpath="https://c.example/" lgpath="x/"><img src="a.jpg"/></album>"#);
        assert_malformed(r#"<album lgpath="https://c.example/"><img src="a.jpg" src="b.jpg"/></album>"#);
        assert_malformed(r#"<gallery id="1" id="2"><album lgpath="https://c.example/"/></gallery>"#);
    }

    #[test]
    fn test_custom_site_root() {
        let xml = r#"<album lgpath="photos/"><img src="a.jpg"/></album>"#;
        assert_eq!(
            extract_image_urls(xml, "http://127.0.0.1:8080/").unwrap(),
            vec!["http://127.0.0.1:8080/photos/a.jpg"]
        );
    }
}
