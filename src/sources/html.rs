//! Naive HTML string helpers.
//!
//! Only enough structure for the two transaction sources: tag and attribute
//! names are matched ASCII case-insensitively, and nothing is validated.

/// Lowercase ASCII only, so byte offsets match the original string
fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Offset of the next `<tag` opening (not `<tagfoo`) at or after `from`
fn find_open(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = format!("<{}", tag);
    let mut pos = from;
    loop {
        let idx = lc.get(pos..)?.find(&pat)? + pos;
        let next = lc[idx + pat.len()..].chars().next();
        if matches!(next, Some(c) if c == '>' || c == '/' || c.is_whitespace()) {
            return Some(idx);
        }
        pos = idx + pat.len();
    }
}

/// Offset just past the `</tag>` that closes the element opened at `start`,
/// counting nested elements of the same tag.
fn find_close(lc: &str, tag: &str, start: usize) -> Option<(usize, usize)> {
    let close_pat = format!("</{}", tag);
    let inner_start = lc[start..].find('>')? + start + 1;

    let mut depth = 1;
    let mut pos = inner_start;
    while depth > 0 {
        let next_close = lc.get(pos..)?.find(&close_pat)? + pos;
        match find_open(lc, tag, pos) {
            Some(open) if open < next_close => {
                depth += 1;
                pos = open + tag.len() + 1;
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    let end = lc[next_close..].find('>')? + next_close + 1;
                    return Some((inner_start, end));
                }
                pos = next_close + close_pat.len();
            }
        }
    }
    None
}

/// Drop comment markers; some pages ship sections inside `<!-- -->`.
pub fn uncomment(html: &str) -> String {
    html.replace("<!--", "").replace("-->", "")
}

/// Inner HTML of the `tag` element carrying `id="<id>"`
pub fn section_by_id<'a>(html: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lc = lower(html);
    let mut from = 0;
    while let Some(start) = find_open(&lc, tag, from) {
        let open_end = lc[start..].find('>')? + start;
        let attrs = &lc[start..open_end];
        let wanted = lower(id);
        if attrs.contains(&format!("id=\"{}\"", wanted)) || attrs.contains(&format!("id='{}'", wanted)) {
            let (inner_start, end) = find_close(&lc, tag, start)?;
            let inner_end = lc[..end].rfind("</")?;
            return Some(&html[inner_start..inner_end]);
        }
        from = open_end;
    }
    None
}

/// Text of every `tag` element, in document order
pub fn element_texts(html: &str, tag: &str) -> Vec<String> {
    let lc = lower(html);
    let mut texts = Vec::new();
    let mut from = 0;
    while let Some(start) = find_open(&lc, tag, from) {
        let Some((inner_start, end)) = find_close(&lc, tag, start) else {
            break;
        };
        let inner_end = lc[..end].rfind("</").unwrap_or(end);
        texts.push(text_of(&html[inner_start..inner_end]));
        from = end;
    }
    texts
}

/// Cell texts of each `<tr>` in the first table whose class list contains `class`
pub fn table_rows(html: &str, class: &str) -> Vec<Vec<String>> {
    let lc = lower(html);
    let wanted = lower(class);
    let mut from = 0;
    while let Some(start) = find_open(&lc, "table", from) {
        let Some(open_end) = lc[start..].find('>').map(|i| i + start) else {
            break;
        };
        let has_class = attr_value(&lc[start..open_end], "class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == wanted));

        if has_class {
            let Some((inner_start, end)) = find_close(&lc, "table", start) else {
                break;
            };
            let table = &html[inner_start..end];
            return element_blocks(table, "tr")
                .into_iter()
                .map(|row| element_texts(row, "td"))
                .filter(|cells| !cells.is_empty())
                .collect();
        }
        from = open_end;
    }
    Vec::new()
}

/// Whole `<tag ...>...</tag>` blocks, outermost only
fn element_blocks<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = lower(html);
    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(start) = find_open(&lc, tag, from) {
        let Some((_, end)) = find_close(&lc, tag, start) else {
            break;
        };
        blocks.push(&html[start..end]);
        from = end;
    }
    blocks
}

fn attr_value<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!("{}=", name);
    let idx = open_tag.find(&key)? + key.len();
    let rest = &open_tag[idx..];
    let quote = rest.chars().next()?;
    if quote == '"' || quote == '\'' {
        let end = rest[1..].find(quote)?;
        Some(&rest[1..1 + end])
    } else {
        rest.split_whitespace().next()
    }
}

/// Tags removed, entities decoded, whitespace collapsed
pub fn text_of(fragment: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(fragment)))
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// The handful of entities these pages actually use
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&bull;", "•")
        .replace("&#160;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="meta"><p><strong>Draft:</strong> Boston Celtics, 1st round (3rd pick, 3rd overall), 2017 NBA Draft</p></div>
        <div id="all_transactions" class="section">
          <div class="inner"><ul>
            <li>June 22, 2017: Drafted by the Boston Celtics.</li>
            <li>July 1, 2017: Signed a &amp; rookie deal.</li>
          </ul></div>
        </div>
        <div id="footer"><p>bye</p></div>
    "#;

    #[test]
    fn test_section_by_id_handles_nesting() {
        let section = section_by_id(PAGE, "div", "all_transactions").unwrap();
        assert!(section.contains("Drafted by the Boston Celtics"));
        assert!(!section.contains("footer"));
    }

    #[test]
    fn test_section_by_id_missing() {
        assert!(section_by_id(PAGE, "div", "nope").is_none());
    }

    #[test]
    fn test_element_texts() {
        let section = section_by_id(PAGE, "div", "all_transactions").unwrap();
        let items = element_texts(section, "li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], "July 1, 2017: Signed a & rookie deal.");
    }

    #[test]
    fn test_element_texts_does_not_match_longer_tags() {
        let texts = element_texts("<pre>x</pre><p>y</p>", "p");
        assert_eq!(texts, vec!["y".to_string()]);
    }

    #[test]
    fn test_table_rows() {
        let html = r#"<table class="other"><tr><td>no</td></tr></table>
            <TABLE class="datatable center">
              <tr><th>Date</th><th>Team</th></tr>
              <tr><td>2017-06-22</td><td>Celtics</td></tr>
            </TABLE>"#;
        let rows = table_rows(html, "datatable");
        assert_eq!(rows, vec![vec!["2017-06-22".to_string(), "Celtics".to_string()]]);
    }

    #[test]
    fn test_text_of_strips_and_decodes() {
        assert_eq!(
            text_of("<a href='x'>Kevin</a>&nbsp;Garnett\n <b>traded</b>"),
            "Kevin Garnett traded"
        );
    }

    #[test]
    fn test_uncomment() {
        let html = "<!--<div id=\"all_transactions\"><li>a</li></div>-->";
        assert!(section_by_id(&uncomment(html), "div", "all_transactions").is_some());
    }
}
