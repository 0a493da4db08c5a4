use rs_jparser::dom;
use rs_jparser::{extract, ContentBlock, ExtractResult};

const LONG: &str = "A paragraph long enough to make paragraphs the winner tag here.";

fn run(html: &str) -> ExtractResult {
    match extract(html) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn text(s: &str) -> ContentBlock {
    ContentBlock::Text(s.to_string())
}

#[test]
fn table_region_yields_one_text_block_per_cell() {
    let html = "<html><body><table>\
        <tr><td>Alpha</td><td>Beta</td></tr>\
        <tr><td>Gamma</td><td>Delta</td></tr>\
        </table></body></html>";
    let result = run(html);
    assert_eq!(
        result.content,
        vec![text("Alpha"), text("Beta"), text("Gamma"), text("Delta")]
    );
    assert!(result.content.iter().all(|block| block.kind() != "html"));
}

#[test]
fn data_table_inside_region_is_kept_as_markup() {
    let html = format!(
        "<html><body><article><p>{LONG}</p>\
         <table><tr><th>Year</th><th>Sales</th></tr><tr><td>2023</td><td><a name=\"q\">12</a></td></tr></table>\
         </article></body></html>"
    );
    let result = run(&html);
    assert_eq!(result.content.len(), 2);
    assert_eq!(result.content[0], text(LONG));

    let ContentBlock::Html(markup) = &result.content[1] else {
        panic!("expected an html block, got {:?}", result.content[1]);
    };
    assert!(markup.starts_with("<table"));

    let reparsed = dom::parse(markup);
    assert!(reparsed.select("a").is_empty());
    assert_eq!(reparsed.select("td").length(), 2);
    assert_eq!(reparsed.select("td").text().to_string(), "202312");
}

#[test]
fn linked_cells_keep_their_link_tokens_as_text() {
    let html = format!(
        "<html><body><article><p>{LONG}</p>\
         <table><tr><td><a href=\"/report\">Annual report</a></td></tr></table>\
         </article></body></html>"
    );
    let result = run(&html);
    let ContentBlock::Html(markup) = &result.content[1] else {
        panic!("expected an html block, got {:?}", result.content[1]);
    };
    assert!(!markup.contains("<a"));
    assert!(markup.contains("[Annual report](/report)"));
}

#[test]
fn layout_table_with_paragraphs_is_not_markup() {
    let html = format!("<html><body><article><table><tr><td><p>{LONG}</p></td></tr></table></article></body></html>");
    assert_eq!(run(&html).content, vec![text(LONG)]);
}

#[test]
fn table_is_skipped_when_cell_text_dominates() {
    let html = "<html><body><article><table><tr><td>one cell</td><td>another</td></tr></table></article></body></html>";
    assert_eq!(run(html).content, vec![text("one cell"), text("another")]);
}

#[test]
fn only_direct_child_tables_are_kept_as_markup() {
    let html = format!(
        "<html><body><article><p>{LONG}</p>\
         <div><table><tr><td>deep</td></tr></table></div>\
         </article></body></html>"
    );
    assert_eq!(run(&html).content, vec![text(LONG)]);
}
