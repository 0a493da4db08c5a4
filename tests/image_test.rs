use rs_jparser::{extract, extract_with_options, ContentBlock, ExtractResult, Options};

const LONG: &str = "A paragraph long enough to make paragraphs the winner tag here.";

fn article(body: &str) -> String {
    format!("<html><body><article><p>{LONG}</p>{body}</article></body></html>")
}

fn run_with(html: &str, options: &Options) -> ExtractResult {
    match extract_with_options(html, options) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn images(result: &ExtractResult) -> Vec<&str> {
    result
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Image { src } => Some(src.as_str()),
            _ => None,
        })
        .collect()
}

fn image_sources(body: &str) -> Vec<String> {
    let result = run_with(&article(body), &Options::default());
    images(&result).into_iter().map(str::to_string).collect()
}

#[test]
fn data_original_is_checked_before_src() {
    assert_eq!(image_sources(r#"<img data-original="a.jpg" src="b.jpg">"#), vec!["a.jpg"]);
}

#[test]
fn source_attribute_priority_is_respected() {
    assert_eq!(
        image_sources(r#"<img src="s.jpg" data-src="d.jpg" file="f.jpg" original="o.jpg">"#),
        vec!["o.jpg"]
    );
    assert_eq!(image_sources(r#"<img src="s.jpg" data-src="d.jpg" file="f.jpg">"#), vec!["f.jpg"]);
    assert_eq!(image_sources(r#"<img src="s.jpg" src-info="i.jpg">"#), vec!["i.jpg"]);
    assert_eq!(image_sources(r#"<img src="s.jpg" data-src="d.jpg">"#), vec!["d.jpg"]);
}

#[test]
fn blank_attributes_fall_through() {
    assert_eq!(image_sources(r#"<img data-src="  " src="real.jpg">"#), vec!["real.jpg"]);
}

#[test]
fn images_without_any_source_are_skipped() {
    let result = match extract(&article(r#"<img alt="decorative">"#)) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(result.content, vec![ContentBlock::Text(LONG.to_string())]);
}

#[test]
fn image_sources_resolve_against_the_base_url() {
    let options = Options {
        url: Some("https://example.com/news/2024/story.html".to_string()),
        ..Options::default()
    };
    let html = article(r#"<img src="photo.jpg"><img src="/static/logo.png"><img src="https://cdn.example.net/x.png">"#);
    let result = run_with(&html, &options);
    assert_eq!(
        images(&result),
        vec![
            "https://example.com/news/2024/photo.jpg",
            "https://example.com/static/logo.png",
            "https://cdn.example.net/x.png",
        ]
    );
}

#[test]
fn images_keep_their_place_between_text_blocks() {
    let html = format!(
        "<html><body><article><p>{LONG}</p><img src=\"middle.jpg\"><p>{LONG}</p></article></body></html>"
    );
    let result = run_with(&html, &Options::default());
    assert_eq!(
        result.content,
        vec![
            ContentBlock::Text(LONG.to_string()),
            ContentBlock::Image { src: "middle.jpg".to_string() },
            ContentBlock::Text(LONG.to_string()),
        ]
    );
}

#[test]
fn nested_images_are_found_anywhere_in_the_region() {
    assert_eq!(
        image_sources(r#"<figure><div><img src="deep.jpg"></div></figure>"#),
        vec!["deep.jpg"]
    );
}
