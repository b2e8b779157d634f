use std::fs;

use crate::content::{ContentFragment, render_markup};
use crate::fetcher::HttpFetcher;
use crate::sites::{ExtractError, SiteRegistry, SiteVariant, jw_org, parser::parse_article, wol};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/sites/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_www_jw_org_article() {
    let article = parse_article(&fixture("www_jw_org.html"), jw_org::CONTAINER).unwrap();

    assert_eq!(article.title, "T");
    assert_eq!(
        article.fragments,
        vec![
            ContentFragment::Paragraph(
                r#"<p id="p1">Primeiro parágrafo com <a href="/pt/biblioteca/biblia/">um link</a>.</p>"#
                    .to_string()
            ),
            ContentFragment::SubHeading(r#"<h2 id="p2">Subtítulo</h2>"#.to_string()),
        ]
    );
    assert_eq!(
        render_markup(&article.fragments),
        r#"<p id="p1">Primeiro parágrafo com <a href="/pt/biblioteca/biblia/">um link</a>.</p><h2 id="p2">Subtítulo</h2>"#
    );
}

#[test]
fn test_www_jw_org_skips_navigation_and_footer() {
    let article = parse_article(&fixture("www_jw_org.html"), jw_org::CONTAINER).unwrap();
    let body = article.body_markup();

    assert!(!body.contains("Menu principal"));
    assert!(!body.contains("Copyright"));
}

#[test]
fn test_wol_article_needs_both_classes() {
    let article = parse_article(&fixture("wol_jw_org.html"), wol::CONTAINER).unwrap();

    assert_eq!(article.title, "Como ter uma família feliz");
    assert_eq!(article.fragments.len(), 3);
    assert!(!article.body_markup().contains("Barra lateral"));
    assert_eq!(
        article.fragments[0],
        ContentFragment::Paragraph(
            r#"<p class="sb"><strong>1.</strong> A família é um presente de Deus.</p>"#.to_string()
        )
    );
    assert_eq!(
        article.fragments[1],
        ContentFragment::SubHeading(r#"<h2 class="subhead">O papel do marido</h2>"#.to_string())
    );
    assert_eq!(
        article.fragments[2],
        ContentFragment::Paragraph(r#"<p class="sb">Leia <em>Efésios 5:25</em>.</p>"#.to_string())
    );
}

#[test]
fn test_missing_container() {
    let result = parse_article(&fixture("missing_container.html"), jw_org::CONTAINER);
    match result {
        Err(ExtractError::MissingContainer(css)) => assert_eq!(css, "div.docClass-106"),
        other => panic!("Expected MissingContainer, got {:?}", other),
    }
}

#[test]
fn test_site_layouts_do_not_cross_match() {
    assert!(matches!(
        parse_article(&fixture("www_jw_org.html"), wol::CONTAINER),
        Err(ExtractError::MissingContainer(_))
    ));
    assert!(matches!(
        parse_article(&fixture("wol_jw_org.html"), jw_org::CONTAINER),
        Err(ExtractError::MissingContainer(_))
    ));
}

#[test]
fn test_missing_title() {
    let html = r#"<html><body><div class="docClass-106"><p>Sem título</p></div></body></html>"#;
    assert!(matches!(
        parse_article(html, jw_org::CONTAINER),
        Err(ExtractError::MissingTitle)
    ));
}

#[test]
fn test_malformed_html() {
    let html = r#"<h1>Quebrado<div class="docClass-106"><p>Tags abertas<h2>Sub"#;
    // html5ever repairs the tree; whatever comes out must not panic
    let _ = parse_article(html, jw_org::CONTAINER);
}

#[test]
fn test_classify() {
    let cases = [
        ("https://www.jw.org/pt/biblioteca/revistas/", SiteVariant::WwwJwOrg),
        ("http://www.jw.org/en/", SiteVariant::WwwJwOrg),
        ("https://WWW.JW.ORG/pt/", SiteVariant::WwwJwOrg),
        ("https://wol.jw.org/pt/wol/d/r5/lp-t/1102008070", SiteVariant::WolJwOrg),
        ("https://jw.org/pt/", SiteVariant::Unsupported),
        ("https://example.com/?ref=www.jw.org", SiteVariant::Unsupported),
        ("https://www.jw.org.evil.example/", SiteVariant::Unsupported),
        ("https://", SiteVariant::Unsupported),
    ];

    for (url, expected) in cases {
        assert_eq!(SiteVariant::classify(url), expected, "classifying {url}");
    }
}

#[test]
fn test_registry_covers_supported_sites() {
    let registry = SiteRegistry::new(HttpFetcher::new().unwrap());

    assert_eq!(
        registry
            .extractor_for(SiteVariant::WwwJwOrg)
            .map(|e| e.variant()),
        Some(SiteVariant::WwwJwOrg)
    );
    assert_eq!(
        registry
            .extractor_for(SiteVariant::WolJwOrg)
            .map(|e| e.variant()),
        Some(SiteVariant::WolJwOrg)
    );
    assert!(registry.extractor_for(SiteVariant::Unsupported).is_none());
    assert_eq!(registry.supported().len(), 2);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_never_panics(html in ".*") {
            let _ = parse_article(&html, jw_org::CONTAINER);
            let _ = parse_article(&html, wol::CONTAINER);
        }

        #[test]
        fn test_fragments_are_from_the_container(body in "[a-zA-Z ]{1,40}") {
            let html = format!(r#"<h1>T</h1><div class="docClass-106"><p>{body}</p></div>"#);
            let article = parse_article(&html, jw_org::CONTAINER).unwrap();
            prop_assert_eq!(article.body_markup(), format!("<p>{body}</p>"));
        }
    }
}
