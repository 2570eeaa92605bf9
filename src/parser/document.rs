use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A parsed page. Parsing is total: broken markup just yields fewer matches.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!("Tolerated {} markup errors", html.errors.len());
        }
        Self { html }
    }

    /// Every element in the document matching `selector`, in document order.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }

    /// First element matching `selector` that has a direct child matching `child`.
    pub fn first_with_child<'a>(
        &'a self,
        selector: &Selector,
        child: &Selector,
    ) -> Option<ElementRef<'a>> {
        self.html.select(selector).find(|el| {
            el.children()
                .filter_map(ElementRef::wrap)
                .any(|c| child.matches(&c))
        })
    }
}

/// Descendants of `scope` matching `selector`.
pub fn select_all<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(selector).collect()
}

/// Descendants of `scope` matching `selector` that do not sit inside a
/// `container` element below `scope`.
pub fn select_outside<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    container: &Selector,
) -> Vec<ElementRef<'a>> {
    scope
        .select(selector)
        .filter(|el| !is_inside(scope, *el, container))
        .collect()
}

fn is_inside(scope: ElementRef<'_>, el: ElementRef<'_>, container: &Selector) -> bool {
    el.ancestors()
        .take_while(|a| a.id() != scope.id())
        .filter_map(ElementRef::wrap)
        .any(|a| container.matches(&a))
}

/// Text of the first descendant matching `selector`.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(text_of)
}

/// Concatenated text of every descendant matching `selector`, `None` if nothing matched.
pub fn joined_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let parts: Vec<String> = scope.select(selector).map(text_of).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn first_text_takes_first_match_only() {
        let doc = Document::parse(
            r#"<div id="a"><span class="ind">one</span><span class="ind">two</span></div>"#,
        );
        let scope = doc.select_all(&sel("#a"))[0];
        assert_eq!(first_text(scope, &sel(".ind")).as_deref(), Some("one"));
        assert_eq!(first_text(scope, &sel(".missing")), None);
    }

    #[test]
    fn joined_text_concatenates() {
        let doc = Document::parse(
            r#"<div id="a"><b class="p">run </b><i>x</i><b class="p">wild</b></div>"#,
        );
        let scope = doc.select_all(&sel("#a"))[0];
        assert_eq!(joined_text(scope, &sel(".p")).as_deref(), Some("run wild"));
        assert_eq!(joined_text(scope, &sel(".q")), None);
    }

    #[test]
    fn text_includes_nested_nodes() {
        let doc = Document::parse(r#"<p id="a"><span class="ind">a <em>b</em> c</span></p>"#);
        let scope = doc.select_all(&sel("#a"))[0];
        assert_eq!(first_text(scope, &sel(".ind")).as_deref(), Some("a b c"));
    }

    #[test]
    fn select_outside_skips_nested_container() {
        let doc = Document::parse(
            r#"<ul><li id="s">
                 <div class="ex">own</div>
                 <ol><li class="subSense"><div class="ex">nested</div></li></ol>
               </li></ul>"#,
        );
        let scope = doc.select_all(&sel("#s"))[0];
        let found: Vec<String> = select_outside(scope, &sel(".ex"), &sel(".subSense"))
            .into_iter()
            .map(|e| e.text().collect())
            .collect();
        assert_eq!(found, vec!["own"]);
    }

    #[test]
    fn select_outside_ignores_container_above_scope() {
        let doc = Document::parse(
            r#"<div class="subSense"><div id="s"><div class="ex">kept</div></div></div>"#,
        );
        let scope = doc.select_all(&sel("#s"))[0];
        assert_eq!(select_outside(scope, &sel(".ex"), &sel(".subSense")).len(), 1);
    }

    #[test]
    fn next_sibling_skips_text_nodes() {
        let doc = Document::parse(r#"<ul><li id="a">x</li>   <li id="b">y</li></ul>"#);
        let a = doc.select_all(&sel("#a"))[0];
        let b = next_element_sibling(a).unwrap();
        assert_eq!(b.value().id(), Some("b"));
        assert!(next_element_sibling(b).is_none());
    }

    #[test]
    fn first_with_child_requires_direct_child() {
        let doc = Document::parse(
            r#"<section class="etymology" id="one"><div><h3 class="phrases-title">x</h3></div></section>
               <section class="etymology" id="two"><h3 class="phrases-title">Phrases</h3></section>"#,
        );
        let found = doc
            .first_with_child(&sel(".etymology"), &sel("h3.phrases-title"))
            .unwrap();
        assert_eq!(found.value().id(), Some("two"));
    }

    #[test]
    fn garbage_markup_yields_no_matches() {
        let doc = Document::parse("<<<not really </html");
        assert!(doc.select_all(&sel(".gramb")).is_empty());
    }
}
