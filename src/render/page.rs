use super::card::CatalogView;
use super::detail::DetailView;
use super::escape::Html;

const STYLE: &str = r#"<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1f2328; }
header { padding: 1.5rem 2rem; background: #1f2328; color: #fff; }
header a { color: #fff; text-decoration: none; }
main { padding: 1.5rem 2rem; }
.search input { width: 100%; max-width: 32rem; padding: .5rem .75rem; font-size: 1rem; }
.agents-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }
.agent-card { display: block; padding: 1rem; background: #fff; border-radius: .5rem; color: inherit; text-decoration: none; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.agent-card .model { font-size: .8rem; background: #eef; padding: .1rem .4rem; border-radius: .25rem; }
.detail-item { margin-right: .5rem; font-size: .85rem; color: #555; }
.no-results { padding: 2rem; text-align: center; color: #777; }
.summary-table td { padding: .25rem .75rem .25rem 0; vertical-align: top; }
pre { background: #fff; padding: 1rem; overflow-x: auto; }
.download { display: inline-block; margin-top: 1rem; }
</style>
"#;

fn layout(title: &str, body: Html) -> Html {
    let mut html = Html::markup("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>");
    html.push_text(title)
        .push_markup("</title>\n")
        .push_markup(STYLE)
        .push_markup("</head>\n<body>\n<header><h1><a href=\"/\">AgentHub</a></h1></header>\n<main>\n")
        .push(body)
        .push_markup("</main>\n</body>\n</html>\n");
    html
}

/// Catalog page: search box plus the card grid or the empty state.
pub fn catalog_page(view: &CatalogView) -> Html {
    let mut body = Html::markup(
        "<form class=\"search\" method=\"get\" action=\"/\">\n<input type=\"search\" name=\"q\" placeholder=\"Search agents...\" value=\"",
    );
    body.push_attr(&view.query)
        .push_markup("\">\n</form>\n")
        .push(view.to_html());
    layout("AgentHub", body)
}

/// Detail page with a link to the export download.
pub fn detail_page(view: &DetailView, download_href: &str) -> Html {
    let mut body = view.to_html();
    body.push_markup("<a class=\"download\" href=\"")
        .push_attr(download_href)
        .push_markup("\">Download JSON</a>\n");
    layout(&view.title, body)
}

pub fn not_found_page(message: &str) -> Html {
    let mut body = Html::markup("<div class=\"no-results\">");
    body.push_text(message).push_markup("</div>\n");
    layout("Not found", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{card, detail};
    use crate::types::AgentRecord;
    use serde_json::json;

    #[test]
    fn test_catalog_page_escapes_query() {
        let view = card::render_for_query(&[], "\"><script>x</script>");
        let page = catalog_page(&view).into_string();
        assert!(!page.contains("<script>x"));
        assert!(page.contains("0 agents"));
    }

    #[test]
    fn test_detail_page_escapes_title() {
        let record: AgentRecord = serde_json::from_value(json!({"name": "<i>Bot</i>"})).unwrap();
        let view = detail::present(&record);
        let page = detail_page(&view, "/agents/0/download").into_string();
        assert!(page.contains("<title>&lt;i&gt;Bot"));
        assert!(!page.contains("<i>Bot"));
        assert!(page.contains("href=\"/agents/0/download\""));
    }
}
