//! Static landing page.

use axum::response::Html;

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Websift Search Gateway</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 42rem; margin: 3rem auto; padding: 0 1rem; color: #222; }
        code, pre { background: #f4f4f4; border-radius: 4px; }
        code { padding: 0.1rem 0.3rem; }
        pre { padding: 0.8rem; overflow-x: auto; }
    </style>
</head>
<body>
    <h1>Websift Search Gateway</h1>
    <p>JSON search API with a Custom Search-compatible response shape.</p>
    <h2>Usage</h2>
    <p>POST to <code>/apis/search</code> with your key in the <code>x-api-key</code> header:</p>
    <pre>{
  "query": "rust web frameworks",
  "num_results": 10,
  "safe": "off",
  "advanced": true
}</pre>
    <p>Set <code>"advanced": false</code> for bare URLs only.</p>
</body>
</html>
"#;

/// `GET /` - serves the landing page.
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_HTML)
}
