use super::Snapshot;
use crate::bootstrap::SEARCH_ID;
use crate::render::escape_html;

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

/// Static page holding the grid as mounted for the current term. The search
/// box only shows that term; the page carries no script, so it does not
/// re-filter in a browser. The full demo list is embedded as JSON data.
pub fn render_html(snapshot: &Snapshot) -> Vec<u8> {
    let json = serde_json::to_string(snapshot.records).unwrap_or_else(|_| "[]".to_string());
    let json = json_for_script_tag(&json);
    let grid_id = escape_html(&snapshot.grid.id);
    let term = escape_html(snapshot.term);
    let cards = snapshot.grid.to_html();

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>Demos</title>
  <style>
    body {{ font-family: 'Inter', sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }}
    main {{ max-width: 1200px; margin: 0 auto; padding: 2.5rem 2rem; }}
    #{SEARCH_ID} {{ width: 100%; padding: 0.75rem 1rem; border: 1px solid #cbd5e1; border-radius: 0.75rem; font-size: 1rem; }}
    #{grid_id} {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.25rem; margin-top: 2rem; }}
    .card {{ background: #fff; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 1.25rem; display: flex; flex-direction: column; gap: 0.5rem; }}
    .card h2 {{ margin: 0; font-size: 1.125rem; }}
    .status {{ align-self: flex-start; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; color: #135bec; }}
    .tags {{ display: flex; flex-wrap: wrap; gap: 0.375rem; }}
    .tag {{ background: #f1f5f9; border-radius: 9999px; padding: 0.125rem 0.625rem; font-size: 0.75rem; }}
  </style>
</head>
<body>
  <script type="application/json" id="demos-data">{json}</script>
  <main>
    <h1>Demos</h1>
    <input id="{SEARCH_ID}" type="search" placeholder="Search demos by title, description or tag..." value="{term}"/>
    <section id="{grid_id}">{cards}</section>
  </main>
</body>
</html>
"####,
    );

    html.into_bytes()
}
