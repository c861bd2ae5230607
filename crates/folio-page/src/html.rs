//! Markup for the archive page.
//!
//! Text is always escaped. The only unescaped values are icon glyphs from an
//! [`IconSet`] and description fragments, which are [`TrustedHtml`].

use folio_core::{Entry, EntryId, TrustedHtml, escape_html};

use crate::icons::IconSet;
use crate::row::RowView;

/// Column headings, in order.
pub const COLUMNS: [(&str, Option<&str>); 4] = [
    ("Date", None),
    ("License", None),
    ("Offered by", Some("hide-on-mobile")),
    ("Verification", None),
];

/// Click and keyboard handling for rows in the static document.
///
/// Mirrors [`render_row`]: opening a row inserts the row from its description
/// template directly after it, closing removes it.
pub const TOGGLE_SCRIPT: &str = r#"(function () {
  var body = document.querySelector('#archive-table tbody');
  if (!body) return;
  function toggle(row) {
    var id = row.getAttribute('data-entry');
    var open = row.getAttribute('aria-expanded') === 'true';
    row.setAttribute('aria-expanded', open ? 'false' : 'true');
    var next = row.nextElementSibling;
    if (open) {
      if (next && next.getAttribute('data-description-for') === id) next.remove();
      return;
    }
    var template = document.querySelector('template[data-description-for="' + CSS.escape(id) + '"]');
    if (template) row.after(template.content.cloneNode(true));
  }
  body.addEventListener('click', function (event) {
    if (event.target.closest('a')) return;
    var row = event.target.closest('tr[data-entry]');
    if (row) toggle(row);
  });
  body.addEventListener('keydown', function (event) {
    if (event.key !== 'Enter' && event.key !== ' ') return;
    var row = event.target.closest('tr[data-entry]');
    if (!row) return;
    event.preventDefault();
    toggle(row);
  });
})();
"#;

/// Page header with heading and subtitle.
#[must_use]
pub fn render_header(heading: &str, subtitle: &str) -> String {
    format!(
        "    <header id=\"archive-header\">\n      <h1 class=\"big-heading\">{}</h1>\n      <p class=\"subtitle\">{}</p>\n    </header>\n",
        escape_html(heading),
        escape_html(subtitle),
    )
}

/// The table container with all rows.
#[must_use]
pub fn render_table(rows: &[RowView<'_>], icons: &dyn IconSet) -> String {
    let mut out = String::from(
        "    <div class=\"table-container\" id=\"archive-table\">\n      <table>\n        <thead>\n          <tr>\n",
    );
    for (label, class) in COLUMNS {
        match class {
            Some(class) => out.push_str(&format!("            <th class=\"{class}\">{label}</th>\n")),
            None => out.push_str(&format!("            <th>{label}</th>\n")),
        }
    }
    out.push_str("          </tr>\n        </thead>\n        <tbody>\n");
    for row in rows {
        out.push_str(&render_row(row, icons));
    }
    out.push_str("        </tbody>\n      </table>\n    </div>\n");
    out
}

/// One entry row, followed by its description row when expanded.
#[must_use]
pub fn render_row(row: &RowView<'_>, icons: &dyn IconSet) -> String {
    let id = escape_html(row.id.as_str());
    let company = escape_html(row.company_label());

    let mut links = String::new();
    for link in &row.links {
        links.push_str(&format!(
            "<a href=\"{}\" aria-label=\"{}\">{}</a>",
            escape_html(link.href),
            link.label,
            icons.render(link.kind),
        ));
    }

    let mut out = format!(
        "          <tr data-entry=\"{id}\" tabindex=\"0\" aria-expanded=\"{expanded}\">\n            <td class=\"overline year\">{date}</td>\n            <td class=\"title\">{title}</td>\n            <td class=\"company hide-on-mobile\"><span>{company}</span></td>\n            <td class=\"links\"><div>{links}</div></td>\n          </tr>\n",
        expanded = row.expanded,
        date = escape_html(&row.date_label),
        title = escape_html(row.title),
    );

    if let Some(description) = row.description {
        out.push_str(&description_row(&id, description));
        out.push('\n');
    }
    out
}

fn description_row(escaped_id: &str, description: &TrustedHtml) -> String {
    format!(
        "          <tr class=\"description-row\" data-description-for=\"{escaped_id}\"><td colspan=\"{}\">{}</td></tr>",
        COLUMNS.len(),
        description.as_str(),
    )
}

/// `<template>` holders for every row whose entry has a description.
#[must_use]
pub fn render_description_templates<'e, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'e EntryId, &'e Entry)>,
{
    let mut out = String::new();
    for (id, entry) in rows {
        let Some(description) = &entry.description else {
            continue;
        };
        let id = escape_html(id.as_str());
        out.push_str(&format!(
            "  <template data-description-for=\"{id}\">{}</template>\n",
            description_row(&id, description).trim_start(),
        ));
    }
    out
}

/// Wrap a script body in a `<script>` element.
#[must_use]
pub fn script_tag(body: &str) -> String {
    format!("  <script>\n{body}  </script>\n")
}
