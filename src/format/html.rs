use std::fmt::Write;

use crate::cutlist::CutListItem;

use super::UnitFormatter;

const STYLE: &str = "table { border: 1px solid #000; border-collapse: collapse; }
td, th { border: 1px solid #000; padding: 0.25em 0.5em; }
thead { background-color: #eee; }";

pub(super) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub(super) fn format(items: &[&CutListItem], units: &UnitFormatter, title: &str) -> String {
    let title = escape(title);
    let u = units.symbol();

    let mut header = String::new();
    for h in [
        "Count".to_string(),
        format!("Length ({u})"),
        format!("Width ({u})"),
        format!("Height ({u})"),
        "Material".to_string(),
        "Names".to_string(),
    ] {
        let _ = write!(header, "<th>{}</th>", escape(&h));
    }

    let mut rows = String::new();
    for item in items {
        let d = item.dimensions();
        let names: Vec<String> = item.names().iter().map(|n| escape(n)).collect();
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            item.count(),
            units.format(d.length),
            units.format(d.width),
            units.format(d.height),
            escape(item.material_name().unwrap_or_default()),
            names.join("<br>"),
        );
    }

    format!(
        "<html>
<head>
<title>{title} Cutlist</title>
<style>
{STYLE}
</style>
</head>
<body>
<h1>{title} Cutlist</h1>
<table>
<thead><tr>{header}</tr></thead>
<tbody>{rows}</tbody>
</table>
</body>
</html>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
    }
}
