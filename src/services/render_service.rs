use crate::{
    config::AppConfig,
    models::{DashboardSnapshot, GenderBucket, User},
    utils::html::escape,
};

pub const PAGE_TITLE: &str = "Customer Data App";
pub const PAGE_DESCRIPTION: &str = "A simple app to manage customer data.";
pub const GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];

const CHART_WIDTH: u64 = 600;
const CHART_HEIGHT: u64 = 250;
const CHART_MARGIN_LEFT: u64 = 40;
const CHART_MARGIN_BOTTOM: u64 = 30;
const CHART_MARGIN_TOP: u64 = 10;
const BAR_FILL: &str = "#65ba74";
const BAR_STROKE: &str = "#46a758";

/// Renders the full dashboard page: add-user dialog, users table and gender chart.
pub fn render_dashboard(snapshot: &DashboardSnapshot, config: &AppConfig) -> String {
    let footer = if config.show_built_with {
        "<footer class=\"built-with\">Built with actix-web</footer>"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<meta name="application-name" content="{app_name}">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; background: #fbfefb; color: #1a211b; margin: 0; }}
.container {{ max-width: 960px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; align-items: center; gap: 16px; }}
button {{ border-radius: 9999px; border: none; padding: 8px 16px; background: #46a758; color: white; font-size: 1rem; cursor: pointer; }}
button.soft {{ background: #e8e8e8; color: #202020; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ padding: 12px; text-align: left; border-bottom: 1px solid #e0e0e0; }}
tbody tr:hover {{ background: #f0f0f0; }}
dialog {{ max-width: 450px; border: none; border-radius: 16px; }}
dialog form {{ display: flex; flex-direction: column; gap: 16px; }}
.actions {{ display: flex; gap: 12px; justify-content: flex-end; }}
.chart {{ width: 100%; margin: 25px; }}
</style>
</head>
<body>
<main class="container">
{dialog}
{table}
<div class="chart">
{chart}
</div>
{footer}
</main>
<script>
const events = new EventSource("/api/v1/events");
events.addEventListener("user_added", () => window.location.reload());
</script>
</body>
</html>
"#,
        description = escape(PAGE_DESCRIPTION),
        app_name = escape(&config.app_name),
        title = escape(PAGE_TITLE),
        dialog = render_user_dialog(),
        table = render_user_table(&snapshot.users),
        chart = render_bar_chart(&snapshot.users_for_graph),
        footer = footer,
    )
}

fn render_gender_select() -> String {
    let options: String = GENDER_OPTIONS
        .iter()
        .map(|g| format!("<option value=\"{0}\">{0}</option>", escape(g)))
        .collect();

    // O placeholder fica desabilitado: sem escolha, o campo não é enviado
    format!(
        "<select name=\"gender\"><option value=\"\" disabled selected hidden>Male</option>{}</select>",
        options
    )
}

fn render_user_dialog() -> String {
    format!(
        r#"<button type="button" onclick="document.getElementById('add-user').showModal()">+ Add User</button>
<dialog id="add-user">
<h2>Add New User</h2>
<p>Fill the form with the user's info</p>
<form method="post" action="/users">
<input name="name" placeholder="User Name" required>
<input name="email" placeholder="user@example.com">
{select}
<div class="actions">
<button type="submit" class="soft" formmethod="dialog" formnovalidate>Cancel</button>
<button type="submit">Submit</button>
</div>
</form>
</dialog>"#,
        select = render_gender_select()
    )
}

fn render_user_table(users: &[User]) -> String {
    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&u.name),
                escape(&u.email),
                escape(&u.gender)
            )
        })
        .collect();

    format!(
        "<table>\n<thead><tr><th>Name</th><th>Email</th><th>Gender</th></tr></thead>\n<tbody>\n{}</tbody>\n</table>",
        rows
    )
}

/// Y-axis step so that the axis has at most five labelled ticks.
fn tick_step(max: u64) -> u64 {
    ((max + 3) / 4).max(1)
}

/// Bar chart of the aggregate as inline SVG (x = gender label, y = count).
pub fn render_bar_chart(buckets: &[GenderBucket]) -> String {
    let plot_width = CHART_WIDTH - CHART_MARGIN_LEFT;
    let plot_height = CHART_HEIGHT - CHART_MARGIN_BOTTOM - CHART_MARGIN_TOP;
    let baseline = CHART_HEIGHT - CHART_MARGIN_BOTTOM;

    let max_value = buckets.iter().map(|b| b.value).max().unwrap_or(0);
    let step = tick_step(max_value);
    let axis_max = (max_value.div_ceil(step) * step).max(step);

    let mut svg = format!(
        "<svg viewBox=\"0 0 {w} {h}\" width=\"100%\" height=\"{h}\" role=\"img\" aria-label=\"Users by gender\">\n",
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );

    let mut tick = 0;
    while tick <= axis_max {
        let y = baseline - tick * plot_height / axis_max;
        svg.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y}\" x2=\"{x1}\" y2=\"{y}\" stroke=\"#e0e0e0\"/><text x=\"{tx}\" y=\"{ty}\" font-size=\"12\" text-anchor=\"end\">{tick}</text>\n",
            x0 = CHART_MARGIN_LEFT,
            x1 = CHART_WIDTH,
            tx = CHART_MARGIN_LEFT - 6,
            ty = y + 4,
        ));
        tick += step;
    }

    if !buckets.is_empty() {
        let slot = plot_width / buckets.len() as u64;
        let bar_width = slot * 4 / 5;

        for (i, bucket) in buckets.iter().enumerate() {
            let bar_height = bucket.value * plot_height / axis_max;
            let x = CHART_MARGIN_LEFT + i as u64 * slot + (slot - bar_width) / 2;
            svg.push_str(&format!(
                "<rect class=\"bar\" data-name=\"{name}\" data-value=\"{value}\" x=\"{x}\" y=\"{y}\" width=\"{bw}\" height=\"{bh}\" fill=\"{fill}\" stroke=\"{stroke}\"/>\n<text x=\"{lx}\" y=\"{ly}\" font-size=\"12\" text-anchor=\"middle\">{name}</text>\n",
                name = escape(&bucket.name),
                value = bucket.value,
                y = baseline - bar_height,
                bw = bar_width,
                bh = bar_height,
                fill = BAR_FILL,
                stroke = BAR_STROKE,
                lx = x + bar_width / 2,
                ly = baseline + 18,
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Sitemap with the single dashboard page.
pub fn render_sitemap(api_url: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n<url><loc>{}/</loc><changefreq>daily</changefreq></url>\n</urlset>\n",
        escape(api_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::users_seed::default_users;

    fn bucket(name: &str, value: u64) -> GenderBucket {
        GenderBucket { name: name.to_string(), value }
    }

    #[test]
    fn test_page_lists_every_user() {
        let snapshot = DashboardSnapshot {
            revision: 1,
            users: default_users(),
            users_for_graph: vec![bucket("Male", 3), bucket("Female", 3)],
        };
        let html = render_dashboard(&snapshot, &AppConfig::default());

        assert!(html.contains("<title>Customer Data App</title>"));
        assert!(html.contains("A simple app to manage customer data."));
        for user in &snapshot.users {
            assert!(html.contains(&user.email));
        }
        assert_eq!(html.matches("<tr><td>").count(), 6);
        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains("<dialog id=\"add-user\">"));
        assert!(!html.contains("Built with"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let snapshot = DashboardSnapshot {
            revision: 1,
            users: vec![User::new("<b>Bold</b>", "x@y", "Male")],
            users_for_graph: vec![bucket("Male", 1)],
        };
        let html = render_dashboard(&snapshot, &AppConfig::default());

        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_built_with_flag() {
        let config = AppConfig {
            show_built_with: true,
            ..AppConfig::default()
        };
        let snapshot = DashboardSnapshot {
            revision: 0,
            users: Vec::new(),
            users_for_graph: Vec::new(),
        };
        assert!(render_dashboard(&snapshot, &config).contains("Built with"));
    }

    #[test]
    fn test_form_fields() {
        let html = render_user_dialog();
        assert!(html.contains("name=\"name\" placeholder=\"User Name\" required"));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("<option value=\"Male\">Male</option>"));
        assert!(html.contains("<option value=\"Female\">Female</option>"));
    }

    #[test]
    fn test_chart_has_one_bar_per_bucket_in_order() {
        let svg = render_bar_chart(&[bucket("Male", 4), bucket("Female", 3)]);

        assert_eq!(svg.matches("class=\"bar\"").count(), 2);
        let male = svg.find("data-name=\"Male\" data-value=\"4\"").unwrap();
        let female = svg.find("data-name=\"Female\" data-value=\"3\"").unwrap();
        assert!(male < female);
    }

    #[test]
    fn test_empty_chart_still_renders_axis() {
        let svg = render_bar_chart(&[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("class=\"bar\""));
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(4), 1);
        assert_eq!(tick_step(5), 2);
        assert_eq!(tick_step(40), 10);
    }

    #[test]
    fn test_sitemap() {
        let xml = render_sitemap("https://dashboard.example.com");
        assert!(xml.contains("<loc>https://dashboard.example.com/</loc>"));
    }
}
