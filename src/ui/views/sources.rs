use asmforge::application::{Project, SourceListing};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::display_rel;

pub fn render_sources(
    listing: &SourceListing,
    project: &Project,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let root = project.paths.root();
    let mut out = String::new();

    let entry_icon = if listing.entry_exists {
        Icon::Success
    } else {
        Icon::Warning
    };
    out.push_str(&format!(
        "{} {} {}\n",
        entry_icon.colored(supports_color, supports_unicode),
        ColoredText::plain("entry").bold().render(supports_color),
        display_rel(root, &listing.entry)
    ));

    for (category, sources) in listing.discovery.iter() {
        out.push_str(&format!(
            "\n{} {}\n",
            ColoredText::info(category.as_str()).bold().render(supports_color),
            ColoredText::dim(format!("({})", sources.len())).render(supports_color)
        ));
        for source in sources {
            out.push_str(&format!("  {}\n", display_rel(root, source.path())));
        }
    }

    out.push_str(&format!(
        "\n{} source(s) in {} categories\n",
        listing.discovery.total_sources(),
        listing.discovery.category_count()
    ));
    out
}

pub fn sources_json(listing: &SourceListing) -> serde_json::Value {
    let categories: Vec<serde_json::Value> = listing
        .discovery
        .iter()
        .map(|(category, sources)| {
            serde_json::json!({
                "name": category.as_str(),
                "count": sources.len(),
                "sources": sources
                    .iter()
                    .map(|s| s.path().display().to_string())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::json!({
        "event": "sources",
        "entry": listing.entry.display().to_string(),
        "entry_exists": listing.entry_exists,
        "total": listing.discovery.total_sources(),
        "categories": categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asmforge::config::Config;
    use asmforge::domain::entities::Discovery;
    use asmforge::domain::value_objects::SourceFile;
    use asmforge::ModuleCategory;
    use std::path::PathBuf;

    fn listing() -> SourceListing {
        let network = ModuleCategory::new("network").unwrap();
        let mut discovery = Discovery::new();
        discovery.push(
            network.clone(),
            vec![
                SourceFile::new(network.clone(), "/p/src/network/a.asm"),
                SourceFile::new(network, "/p/src/network/b.asm"),
            ],
        );
        discovery.push(ModuleCategory::new("utils").unwrap(), Vec::new());
        SourceListing {
            entry: PathBuf::from("/p/src/main.asm"),
            entry_exists: false,
            discovery,
        }
    }

    #[test]
    fn groups_with_counts() {
        let project = Project::new("/p", Config::default());
        let rendered = render_sources(&listing(), &project, false, false);
        assert!(rendered.starts_with("[WARN] entry src/main.asm"));
        assert!(rendered.contains("network (2)\n  src/network/a.asm\n  src/network/b.asm"));
        assert!(rendered.contains("utils (0)"));
        assert!(rendered.ends_with("2 source(s) in 2 categories\n"));
    }

    #[test]
    fn json_shape() {
        let value = sources_json(&listing());
        assert_eq!(value["total"], 2);
        assert_eq!(value["categories"][1]["name"], "utils");
        assert_eq!(value["categories"][1]["count"], 0);
    }
}
