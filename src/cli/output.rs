//! Output formatting utilities

use crate::application::BuildSummary;
use crate::domain::MetaList;
use crate::infrastructure::OBJECT_TYPES;

/// Format meta tags as `property = content` lines
pub fn format_tag_list(meta: &MetaList) -> String {
    let mut output = String::new();
    for tag in meta {
        output.push_str(&format!("{} = {}\n", tag.name(), tag.content));
    }
    output
}

/// Format the result of a build for display
pub fn format_build_summary(summary: &BuildSummary) -> String {
    let mut output = String::new();
    for fragment in &summary.fragments {
        output.push_str(&format!(
            "{:<20} {} -> {} ({} tags)\n",
            fragment.object_type,
            fragment.document.display(),
            fragment.output.display(),
            fragment.tag_count
        ));
    }
    for skipped in &summary.skipped {
        output.push_str(&format!("{:<20} {}\n", "skipped", skipped.display()));
    }
    output.push_str(&format!(
        "Rendered {} document(s) into {}\n",
        summary.fragments.len(),
        summary.out_dir.display()
    ));
    output
}

/// Format the supported object types, one per line
pub fn format_types() -> String {
    let mut output = String::new();
    for object_type in OBJECT_TYPES {
        output.push_str(object_type);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Fragment;
    use std::path::PathBuf;

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&MetaList::new()), "");
    }

    #[test]
    fn test_format_tag_list() {
        let mut meta = MetaList::new();
        meta.add("og", "type", "website").add("og", "title", "Example");
        assert_eq!(
            format_tag_list(&meta),
            "og:type = website\nog:title = Example\n"
        );
    }

    #[test]
    fn test_format_build_summary() {
        let summary = BuildSummary {
            out_dir: PathBuf::from("meta"),
            fragments: vec![Fragment {
                document: PathBuf::from("index.toml"),
                output: PathBuf::from("meta/index.html"),
                object_type: "website",
                tag_count: 4,
            }],
            skipped: vec![PathBuf::from("other.toml")],
        };

        let output = format_build_summary(&summary);
        assert!(output.contains("index.toml -> meta/index.html (4 tags)"));
        assert!(output.contains("skipped"));
        assert!(output.contains("other.toml"));
        assert!(output.ends_with("Rendered 1 document(s) into meta\n"));
    }

    #[test]
    fn test_format_types() {
        let output = format_types();
        assert!(output.starts_with("website\n"));
        assert!(output.contains("music.radio_station\n"));
        assert_eq!(output.lines().count(), 12);
    }
}
