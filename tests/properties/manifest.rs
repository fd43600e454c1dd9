//! Property tests for aggregate-header generation.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use asmforge::domain::entities::manifest::without_timestamp;
use asmforge::domain::services::ManifestGenerator;
use asmforge::domain::value_objects::{ModuleCategory, SourceFile};
use asmforge::BuildMode;

fn stems() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z][a-z0-9_]{0,11}", 0..12)
        .prop_map(|set| set.into_iter().collect())
}

fn sources(category: &ModuleCategory, stems: &[String]) -> Vec<SourceFile> {
    stems
        .iter()
        .map(|s| {
            SourceFile::new(
                category.clone(),
                PathBuf::from("/proj/src")
                    .join(category.as_str())
                    .join(format!("{s}.asm")),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one include directive per source, in input order, all relative.
    #[test]
    fn property_one_relative_entry_per_source(stems in stems()) {
        let category = ModuleCategory::new("network").unwrap();
        let generator = ManifestGenerator::new("/proj/src", "/proj/include/auto", BuildMode::Include);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let manifest = generator.build(&category, &sources(&category, &stems), now);

        prop_assert_eq!(manifest.entries().len(), stems.len());
        prop_assert_eq!(manifest.fallback_count(), 0);
        for (entry, stem) in manifest.entries().iter().zip(&stems) {
            prop_assert_eq!(entry.path(), format!("network/{stem}.asm"));
        }
        let rendered = manifest.render();
        prop_assert_eq!(rendered.matches("%include").count(), stems.len());
    }

    /// PROPERTY: regenerating from the same sources only changes the timestamp.
    #[test]
    fn property_regeneration_is_stable(
        stems in stems(),
        first_hour in 0u32..24,
        second_hour in 0u32..24,
    ) {
        let category = ModuleCategory::new("utils").unwrap();
        let generator = ManifestGenerator::new("/proj/src", "/proj/include/auto", BuildMode::Separate);
        let list = sources(&category, &stems);

        let first = generator
            .build(&category, &list, Utc.with_ymd_and_hms(2026, 1, 1, first_hour, 0, 0).unwrap())
            .render();
        let second = generator
            .build(&category, &list, Utc.with_ymd_and_hms(2026, 1, 1, second_hour, 0, 0).unwrap())
            .render();

        prop_assert_eq!(without_timestamp(&first), without_timestamp(&second));
    }
}
