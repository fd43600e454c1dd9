//! Property tests for build-mode selection.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use asmforge::domain::entities::Discovery;
use asmforge::domain::services::select;
use asmforge::domain::value_objects::{ModuleCategory, SourceFile};
use asmforge::BuildMode;

/// Up to four categories with up to six sources each.
fn discovery() -> impl Strategy<Value = Discovery> {
    proptest::collection::vec(0usize..6, 0..4).prop_map(|counts| {
        let mut discovery = Discovery::new();
        for (i, count) in counts.into_iter().enumerate() {
            let category = ModuleCategory::new(format!("cat{i}")).unwrap();
            let sources = (0..count)
                .map(|n| {
                    SourceFile::new(
                        category.clone(),
                        PathBuf::from(format!("src/cat{i}/m{n}.asm")),
                    )
                })
                .collect();
            discovery.push(category, sources);
        }
        discovery
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: include mode links exactly the entry object.
    #[test]
    fn property_include_links_entry_only(discovery in discovery()) {
        let entry = Path::new("build/obj/main.o");
        let plan = select(BuildMode::Include, &discovery, entry, Path::new("build/obj"));

        prop_assert_eq!(plan.link_set.objects(), &[entry.to_path_buf()]);
        prop_assert_eq!(plan.compile_steps().count(), 0);
        prop_assert_eq!(plan.skipped_count(), discovery.total_sources());
    }

    /// PROPERTY: separate mode links the entry first, then one object per source.
    #[test]
    fn property_separate_links_entry_plus_sources(discovery in discovery()) {
        let entry = Path::new("build/obj/main.o");
        let obj_root = Path::new("build/obj");
        let plan = select(BuildMode::Separate, &discovery, entry, obj_root);

        prop_assert_eq!(plan.link_set.len(), discovery.total_sources() + 1);
        prop_assert_eq!(plan.link_set.entry(), Some(entry));

        let expected: Vec<PathBuf> = discovery
            .all_sources()
            .map(|s| s.object_path(obj_root))
            .collect();
        prop_assert_eq!(&plan.link_set.objects()[1..], expected.as_slice());
    }
}
