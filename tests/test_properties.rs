use proptest::prelude::*;
use raw_text_extractor::config::DENY_LIST;
use raw_text_extractor::{Category, Extractor, ExtractorConfig, Report};

fn flip_case(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_deny_listed_lines_add_nothing(
        prefix in "[ -~]{0,40}",
        suffix in "[ -~]{0,40}",
        marker in prop::sample::select(DENY_LIST.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let line = format!("{prefix}{}{suffix} jo@x.com #tag 10:30", flip_case(marker, &mask));
        let mut extractor = Extractor::default();
        extractor.process_line(&line);

        prop_assert!(extractor.store().is_empty());
        prop_assert_eq!(extractor.stats().rejected, 1);
    }

    #[test]
    fn prop_overlong_lines_add_nothing(extra in 1usize..64) {
        let config = ExtractorConfig::default().with_max_line_length(32);
        let line = format!("#{}", "a".repeat(31 + extra));
        let mut extractor = Extractor::new(&config);
        extractor.process_line(&line);

        prop_assert!(extractor.store().is_empty());
    }

    #[test]
    fn prop_total_found_matches_bucket_sizes(
        lines in prop::collection::vec("[a-zA-Z0-9@.:# ,-]{0,60}", 0..20),
    ) {
        let mut extractor = Extractor::default();
        for line in &lines {
            extractor.process_line(line);
        }
        let report: Report = extractor.finish();

        let sum: usize = Category::ALL
            .iter()
            .map(|c| report.data().bucket(*c).len())
            .sum();
        prop_assert_eq!(report.total_found(), sum);
    }

    #[test]
    fn prop_buckets_hold_no_duplicates(
        tags in prop::collection::vec("#[a-c]{1,2}", 0..30),
    ) {
        let mut extractor = Extractor::default();
        for tag in &tags {
            extractor.process_line(tag);
        }
        let report = extractor.finish();
        let bucket = report.data().bucket(Category::Hashtags);

        let mut unique = bucket.to_vec();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), bucket.len());
    }
}
