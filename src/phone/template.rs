use super::config::SegmentConfig;
use crate::mask::Template;

const COUNTRY_PATTERN: &str = "+99";
const LOCAL_PATTERN: &str = "(99)";
const SUBSCRIBER_8_PATTERN: &str = "9999-9999";
const SUBSCRIBER_9_PATTERN: &str = "99999-9999";

pub fn template_pattern(segments: SegmentConfig, nine_digits: bool) -> String {
    let mut pattern = String::new();
    if segments.with_country {
        pattern.push_str(COUNTRY_PATTERN);
        if segments.with_local || segments.with_subscriber {
            pattern.push(' ');
        }
    }
    if segments.with_local {
        pattern.push_str(LOCAL_PATTERN);
        if segments.with_subscriber {
            pattern.push(' ');
        }
    }
    if segments.with_subscriber {
        pattern.push_str(if nine_digits {
            SUBSCRIBER_9_PATTERN
        } else {
            SUBSCRIBER_8_PATTERN
        });
    }
    pattern
}

pub fn build_template(segments: SegmentConfig, nine_digits: bool) -> Template {
    Template::parse(template_pattern(segments, nine_digits).as_str())
}

/// Text length at which auto mode flips between the 8- and 9-digit forms.
pub fn raw_input_cap(segments: SegmentConfig) -> usize {
    let mut cap = 0;
    if segments.with_subscriber {
        cap += 9;
    }
    if segments.with_local {
        cap += 5;
    }
    if segments.with_country {
        cap += 4;
    }
    cap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_segment_configs() -> impl Iterator<Item = SegmentConfig> {
        (0u8..8).map(SegmentConfig::from_bits)
    }

    #[test]
    fn builds_every_documented_form() {
        let cases = [
            (SegmentConfig::none(), false, ""),
            (SegmentConfig::new(true, false, false), false, "+99"),
            (SegmentConfig::new(false, true, false), false, "(99)"),
            (SegmentConfig::new(false, false, true), false, "9999-9999"),
            (SegmentConfig::new(false, false, true), true, "99999-9999"),
            (SegmentConfig::new(false, true, true), false, "(99) 9999-9999"),
            (SegmentConfig::new(false, true, true), true, "(99) 99999-9999"),
            (SegmentConfig::new(true, true, false), true, "+99 (99)"),
            (SegmentConfig::new(true, false, true), false, "+99 9999-9999"),
            (SegmentConfig::all(), true, "+99 (99) 99999-9999"),
        ];
        for (segments, nine, expected) in cases {
            assert_eq!(build_template(segments, nine).to_string(), expected);
        }
    }

    #[test]
    fn one_digit_run_per_enabled_segment() {
        for segments in all_segment_configs() {
            let enabled = [
                segments.with_country,
                segments.with_local,
                segments.with_subscriber,
            ]
            .iter()
            .filter(|on| **on)
            .count();
            let subscriber_runs = usize::from(segments.with_subscriber);
            for nine in [false, true] {
                let template = build_template(segments, nine);
                // The subscriber number is split by a hyphen into two runs.
                assert_eq!(template.digit_runs(), enabled + subscriber_runs);
            }
        }
    }

    #[test]
    fn cap_matches_eight_digit_template_when_subscriber_enabled() {
        for segments in all_segment_configs().filter(|s| s.with_subscriber) {
            assert_eq!(raw_input_cap(segments), build_template(segments, false).len());
            assert_eq!(raw_input_cap(segments) + 1, build_template(segments, true).len());
        }
    }

    #[test]
    fn placeholders_count_digits_per_form() {
        let segments = SegmentConfig::new(false, true, true);
        assert_eq!(build_template(segments, false).placeholder_count(), 10);
        assert_eq!(build_template(segments, true).placeholder_count(), 11);
        assert_eq!(build_template(SegmentConfig::all(), true).placeholder_count(), 13);
        assert_eq!(build_template(SegmentConfig::none(), true).placeholder_count(), 0);
    }

    #[test]
    fn cap_counts_separator_for_trailing_segments() {
        assert_eq!(raw_input_cap(SegmentConfig::new(true, true, false)), 9);
        assert_eq!(build_template(SegmentConfig::new(true, true, false), false).len(), 8);
        assert_eq!(raw_input_cap(SegmentConfig::none()), 0);
    }
}
