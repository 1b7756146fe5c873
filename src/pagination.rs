/// Questions per page; fixed by the service.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pages shown on each side of the current one in the page strip.
pub const WINDOW_RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: u32,
    pub active: bool,
}

pub fn page_count(total_questions: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_questions.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One control per page `1..=page_count`, with `current` marked active.
pub fn page_controls(total_questions: u64, current: u32) -> Vec<PageControl> {
    (1..=page_count(total_questions, QUESTIONS_PER_PAGE))
        .map(|number| PageControl {
            number,
            active: number == current,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(PageControl),
    Gap,
}

/// The first and last page plus `current ± radius`, with a gap wherever pages
/// are skipped. A gap that would hide a single page shows that page instead.
pub fn page_strip(total_questions: u64, current: u32, radius: u32) -> Vec<PageSlot> {
    let count = page_count(total_questions, QUESTIONS_PER_PAGE);
    if count == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, count);
    let low = current.saturating_sub(radius).max(1);
    let high = current.saturating_add(radius).min(count);

    let mut numbers: Vec<u32> = Vec::with_capacity((high - low) as usize + 5);
    numbers.push(1);
    match low {
        1 | 2 => {}
        3 => numbers.push(2),
        _ => {}
    }
    numbers.extend((low..=high).filter(|n| *n > 1));
    match count - high {
        0 => {}
        1 => numbers.push(count),
        2 => numbers.extend([count - 1, count]),
        _ => numbers.push(count),
    }
    numbers.dedup();

    let mut slots = Vec::with_capacity(numbers.len() + 2);
    let mut previous = 0;
    for number in numbers {
        if previous != 0 && number > previous + 1 {
            slots.push(PageSlot::Gap);
        }
        slots.push(PageSlot::Page(PageControl {
            number,
            active: number == current,
        }));
        previous = number;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn page_count_matches_ceiling_division() {
        for total in 0..250u64 {
            let expected = (total as f64 / 10.0).ceil() as u32;
            assert_eq!(page_count(total, QUESTIONS_PER_PAGE), expected, "total={}", total);
        }
    }

    #[test]
    fn no_controls_without_questions() {
        assert!(page_controls(0, 1).is_empty());
    }

    #[test]
    fn current_page_is_the_only_active_control() {
        let controls = page_controls(25, 1);
        let numbers: Vec<u32> = controls.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(controls[0].active);
        assert!(!controls[1].active);
        assert!(!controls[2].active);
    }

    fn strip_labels(total: u64, current: u32) -> Vec<String> {
        page_strip(total, current, WINDOW_RADIUS)
            .into_iter()
            .map(|slot| match slot {
                PageSlot::Page(c) if c.active => format!("[{}]", c.number),
                PageSlot::Page(c) => c.number.to_string(),
                PageSlot::Gap => "…".to_string(),
            })
            .collect()
    }

    #[test]
    fn short_strip_shows_every_page() {
        assert_eq!(strip_labels(25, 1), vec!["[1]", "2", "3"]);
        assert_eq!(strip_labels(70, 4), vec!["1", "2", "3", "[4]", "5", "6", "7"]);
        assert!(page_strip(0, 1, WINDOW_RADIUS).is_empty());
    }

    #[test]
    fn long_strip_is_windowed_around_current() {
        assert_eq!(strip_labels(1000, 1), vec!["[1]", "2", "3", "…", "100"]);
        assert_eq!(
            strip_labels(1000, 50),
            vec!["1", "…", "48", "49", "[50]", "51", "52", "…", "100"]
        );
        assert_eq!(strip_labels(1000, 100), vec!["1", "…", "98", "99", "[100]"]);
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_a_gap() {
        assert_eq!(
            strip_labels(1000, 4),
            vec!["1", "2", "3", "[4]", "5", "6", "…", "100"]
        );
        assert_eq!(
            strip_labels(1000, 97),
            vec!["1", "…", "95", "96", "[97]", "98", "99", "100"]
        );
    }

    #[test]
    fn huge_totals_stay_small() {
        let strip = page_strip(u64::MAX, 7, WINDOW_RADIUS);
        assert!(strip.len() <= 2 * WINDOW_RADIUS as usize + 5);
    }
}
