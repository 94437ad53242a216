use aptitude_core::model::round_percent;
use services::SessionProgress;

/// Percent complete at which the progress bar gets its sparkle.
const SPARKLE_PERCENT: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressSlot {
    Completed,
    Current,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub label: String,
    pub percent: u32,
    pub show_sparkle: bool,
    pub slots: Vec<ProgressSlot>,
}

#[must_use]
pub fn map_progress(progress: &SessionProgress) -> ProgressVm {
    let completed = u32::try_from(progress.completed.len()).unwrap_or(u32::MAX);
    let total = u32::try_from(progress.total).unwrap_or(u32::MAX);
    let percent = round_percent(completed, total);

    let slots = (1..=progress.total)
        .map(|number| {
            if progress.is_completed(number) {
                ProgressSlot::Completed
            } else if number == progress.current {
                ProgressSlot::Current
            } else {
                ProgressSlot::Pending
            }
        })
        .collect();

    ProgressVm {
        label: format!("Question {} of {}", progress.current, progress.total),
        percent,
        show_sparkle: percent >= SPARKLE_PERCENT,
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn maps_slots_and_percent() {
        let progress = SessionProgress {
            current: 3,
            total: 4,
            completed: BTreeSet::from([1]),
            answered: 2,
        };

        let vm = map_progress(&progress);

        assert_eq!(vm.label, "Question 3 of 4");
        assert_eq!(vm.percent, 25);
        assert!(!vm.show_sparkle);
        assert_eq!(
            vm.slots,
            [
                ProgressSlot::Completed,
                ProgressSlot::Pending,
                ProgressSlot::Current,
                ProgressSlot::Pending,
            ]
        );
    }

    #[test]
    fn sparkle_from_half_way() {
        let progress = SessionProgress {
            current: 4,
            total: 8,
            completed: BTreeSet::from([1, 2, 3, 4]),
            answered: 4,
        };
        let vm = map_progress(&progress);
        assert_eq!(vm.percent, 50);
        assert!(vm.show_sparkle);
        assert_eq!(vm.slots[3], ProgressSlot::Completed);
    }
}
