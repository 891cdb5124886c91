use {
    crate::{
        constants::{DEFAULT_LARGEST_UNITS, DEFAULT_TICKS_PER_SECOND, DEFAULT_TICKS_PER_SLOT},
        error::{FormatError, FormatResult},
    },
    chrono::TimeDelta,
    std::sync::LazyLock,
};

static DEFAULT_HUMANIZER: LazyLock<DurationHumanizer> = LazyLock::new(DurationHumanizer::default);

/// Shared read-only humanizer with the explorer defaults.
pub fn default_humanizer() -> &'static DurationHumanizer {
    &DEFAULT_HUMANIZER
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Hour,
    Minute,
    Second,
}

impl DurationUnit {
    /// Largest first.
    pub const ALL: [DurationUnit; 4] = [
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    pub fn millis(&self) -> f64 {
        match self {
            DurationUnit::Day => 86_400_000.0,
            DurationUnit::Hour => 3_600_000.0,
            DurationUnit::Minute => 60_000.0,
            DurationUnit::Second => 1_000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Day => "d",
            DurationUnit::Hour => "h",
            DurationUnit::Minute => "m",
            DurationUnit::Second => "s",
        }
    }
}

/// Compact duration renderer: `1d 2h 3m`, `1m 4s`, `0s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationHumanizer {
    largest: usize,
    round: bool,
    spacer: String,
    delimiter: String,
}

impl Default for DurationHumanizer {
    fn default() -> Self {
        Self {
            largest: DEFAULT_LARGEST_UNITS,
            round: true,
            spacer: String::new(),
            delimiter: " ".to_string(),
        }
    }
}

impl DurationHumanizer {
    /// Caps the number of unit groups shown. At least one is always shown.
    pub fn with_largest(mut self, largest: usize) -> Self {
        self.largest = largest.max(1);
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_spacer(mut self, spacer: impl Into<String>) -> Self {
        self.spacer = spacer.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn largest(&self) -> usize {
        self.largest
    }

    pub fn humanize(&self, duration: TimeDelta) -> String {
        self.render(duration.num_milliseconds() as f64)
    }

    /// The sign of `ms` is ignored. NaN and infinities are rejected.
    pub fn humanize_millis(&self, ms: f64) -> FormatResult<String> {
        if !ms.is_finite() {
            return Err(FormatError::NonFinite(ms));
        }
        Ok(self.render(ms))
    }

    /// Expects a finite `ms`.
    fn render(&self, ms: f64) -> String {
        let units = DurationUnit::ALL;
        let last = units.len() - 1;

        let mut remaining = ms.abs();
        let mut counts = [0.0f64; 4];
        for (i, unit) in units.iter().enumerate() {
            let count = remaining / unit.millis();
            counts[i] = if i == last { count } else { count.floor() };
            remaining -= counts[i] * unit.millis();
        }

        if self.round {
            self.round_counts(&mut counts);
        }

        let pieces: Vec<String> = counts
            .iter()
            .zip(units)
            .filter(|(count, _)| **count != 0.0)
            .take(self.largest)
            .map(|(count, unit)| format!("{count}{}{}", self.spacer, unit.label()))
            .collect();

        if pieces.is_empty() {
            return format!("0{}{}", self.spacer, units[last].label());
        }
        pieces.join(&self.delimiter)
    }

    /// Rounds each count from the smallest unit up. A count that fills its
    /// larger unit, or that falls outside the `largest` window, is folded
    /// into the next larger unit before that one is rounded.
    fn round_counts(&self, counts: &mut [f64; 4]) {
        let units = DurationUnit::ALL;
        let first_occupied = counts.iter().position(|count| *count != 0.0).unwrap_or(0);

        for i in (0..counts.len()).rev() {
            counts[i] = counts[i].round();
            if i == 0 {
                break;
            }
            let ratio = units[i - 1].millis() / units[i].millis();
            let outside_window = i.saturating_sub(first_occupied) > self.largest - 1;
            if counts[i] % ratio == 0.0 || outside_window {
                counts[i - 1] += counts[i] / ratio;
                counts[i] = 0.0;
            }
        }
    }
}

/// Slot length derived from the cluster tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotClock {
    ticks_per_second: u64,
    ticks_per_slot: u64,
}

impl Default for SlotClock {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            ticks_per_slot: DEFAULT_TICKS_PER_SLOT,
        }
    }
}

impl SlotClock {
    pub fn new(ticks_per_second: u64, ticks_per_slot: u64) -> FormatResult<Self> {
        if ticks_per_second == 0 || ticks_per_slot == 0 {
            return Err(FormatError::InvalidTickRate);
        }
        Ok(Self {
            ticks_per_second,
            ticks_per_slot,
        })
    }

    pub fn ms_per_slot(&self) -> f64 {
        1_000.0 * self.ticks_per_slot as f64 / self.ticks_per_second as f64
    }

    pub fn slots_to_millis(&self, slots: u64) -> f64 {
        slots as f64 * self.ms_per_slot()
    }
}

/// Approximate wall-clock time covered by `slots`, e.g. `1m 4s` for 160
/// slots at 400ms each.
pub fn humanize_slot_duration(
    slots: u64,
    clock: &SlotClock,
    humanizer: &DurationHumanizer,
) -> String {
    // any u64 slot count times a finite slot length stays finite
    humanizer.render(clock.slots_to_millis(slots))
}

/// [`humanize_slot_duration`] with the default clock and humanizer.
pub fn humanize_slots(slots: u64) -> String {
    humanize_slot_duration(slots, &SlotClock::default(), default_humanizer())
}
