use {
    crate::{
        amount::{AmountFormatter, DEFAULT_COARSE_FRACTION_DIGITS, DEFAULT_FINE_FRACTION_DIGITS},
        constants::{
            DEFAULT_LARGEST_UNITS, DEFAULT_LOCALE, DEFAULT_TICKS_PER_SECOND,
            DEFAULT_TICKS_PER_SLOT, LAMPORT_FMT_CONFIG_RELATIVE_PATH,
        },
        duration::{DurationHumanizer, SlotClock},
        error::{FormatError, FormatResult},
    },
    anyhow::Context,
    serde::{Deserialize, Serialize},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

pub fn lamport_fmt_config_path() -> FormatResult<PathBuf> {
    let mut path = dirs::home_dir().ok_or(FormatError::HomeDirectoryNotFound)?;
    path.push(LAMPORT_FMT_CONFIG_RELATIVE_PATH);
    Ok(path)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatterConfig {
    pub ticks_per_second: u64,
    pub ticks_per_slot: u64,
    pub locale: String,
    pub coarse_fraction_digits: u32,
    pub fine_fraction_digits: u32,
    pub largest_units: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            ticks_per_slot: DEFAULT_TICKS_PER_SLOT,
            locale: DEFAULT_LOCALE.to_string(),
            coarse_fraction_digits: DEFAULT_COARSE_FRACTION_DIGITS,
            fine_fraction_digits: DEFAULT_FINE_FRACTION_DIGITS,
            largest_units: DEFAULT_LARGEST_UNITS,
        }
    }
}

impl FormatterConfig {
    /// Loads `~/.config/lamport-fmt.toml`.
    pub fn load() -> FormatResult<FormatterConfig> {
        Self::load_from_path(lamport_fmt_config_path()?)
    }

    /// Like [`FormatterConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default() -> FormatResult<FormatterConfig> {
        match Self::load() {
            Err(FormatError::ConfigPathDoesNotExist) => {
                tracing::debug!("no lamport-fmt config found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> FormatResult<FormatterConfig> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FormatError::ConfigPathDoesNotExist);
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: FormatterConfig = toml::from_str(&data)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded lamport-fmt config");
        Ok(config)
    }

    pub fn validate(&self) -> FormatResult<()> {
        self.slot_clock()?;
        self.amount_formatter()?;
        Ok(())
    }

    pub fn slot_clock(&self) -> FormatResult<SlotClock> {
        SlotClock::new(self.ticks_per_second, self.ticks_per_slot)
    }

    pub fn amount_formatter(&self) -> FormatResult<AmountFormatter> {
        AmountFormatter::from_locale_name(&self.locale)
    }

    pub fn humanizer(&self) -> DurationHumanizer {
        DurationHumanizer::default().with_largest(self.largest_units)
    }
}
