//! Security feed shown next to the radar.

use rand::Rng;

use chsim_core::constants::LOG_CAPACITY;
use chsim_core::enums::{LogLevel, PenaltyReason};
use chsim_core::events::LogEntry;

fn entry(id: &str, message: &str, time: &str, level: LogLevel) -> LogEntry {
    LogEntry {
        id: id.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        level,
    }
}

/// Newest-first, bounded log of kernel anomalies.
#[derive(Debug, Clone)]
pub struct AnomalyLog {
    entries: Vec<LogEntry>,
}

impl Default for AnomalyLog {
    fn default() -> Self {
        Self::with_boot_entries()
    }
}

impl AnomalyLog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::with_capacity(LOG_CAPACITY + 1),
        }
    }

    /// The entries present when the kernel page first loads.
    pub fn with_boot_entries() -> Self {
        let mut log = Self::empty();
        log.entries = vec![
            entry("WARN_73", "Alps mesh buffer limit", "14:02", LogLevel::Warn),
            entry("WARN_51", "HB Train clock skew", "11:40", LogLevel::Warn),
            entry("INFO_12", "Mood stabilization deployed", "09:15", LogLevel::Info),
            entry("BOOT_01", "Switzerland.exe started", "00:00", LogLevel::Info),
        ];
        log
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn alert_count(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Warn)
            .count() as u32
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(LOG_CAPACITY);
    }

    pub fn record_breach<R: Rng>(&mut self, rng: &mut R, time: &str) {
        let id = format!("CRIT_{}", rng.gen_range(10..=99));
        self.push(entry(&id, "[CRITICAL] KERNEL_BREACH", time, LogLevel::Warn));
    }

    pub fn record_recovery<R: Rng>(&mut self, rng: &mut R, time: &str) {
        let id = format!("SYNC_{}", rng.gen_range(10..=99));
        self.push(entry(&id, "TRAIN SCHEDULE RECOVERED", time, LogLevel::Info));
    }

    pub fn record_penalty<R: Rng>(&mut self, rng: &mut R, time: &str, reason: PenaltyReason) {
        let id = format!("WARN_{}", rng.gen_range(10..=99));
        let message = format!("[WARN] {}", reason.code());
        self.push(entry(&id, &message, time, LogLevel::Warn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_boot_entries() {
        let log = AnomalyLog::with_boot_entries();
        assert_eq!(log.entries().len(), 4);
        assert_eq!(log.alert_count(), 2);
        assert_eq!(log.entries()[3].id, "BOOT_01");
    }

    #[test]
    fn test_newest_first_and_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut log = AnomalyLog::with_boot_entries();
        for _ in 0..8 {
            log.record_breach(&mut rng, "12:00");
        }
        log.record_recovery(&mut rng, "12:01");
        assert_eq!(log.entries().len(), LOG_CAPACITY);
        assert_eq!(log.entries()[0].message, "TRAIN SCHEDULE RECOVERED");
        assert_eq!(log.entries()[0].time, "12:01");
        assert_eq!(log.entries()[0].level, LogLevel::Info);
        // Only the newest boot entry survives.
        assert_eq!(log.entries()[9].id, "WARN_73");
        assert_eq!(log.alert_count(), 8 + 2 - 1);
    }

    #[test]
    fn test_ids_carry_two_digit_suffix() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut log = AnomalyLog::empty();
        for _ in 0..50 {
            log.record_penalty(&mut rng, "08:00", PenaltyReason::EnergyOverconsumption);
            let id = &log.entries()[0].id;
            let suffix: u32 = id.strip_prefix("WARN_").unwrap().parse().unwrap();
            assert!((10..=99).contains(&suffix));
        }
        assert_eq!(log.entries()[0].message, "[WARN] ENERGY_OVERCONSUMPTION");
    }
}
