/// Quota shown in the sidebar. Fixed figures, not derived from any item sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageUsage {
    pub used_percent: u8,
    pub used_label: &'static str,
    pub total_label: &'static str,
}

impl StorageUsage {
    pub const fn fixed() -> Self {
        Self {
            used_percent: 43,
            used_label: "4.3 GB",
            total_label: "10 GB",
        }
    }

    pub fn summary(&self) -> String {
        format!("Storage: {}% used", self.used_percent)
    }

    pub fn detail(&self) -> String {
        format!("{} of {} used", self.used_label, self.total_label)
    }

    /// Fill ratio of the usage bar in `0.0..=1.0`.
    pub fn fill_fraction(&self) -> f32 {
        f32::from(self.used_percent.min(100)) / 100.0
    }
}

impl Default for StorageUsage {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_usage_labels() {
        let usage = StorageUsage::fixed();
        assert_eq!(usage.summary(), "Storage: 43% used");
        assert_eq!(usage.detail(), "4.3 GB of 10 GB used");
        assert!((usage.fill_fraction() - 0.43).abs() < f32::EPSILON);
    }
}
