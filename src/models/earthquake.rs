#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarthquakeRecord {
    pub title: String,
    pub time_millis: i64,
    pub tsunami_alert: i32,
}

impl EarthquakeRecord {
    pub fn new(title: impl Into<String>, time_millis: i64, tsunami_alert: i32) -> Self {
        Self {
            title: title.into(),
            time_millis,
            tsunami_alert,
        }
    }
}

/// Outcome of extracting the first earthquake from a response body.
///
/// `NotAvailable` replaces the zero-valued placeholder record: no field of a
/// missing earthquake can be mistaken for real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EarthquakeLookup {
    Found(EarthquakeRecord),
    NotAvailable,
}

impl EarthquakeLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, EarthquakeLookup::Found(_))
    }

    pub fn record(&self) -> Option<&EarthquakeRecord> {
        match self {
            EarthquakeLookup::Found(record) => Some(record),
            EarthquakeLookup::NotAvailable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsunamiAlert {
    None,
    Issued,
    Unknown,
}

impl TsunamiAlert {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => TsunamiAlert::None,
            1 => TsunamiAlert::Issued,
            _ => TsunamiAlert::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_exposes_its_record() {
        let lookup = EarthquakeLookup::Found(EarthquakeRecord::new("M 7.1 - offshore", 1393290141440, 1));
        assert!(lookup.is_found());
        assert_eq!(lookup.record().map(|r| r.time_millis), Some(1393290141440));
    }

    #[test]
    fn not_available_has_no_record() {
        assert!(!EarthquakeLookup::NotAvailable.is_found());
        assert_eq!(EarthquakeLookup::NotAvailable.record(), None);
    }

    #[test]
    fn tsunami_codes_map_to_alert_states() {
        assert_eq!(TsunamiAlert::from_code(0), TsunamiAlert::None);
        assert_eq!(TsunamiAlert::from_code(1), TsunamiAlert::Issued);
        assert_eq!(TsunamiAlert::from_code(2), TsunamiAlert::Unknown);
        assert_eq!(TsunamiAlert::from_code(-1), TsunamiAlert::Unknown);
    }
}
